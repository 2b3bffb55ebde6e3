use crate::io::OutputWriter;
use crate::models::constants::{CASHOUT_STREAK, MAX_OPTIONS};
use crate::models::errors::GameError;
use crate::models::outcome::{EndReason, Ending, Outcome, Settlement};
use crate::models::session::Session;
use crate::services::cashout::cashout_quote;
use crate::services::payout::prize_ladder;
use crate::services::timer::QuestionTimer;

/// Letter shown next to the option at `index`: `A` through `Z`.
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| usize::from(*i) < MAX_OPTIONS)
        .map_or('?', |i| char::from(b'A' + i))
}

pub struct SessionPresenter;

impl SessionPresenter {
    pub fn show_briefing(session: &Session, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "STAKE: {}   QUESTIONS: {}   LIVES: {}",
            session.stake(),
            session.question_count(),
            session.lives_remaining()
        ));
        output.writeln(&format!(
            "{} SECONDS PER QUESTION. ANSWER {} IN A ROW TO UNLOCK CASHOUT.",
            session.config().seconds_per_question,
            CASHOUT_STREAK
        ));
        output.writeln("");
    }

    pub fn show_question(session: &Session, timer: &QuestionTimer, output: &mut dyn OutputWriter) {
        let Some(question) = session.current_question() else {
            return;
        };

        output.writeln(&format!(
            "QUESTION {}/{}   PRIZE: {}   STREAK: {}   LIVES: {}   TIME: {}s",
            session.current_index() + 1,
            session.question_count(),
            session.current_prize(),
            session.streak(),
            session.lives_remaining(),
            timer.remaining()
        ));
        if let Some(category) = &question.category {
            match &question.difficulty {
                Some(difficulty) => output.writeln(&format!("[{} - {}]", category, difficulty)),
                None => output.writeln(&format!("[{}]", category)),
            }
        }
        output.writeln(&question.text);
        for (i, option) in session.visible_options().iter().enumerate() {
            output.writeln(&format!("  {}: {}", option_label(i), option));
        }
    }

    pub fn show_menu(session: &Session, output: &mut dyn OutputWriter) {
        let mut actions = Vec::new();
        if !session.fifty_fifty_used() {
            actions.push("50/50");
        }
        if !session.skip_used() {
            actions.push("SKIP");
        }
        if cashout_quote(session).is_some() {
            actions.push("CASHOUT");
        }
        actions.push("LADDER");
        output.writeln(&format!("  OR TYPE: {}", actions.join(", ")));
    }

    pub fn show_outcome(outcome: &Outcome, output: &mut dyn OutputWriter) {
        match outcome.correct {
            Some(true) => output.writeln(&format!(
                "CORRECT! STREAK {}, RUNNING BALANCE {}",
                outcome.streak, outcome.running_balance
            )),
            Some(false) => {
                if let Some(answer) = &outcome.correct_answer {
                    output.writeln(&format!("WRONG. THE CORRECT ANSWER WAS: {}", answer));
                }
                if outcome.life_lost {
                    output.writeln(&format!(
                        "YOU LOST A LIFE. LIVES REMAINING: {}",
                        outcome.lives_remaining
                    ));
                }
            }
            None => {}
        }
    }

    pub fn show_time_up(output: &mut dyn OutputWriter) {
        output.writeln("TIME'S UP!");
    }

    pub fn show_cashout_quote(amount: u64, output: &mut dyn OutputWriter) {
        output.writeln(&format!("CASHOUT NOW PAYS {}. CONFIRM? (Y/N)", amount));
    }

    pub fn show_ending(ending: &Ending, output: &mut dyn OutputWriter) {
        output.writeln("");
        match ending.reason {
            EndReason::Completed => output.writeln("*** QUIZ COMPLETED ***"),
            EndReason::Failed => output.writeln("*** GAME OVER ***"),
            EndReason::CashedOut => output.writeln("*** CASHED OUT ***"),
        }
        output.writeln(&format!("PAYOUT: {}", ending.payout));
    }

    pub fn show_settlement(settlement: &Settlement, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "SESSION {} SETTLED: {} CREDITED ({} ANSWERED)",
            settlement.session_id, settlement.payout, settlement.questions_answered
        ));
    }

    pub fn show_rejection(err: &GameError, output: &mut dyn OutputWriter) {
        output.writeln(&format!("NOT ALLOWED: {}", err));
    }

    /// Winnings ladder with the rung for the current streak marked.
    pub fn show_ladder(session: &Session, output: &mut dyn OutputWriter) {
        let rungs = session.config().ladder_rungs;
        let active = (session.streak() as usize).min(rungs.saturating_sub(1));
        for (i, amount) in prize_ladder(session.stake(), rungs).iter().enumerate().rev() {
            let marker = if i == active { ">" } else { " " };
            output.writeln(&format!("{} Q{:<3}{}", marker, i + 1, amount));
        }
    }
}
