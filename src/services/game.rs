//! Console play loop
//!
//! Reads commands, turns them into engine events and prints the results.
//! Answer time is measured with a [`Stopwatch`] and replayed into the
//! engine as ticks, so a slow answer loses to the timer.

use tracing::debug;

use crate::game_engine::{Event, GameEngine};
use crate::io::{InputReader, OutputWriter, Stopwatch};
use crate::models::errors::{GameError, GameResult};
use crate::models::outcome::{Outcome, Settlement};
use crate::models::session::{QuestionPhase, Session};
use crate::services::cashout::cashout_quote;
use crate::services::settlement::SettlementSink;
use crate::ui::presenters::SessionPresenter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Play(Event),
    ShowLadder,
}

pub struct Game<'a> {
    engine: GameEngine,
    input: &'a mut dyn InputReader,
    output: &'a mut dyn OutputWriter,
    stopwatch: &'a mut dyn Stopwatch,
}

impl<'a> Game<'a> {
    pub fn new(
        engine: GameEngine,
        input: &'a mut dyn InputReader,
        output: &'a mut dyn OutputWriter,
        stopwatch: &'a mut dyn Stopwatch,
    ) -> Self {
        Game {
            engine,
            input,
            output,
            stopwatch,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play the session to its end and settle it into `sink`.
    pub fn run(&mut self, sink: &mut dyn SettlementSink) -> GameResult<Settlement> {
        SessionPresenter::show_briefing(self.engine.session(), self.output);

        while !self.engine.session().is_ended() {
            SessionPresenter::show_question(self.engine.session(), self.engine.timer(), self.output);
            SessionPresenter::show_menu(self.engine.session(), self.output);

            self.stopwatch.start();
            let line = self.input.read_line("YOUR ANSWER?")?;

            if let Some(outcome) = self.replay_elapsed_time()? {
                SessionPresenter::show_time_up(self.output);
                self.after_outcome(&outcome)?;
                continue;
            }

            let command = match parse_command(line.trim(), self.engine.session()) {
                Some(command) => command,
                None => {
                    self.output
                        .writeln("TYPE THE LETTER OF AN ANSWER OR ONE OF THE LISTED COMMANDS.");
                    continue;
                }
            };

            let event = match command {
                Command::ShowLadder => {
                    SessionPresenter::show_ladder(self.engine.session(), self.output);
                    continue;
                }
                Command::Play(Event::Cashout) if !self.confirm_cashout()? => continue,
                Command::Play(event) => event,
            };

            match self.engine.handle(event) {
                Ok(outcome) => self.after_outcome(&outcome)?,
                Err(err @ GameError::InvalidEvent(_)) => {
                    SessionPresenter::show_rejection(&err, self.output);
                }
                Err(err) => return Err(err),
            }
        }

        if let Some(ending) = self.engine.session().ending() {
            SessionPresenter::show_ending(&ending, self.output);
        }
        let settlement = self.engine.settle(sink)?;
        SessionPresenter::show_settlement(&settlement, self.output);
        Ok(settlement)
    }

    /// Feed the seconds the player spent into the timer.
    /// Returns the resolution if the question ran out of time.
    fn replay_elapsed_time(&mut self) -> GameResult<Option<Outcome>> {
        let elapsed = self.stopwatch.elapsed_secs();
        debug!(elapsed, "replaying answer time");
        for _ in 0..elapsed {
            let outcome = self.engine.handle(Event::Tick)?;
            if outcome.correct.is_some() {
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    fn confirm_cashout(&mut self) -> GameResult<bool> {
        // Ineligible requests go straight to the engine so the rejection is reported.
        let Some(amount) = cashout_quote(self.engine.session()) else {
            return Ok(true);
        };
        SessionPresenter::show_cashout_quote(amount, self.output);
        let answer = self.input.read_line(">")?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    fn after_outcome(&mut self, outcome: &Outcome) -> GameResult<()> {
        SessionPresenter::show_outcome(outcome, self.output);
        let session = self.engine.session();
        if !session.is_ended() && session.phase() == QuestionPhase::Resolved {
            self.engine.handle(Event::Advance)?;
        }
        Ok(())
    }
}

/// Map a line of player input to a command. Single letters pick a visible option.
fn parse_command(input: &str, session: &Session) -> Option<Command> {
    let lowered = input.to_ascii_lowercase();
    match lowered.as_str() {
        "50/50" | "5050" | "50" => return Some(Command::Play(Event::FiftyFifty)),
        "skip" => return Some(Command::Play(Event::Skip)),
        "cashout" | "cash" => return Some(Command::Play(Event::Cashout)),
        "ladder" => return Some(Command::ShowLadder),
        _ => {}
    }

    let mut chars = lowered.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_lowercase() {
        return None;
    }
    let index = (letter as u8 - b'a') as usize;
    session
        .visible_options()
        .get(index)
        .map(|option| Command::Play(Event::Answer(option.clone())))
}
