//! Answer resolution
//!
//! `AwaitingAnswer -> Resolved -> (advance) -> AwaitingAnswer`, or straight
//! to `Ended` when the resolution finishes the session.

use tracing::{debug, info};

use crate::models::errors::{GameResult, Rejection};
use crate::models::outcome::{EndReason, Outcome};
use crate::models::session::{QuestionPhase, Session};
use crate::services::lives;
use crate::services::payout::completion_payout;

/// Submit the player's chosen option for the active question.
///
/// # Errors
///
/// * `Rejection::SessionEnded` after the session has ended
/// * `Rejection::AlreadyResolved` if this question already has a result
/// * `Rejection::OptionNotVisible` if `option` is not currently selectable
pub fn submit_answer(session: &mut Session, option: &str) -> GameResult<Outcome> {
    session.ensure_awaiting_answer()?;
    let question = session.current_question().ok_or(Rejection::SessionEnded)?;
    if !session.visible_options().iter().any(|o| o == option) {
        return Err(Rejection::OptionNotVisible(option.to_string()).into());
    }

    let correct = question.is_correct(option);
    let correct_answer = question.correct_answer.clone();
    session.count_answer();

    if !correct {
        debug!(index = session.current_index(), option, "wrong answer");
        return Ok(lives::resolve_incorrect(session));
    }

    let prize = session.current_prize();
    session.record_correct(prize);
    debug!(
        index = session.current_index(),
        streak = session.streak(),
        prize,
        "correct answer"
    );

    if session.is_last_question() {
        finish(session);
    } else {
        session.mark_resolved();
    }

    Ok(Outcome {
        correct: Some(true),
        correct_answer: Some(correct_answer),
        ..session.outcome()
    })
}

/// The question timer ran out. Treated as a wrong answer with no option.
///
/// Ignored (rejected with `AlreadyResolved`) when an answer beat the timer.
pub fn time_expire(session: &mut Session) -> GameResult<Outcome> {
    session.ensure_awaiting_answer()?;
    debug!(index = session.current_index(), "time expired");
    Ok(lives::resolve_incorrect(session))
}

/// Move from a resolved question to the next one.
pub fn advance(session: &mut Session) -> GameResult<Outcome> {
    session.ensure_in_progress()?;
    if session.phase() != QuestionPhase::Resolved {
        return Err(Rejection::NotResolved.into());
    }

    if session.is_last_question() {
        finish(session);
    } else {
        session.move_to_next_question();
        debug!(index = session.current_index(), "advanced to next question");
    }
    Ok(session.outcome())
}

/// End the session as completed, paying out the final streak.
pub(crate) fn finish(session: &mut Session) {
    let payout = completion_payout(session.stake(), session.streak(), session.running_balance());
    let ending = session.end(EndReason::Completed, session.streak(), payout);
    info!(
        streak = session.streak(),
        payout = ending.payout,
        "session completed"
    );
}
