//! Wrong-answer policy
//!
//! A wrong answer or timeout always breaks the streak. Inside the grace
//! window, and only while a spare life exists, it costs a life and play
//! continues. Otherwise the session ends with the failure payout for the
//! streak that had been reached. Losing a life on the last question also
//! ends the session, completed, with that same failure payout.

use tracing::{debug, info};

use crate::models::outcome::{EndReason, Outcome};
use crate::models::session::Session;
use crate::services::payout::failure_payout;

/// Resolve the active question as incorrect. Callers have already checked
/// that the question is awaiting an answer.
pub(crate) fn resolve_incorrect(session: &mut Session) -> Outcome {
    let index = session.current_index();
    let correct_answer = session
        .current_question()
        .map(|q| q.correct_answer.clone());
    let reached = session.reset_streak();

    let mut outcome = if session.config().in_grace_window(index) && session.lives_remaining() > 1 {
        session.lose_life();
        debug!(
            index,
            lives = session.lives_remaining(),
            "life lost inside grace window"
        );
        if session.is_last_question() {
            let payout = failure_payout(session.stake(), reached);
            let ending = session.end(EndReason::Completed, reached, payout);
            info!(
                streak = reached,
                payout = ending.payout,
                "session completed after losing a life on the last question"
            );
        } else {
            session.mark_resolved();
        }
        Outcome {
            life_lost: true,
            ..session.outcome()
        }
    } else {
        let payout = failure_payout(session.stake(), reached);
        let ending = session.end(EndReason::Failed, reached, payout);
        info!(index, streak = reached, payout = ending.payout, "session failed");
        session.outcome()
    };

    outcome.correct = Some(false);
    outcome.correct_answer = correct_answer;
    outcome
}
