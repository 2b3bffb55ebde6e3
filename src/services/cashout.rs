use tracing::info;

use crate::models::constants::CASHOUT_STREAK;
use crate::models::errors::{GameResult, Rejection};
use crate::models::outcome::{EndReason, Outcome};
use crate::models::session::Session;
use crate::services::payout::cashout_amount;

/// What a cashout would pay right now, or `None` when it is not allowed.
pub fn cashout_quote(session: &Session) -> Option<u64> {
    if session.is_ended() || session.streak() < CASHOUT_STREAK {
        return None;
    }
    Some(cashout_amount(
        session.stake(),
        session.streak(),
        session.running_balance(),
    ))
}

/// Voluntarily end the session and lock in the cashout amount.
///
/// Allowed on either side of a question's resolution.
///
/// # Errors
///
/// * `Rejection::SessionEnded` if the session is already over
/// * `Rejection::CashoutIneligible` below the required streak
pub fn request_cashout(session: &mut Session) -> GameResult<Outcome> {
    session.ensure_in_progress()?;
    let amount = cashout_quote(session).ok_or(Rejection::CashoutIneligible {
        streak: session.streak(),
        required: CASHOUT_STREAK,
    })?;

    let ending = session.end(EndReason::CashedOut, session.streak(), amount);
    info!(
        streak = session.streak(),
        payout = ending.payout,
        "session cashed out"
    );
    Ok(session.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::EngineConfig;
    use crate::models::question::Question;

    fn session() -> Session {
        let questions = (0..15)
            .map(|i| Question::new(format!("q{}", i), "?", &["A", "B"], "A"))
            .collect();
        Session::new(questions, 1000, 2, EngineConfig::default()).unwrap()
    }

    #[test]
    fn quote_is_none_below_threshold() {
        let mut s = session();
        s.set_streak(4, 2000);
        assert_eq!(cashout_quote(&s), None);
    }

    #[test]
    fn cashout_at_five_pays_half_stake() {
        let mut s = session();
        s.set_streak(5, 3000);
        let outcome = request_cashout(&mut s).unwrap();
        assert_eq!(outcome.payout(), Some(500));
        assert_eq!(s.final_payout(), Some(500));
    }

    #[test]
    fn ineligible_cashout_leaves_state_alone() {
        let mut s = session();
        s.set_streak(4, 2000);
        let err = request_cashout(&mut s).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::CashoutIneligible {
                streak: 4,
                required: 5
            })
        );
        assert!(!s.is_ended());
        assert_eq!(s.streak(), 4);
    }

    #[test]
    fn cashout_after_end_rejected() {
        let mut s = session();
        s.set_streak(6, 3200);
        request_cashout(&mut s).unwrap();
        let err = request_cashout(&mut s).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::SessionEnded));
        assert_eq!(s.final_payout(), Some(3200));
    }
}
