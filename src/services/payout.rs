//! Prize and payout calculation
//!
//! Pure functions of the stake and the streak length. All amounts are in
//! the smallest display unit and rounded half up.

use crate::models::constants::{
    CASHOUT_STREAK, FIRST_TIER_PERCENT, FULL_STAKE_PERCENT, LONG_STREAK,
    PER_QUESTION_BONUS_PERCENT, PRIZE_STEP_PERCENT, SECOND_TIER_PERCENT,
};

/// `round(amount * percent / 100)` with halves rounded up.
pub fn percent_of(amount: u64, percent: u64) -> u64 {
    let scaled = u128::from(amount) * u128::from(percent) + 50;
    u64::try_from(scaled / 100).unwrap_or(u64::MAX)
}

/// Prize shown for the current question given the streak so far.
///
/// A streak of zero shows the base prize, the same as a streak of one.
pub fn display_prize(stake: u64, streak: u32) -> u64 {
    let step = u64::from(streak.max(1));
    percent_of(stake, PRIZE_STEP_PERCENT.saturating_mul(step))
}

/// Amount a voluntary cashout pays at the given streak.
///
/// Streaks between the cashout threshold and the long-streak tier pay the
/// running balance credited during play rather than a closed formula.
pub fn cashout_amount(stake: u64, streak: u32, running_balance: u64) -> u64 {
    match streak {
        s if s < CASHOUT_STREAK => 0,
        s if s == CASHOUT_STREAK => percent_of(stake, FIRST_TIER_PERCENT),
        s if s < LONG_STREAK => running_balance,
        s => {
            let extra = u64::from(s - (LONG_STREAK - 1));
            percent_of(stake, FIRST_TIER_PERCENT)
                .saturating_add(percent_of(stake, SECOND_TIER_PERCENT))
                .saturating_add(percent_of(
                    stake,
                    PER_QUESTION_BONUS_PERCENT.saturating_mul(extra),
                ))
        }
    }
}

/// Amount paid when the session ends by a wrong answer or timeout.
///
/// Long streaks are capped at the stake itself: the bonus beyond it is
/// forfeited when the player fails instead of cashing out.
pub fn failure_payout(stake: u64, streak: u32) -> u64 {
    match streak {
        s if s < CASHOUT_STREAK => 0,
        s if s < LONG_STREAK => percent_of(stake, FIRST_TIER_PERCENT),
        _ => percent_of(stake, FULL_STAKE_PERCENT),
    }
}

/// Payout when every question has been resolved: an automatic cashout.
pub fn completion_payout(stake: u64, streak: u32, running_balance: u64) -> u64 {
    cashout_amount(stake, streak, running_balance)
}

/// The winnings ladder: rung `i` is `round(stake * 0.2 * (i + 1))`.
pub fn prize_ladder(stake: u64, rungs: usize) -> Vec<u64> {
    (1..=rungs as u64)
        .map(|step| percent_of(stake, PRIZE_STEP_PERCENT.saturating_mul(step)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1000, 20), 200);
        assert_eq!(percent_of(5, 50), 3);
        assert_eq!(percent_of(7, 30), 2);
        assert_eq!(percent_of(1, 50), 1);
        assert_eq!(percent_of(1, 49), 0);
    }

    #[test]
    fn percent_of_huge_stake_saturates() {
        assert_eq!(percent_of(u64::MAX, 1000), u64::MAX);
    }

    #[test]
    fn display_prize_tiers() {
        assert_eq!(display_prize(1000, 0), 200);
        assert_eq!(display_prize(1000, 1), 200);
        assert_eq!(display_prize(1000, 4), 800);
        assert_eq!(display_prize(1000, 12), 2400);
        assert_eq!(display_prize(333, 1), 67);
    }

    #[test]
    fn cashout_below_threshold_is_zero() {
        for streak in 0..5 {
            assert_eq!(cashout_amount(1000, streak, 5000), 0);
        }
    }

    #[test]
    fn cashout_at_five_is_half_stake() {
        assert_eq!(cashout_amount(1000, 5, 3000), 500);
    }

    #[test]
    fn cashout_mid_band_uses_running_balance() {
        assert_eq!(cashout_amount(1000, 6, 3200), 3200);
        assert_eq!(cashout_amount(1000, 9, 7777), 7777);
    }

    #[test]
    fn cashout_long_streak_formula() {
        // 500 + 800 + 300
        assert_eq!(cashout_amount(1000, 10, 0), 1600);
        // 500 + 800 + 900
        assert_eq!(cashout_amount(1000, 12, 0), 2200);
    }

    #[test]
    fn failure_payout_tiers() {
        assert_eq!(failure_payout(1000, 4), 0);
        assert_eq!(failure_payout(1000, 5), 500);
        assert_eq!(failure_payout(1000, 9), 500);
        assert_eq!(failure_payout(1000, 10), 1000);
        assert_eq!(failure_payout(1000, 25), 1000);
    }

    #[test]
    fn ladder_has_requested_rungs() {
        let ladder = prize_ladder(1000, 15);
        assert_eq!(ladder.len(), 15);
        assert_eq!(ladder[0], 200);
        assert_eq!(ladder[14], 3000);
    }
}
