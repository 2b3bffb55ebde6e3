pub const DEFAULT_STARTING_LIVES: u32 = 2;
/// Questions with an index below this value cost a life instead of ending the session.
pub const DEFAULT_GRACE_THRESHOLD: usize = 4;
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;
pub const DEFAULT_LADDER_RUNGS: usize = 15;

/// Streak length at which cashing out becomes possible.
pub const CASHOUT_STREAK: u32 = 5;
/// Streak length from which the closed-form cashout formula applies.
pub const LONG_STREAK: u32 = 10;

// Percentages of the stake used by the payout tiers.
pub const PRIZE_STEP_PERCENT: u64 = 20;
pub const FIRST_TIER_PERCENT: u64 = 50;
pub const SECOND_TIER_PERCENT: u64 = 80;
pub const PER_QUESTION_BONUS_PERCENT: u64 = 30;
pub const FULL_STAKE_PERCENT: u64 = 100;

pub const MIN_OPTIONS: usize = 2;
/// One option per letter of the alphabet.
pub const MAX_OPTIONS: usize = 26;
