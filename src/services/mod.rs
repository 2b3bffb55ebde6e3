//! Game services
//!
//! This module contains the rules that operate on a session: payout
//! tiers, answer resolution, the lives policy, lifelines and cashout,
//! plus question supply, settlement and the console play loop.

pub mod answer;
pub mod cashout;
pub mod game;
pub mod lifelines;
pub mod lives;
pub mod payout;
pub mod question_bank;
pub mod settlement;
pub mod timer;
