//! Results emitted by the engine
//!
//! Every accepted event produces an [`Outcome`]; the end of a session
//! produces a single [`Settlement`] for the balance sink.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndReason {
    /// Every question was resolved without a failure or cashout.
    Completed,
    /// A wrong answer or timeout outside the grace window, or with the last life.
    Failed,
    CashedOut,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EndReason::Completed => "completed",
            EndReason::Failed => "failed",
            EndReason::CashedOut => "cashed out",
        };
        f.write_str(label)
    }
}

/// Terminal state of a session. Immutable once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    pub reason: EndReason,
    pub payout: u64,
}

/// What changed as a result of one event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// `Some` for answer and timeout events, `None` for everything else.
    pub correct: Option<bool>,
    pub streak: u32,
    pub running_balance: u64,
    /// Display prize for the active question after the event.
    pub current_prize: u64,
    pub life_lost: bool,
    pub lives_remaining: u32,
    /// Revealed when a question is resolved.
    pub correct_answer: Option<String>,
    pub ending: Option<Ending>,
}

impl Outcome {
    pub fn ended(&self) -> bool {
        self.ending.is_some()
    }

    pub fn payout(&self) -> Option<u64> {
        self.ending.map(|e| e.payout)
    }
}

/// The record handed to the settlement sink exactly once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub session_id: Uuid,
    pub fifty_fifty_used: bool,
    pub skip_used: bool,
    pub questions_answered: usize,
    pub final_streak: u32,
    pub reason: EndReason,
    pub payout: u64,
}
