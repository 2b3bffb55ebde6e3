//! Settlement sinks
//!
//! Where the final payout of a session goes to be credited.

use std::io::Write;

use tracing::info;

use crate::models::errors::{GameResult, Rejection};
use crate::models::outcome::Settlement;
use crate::models::session::Session;

/// Receives one settlement record per finished session.
pub trait SettlementSink {
    fn settle(&mut self, settlement: &Settlement) -> GameResult<()>;
}

/// Build the settlement record for an ended session.
///
/// # Errors
///
/// `Rejection::SessionInProgress` while the session has not ended.
pub fn settlement_for(session: &Session) -> GameResult<Settlement> {
    let ending = session.ending().ok_or(Rejection::SessionInProgress)?;
    Ok(Settlement {
        session_id: session.id(),
        fifty_fifty_used: session.fifty_fifty_used(),
        skip_used: session.skip_used(),
        questions_answered: session.questions_answered(),
        final_streak: session.final_streak().unwrap_or_default(),
        reason: ending.reason,
        payout: ending.payout,
    })
}

/// Keeps settlements in memory and tracks the credited total.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    pub settlements: Vec<Settlement>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_credited(&self) -> u64 {
        self.settlements
            .iter()
            .fold(0u64, |total, s| total.saturating_add(s.payout))
    }
}

impl SettlementSink for MemoryLedger {
    fn settle(&mut self, settlement: &Settlement) -> GameResult<()> {
        self.settlements.push(settlement.clone());
        Ok(())
    }
}

/// Appends each settlement as one JSON line.
pub struct JsonLinesLedger<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesLedger<W> {
    pub fn new(writer: W) -> Self {
        JsonLinesLedger { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SettlementSink for JsonLinesLedger<W> {
    fn settle(&mut self, settlement: &Settlement) -> GameResult<()> {
        serde_json::to_writer(&mut self.writer, settlement)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        info!(session = %settlement.session_id, payout = settlement.payout, "settlement written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::EngineConfig;
    use crate::models::outcome::EndReason;
    use crate::models::question::Question;
    use crate::services::answer::submit_answer;

    fn finished_session() -> Session {
        let questions = vec![Question::new("q0", "?", &["A", "B"], "A")];
        let mut s = Session::new(questions, 1000, 2, EngineConfig::default()).unwrap();
        submit_answer(&mut s, "A").unwrap();
        s
    }

    #[test]
    fn unfinished_session_cannot_settle() {
        let questions = vec![Question::new("q0", "?", &["A", "B"], "A")];
        let s = Session::new(questions, 1000, 2, EngineConfig::default()).unwrap();
        let err = settlement_for(&s).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::SessionInProgress));
    }

    #[test]
    fn settlement_carries_session_facts() {
        let s = finished_session();
        let record = settlement_for(&s).unwrap();
        assert_eq!(record.session_id, s.id());
        assert_eq!(record.questions_answered, 1);
        assert_eq!(record.reason, EndReason::Completed);
        assert!(!record.fifty_fifty_used);
    }

    #[test]
    fn json_lines_ledger_writes_one_line() {
        let record = settlement_for(&finished_session()).unwrap();
        let mut ledger = JsonLinesLedger::new(Vec::new());
        ledger.settle(&record).unwrap();
        let text = String::from_utf8(ledger.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
        let parsed: Settlement = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed, record);
        assert!(text.contains("\"questionsAnswered\":1"));
    }

    #[test]
    fn memory_ledger_totals_payouts() {
        let mut record = settlement_for(&finished_session()).unwrap();
        let mut ledger = MemoryLedger::new();
        record.payout = 500;
        ledger.settle(&record).unwrap();
        record.payout = 1000;
        ledger.settle(&record).unwrap();
        assert_eq!(ledger.total_credited(), 1500);
    }
}
