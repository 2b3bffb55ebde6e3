//! Game state machine
//!
//! Owns one play-session and drives it one event at a time. The engine
//! keeps the question timer in step with the session and makes sure the
//! final payout reaches the settlement sink exactly once.

use tracing::{debug, info, instrument, warn};

use crate::models::errors::{GameResult, Rejection};
use crate::models::outcome::{Outcome, Settlement};
use crate::models::session::{QuestionPhase, Session};
use crate::services::lifelines::{OptionChooser, RandomChooser};
use crate::services::settlement::{settlement_for, SettlementSink};
use crate::services::timer::{QuestionTimer, TimerTick};
use crate::services::{answer, cashout, lifelines};

/// Everything a caller can feed into a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Answer(String),
    /// The external clock decided the active question has run out of time.
    TimeExpired,
    /// One second elapsed; expires the question when the allotment is used up.
    Tick,
    FiftyFifty,
    Skip,
    Cashout,
    /// Continue after a resolved question has been shown.
    Advance,
}

/// Core game engine that manages one session and its settlement
pub struct GameEngine {
    session: Session,
    timer: QuestionTimer,
    chooser: Box<dyn OptionChooser>,
    settled: bool,
}

impl GameEngine {
    /// Creates an engine around a freshly built session
    ///
    /// # Arguments
    ///
    /// * `session` - The session to drive
    /// * `chooser` - Picks the incorrect option a 50/50 keeps
    pub fn new(session: Session, chooser: Box<dyn OptionChooser>) -> Self {
        let timer = QuestionTimer::new(session.config().seconds_per_question);
        Self {
            session,
            timer,
            chooser,
            settled: false,
        }
    }

    /// Creates an engine whose 50/50 choices are reproducible from `seed`
    pub fn with_seed(session: Session, seed: u64) -> Self {
        Self::new(session, Box::new(RandomChooser::from_seed(seed)))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn timer(&self) -> &QuestionTimer {
        &self.timer
    }

    /// Applies one event to the session
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` describing what changed
    /// * `Err(GameError::InvalidEvent)` when the event's preconditions do
    ///   not hold; the session is left exactly as it was
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn handle(&mut self, event: Event) -> GameResult<Outcome> {
        let index_before = self.session.current_index();

        let result = match event {
            Event::Answer(option) => answer::submit_answer(&mut self.session, &option),
            Event::TimeExpired => answer::time_expire(&mut self.session),
            Event::Tick => self.tick(),
            Event::FiftyFifty => {
                lifelines::apply_fifty_fifty(&mut self.session, self.chooser.as_mut())
            }
            Event::Skip => lifelines::apply_skip(&mut self.session),
            Event::Cashout => cashout::request_cashout(&mut self.session),
            Event::Advance => answer::advance(&mut self.session),
        };

        match &result {
            Ok(_) => self.sync_timer(index_before),
            Err(err) => warn!(%err, "event rejected"),
        }
        result
    }

    fn tick(&mut self) -> GameResult<Outcome> {
        self.session.ensure_in_progress()?;
        match self.timer.tick() {
            TimerTick::Expired => {
                debug!("question timer ran out");
                answer::time_expire(&mut self.session)
            }
            TimerTick::Running { .. } | TimerTick::Idle => Ok(self.session.outcome()),
        }
    }

    fn sync_timer(&mut self, index_before: usize) {
        if self.session.is_ended() || self.session.phase() == QuestionPhase::Resolved {
            self.timer.pause();
        } else if self.session.current_index() != index_before {
            self.timer.reset();
        }
    }

    /// Delivers the final outcome to `sink`
    ///
    /// # Returns
    ///
    /// * `Ok(Settlement)` the record that was delivered
    /// * `Err(Rejection::SessionInProgress)` before the session has ended
    /// * `Err(Rejection::AlreadySettled)` on every call after the first
    ///   successful one
    pub fn settle(&mut self, sink: &mut dyn SettlementSink) -> GameResult<Settlement> {
        if self.settled {
            return Err(Rejection::AlreadySettled.into());
        }
        let record = settlement_for(&self.session)?;
        sink.settle(&record)?;
        self.settled = true;
        info!(
            session = %record.session_id,
            reason = %record.reason,
            payout = record.payout,
            "session settled"
        );
        Ok(record)
    }
}
