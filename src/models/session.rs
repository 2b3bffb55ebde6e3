//! Session model
//!
//! The aggregate root for one play-session: the fixed question set and
//! stake, the active question pointer, streak, lives, lifeline flags and
//! terminal status. All mutation goes through the services; this type only
//! guards its own invariants.

use tracing::debug;
use uuid::Uuid;

use super::config::EngineConfig;
use super::errors::{ConfigError, GameResult, Rejection};
use super::outcome::{EndReason, Ending, Outcome};
use super::question::{validate_questions, Question};
use crate::services::payout;

/// Where the active question is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    AwaitingAnswer,
    /// Answered (or lost a life) and waiting for the caller to advance.
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Ended(Ending),
}

pub struct Session {
    id: Uuid,
    questions: Vec<Question>,
    stake: u64,
    config: EngineConfig,
    current_index: usize,
    phase: QuestionPhase,
    streak: u32,
    /// Prizes credited for correct answers over the whole session.
    running_balance: u64,
    lives_remaining: u32,
    fifty_fifty_used: bool,
    skip_used: bool,
    visible_options: Vec<String>,
    questions_answered: usize,
    /// Streak reached when the session ended, before any reset.
    final_streak: u32,
    status: SessionStatus,
}

impl Session {
    /// Create a session, validating the question set, stake and lives up front.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` for an empty or malformed question set,
    /// a zero stake, zero lives or an invalid engine configuration.
    pub fn new(
        questions: Vec<Question>,
        stake: u64,
        lives: u32,
        config: EngineConfig,
    ) -> GameResult<Self> {
        validate_questions(&questions)?;
        config.validate()?;
        if stake == 0 {
            return Err(ConfigError::NonPositiveStake.into());
        }
        if lives == 0 {
            return Err(ConfigError::NoStartingLives.into());
        }

        let visible_options = questions[0].options.clone();
        let session = Session {
            id: Uuid::new_v4(),
            questions,
            stake,
            config,
            current_index: 0,
            phase: QuestionPhase::AwaitingAnswer,
            streak: 0,
            running_balance: 0,
            lives_remaining: lives,
            fifty_fifty_used: false,
            skip_used: false,
            visible_options,
            questions_answered: 0,
            final_streak: 0,
            status: SessionStatus::InProgress,
        };
        debug!(
            session = %session.id,
            questions = session.questions.len(),
            stake,
            lives,
            "session created"
        );
        Ok(session)
    }

    /// Create a session whose starting lives come from the configuration.
    pub fn with_config(questions: Vec<Question>, stake: u64, config: EngineConfig) -> GameResult<Self> {
        let lives = config.starting_lives;
        Self::new(questions, stake, lives, config)
    }

    // ========== Accessor Methods ==========

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active question, or `None` once the session has ended.
    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            SessionStatus::InProgress => self.questions.get(self.current_index),
            SessionStatus::Ended(_) => None,
        }
    }

    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn running_balance(&self) -> u64 {
        self.running_balance
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    pub fn fifty_fifty_used(&self) -> bool {
        self.fifty_fifty_used
    }

    pub fn skip_used(&self) -> bool {
        self.skip_used
    }

    pub fn visible_options(&self) -> &[String] {
        &self.visible_options
    }

    pub fn questions_answered(&self) -> usize {
        self.questions_answered
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.status, SessionStatus::Ended(_))
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.status {
            SessionStatus::Ended(ending) => Some(ending),
            SessionStatus::InProgress => None,
        }
    }

    pub fn final_payout(&self) -> Option<u64> {
        self.ending().map(|e| e.payout)
    }

    /// Streak the player had reached when the session ended.
    pub fn final_streak(&self) -> Option<u32> {
        self.ending().map(|_| self.final_streak)
    }

    /// Display prize for the active question.
    pub fn current_prize(&self) -> u64 {
        payout::display_prize(self.stake, self.streak)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Snapshot of the session as an event result with nothing flagged.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            correct: None,
            streak: self.streak,
            running_balance: self.running_balance,
            current_prize: self.current_prize(),
            life_lost: false,
            lives_remaining: self.lives_remaining,
            correct_answer: None,
            ending: self.ending(),
        }
    }

    // ========== Guards ==========

    pub(crate) fn ensure_in_progress(&self) -> Result<(), Rejection> {
        if self.is_ended() {
            return Err(Rejection::SessionEnded);
        }
        Ok(())
    }

    /// In progress and the active question has not been resolved.
    pub(crate) fn ensure_awaiting_answer(&self) -> Result<(), Rejection> {
        self.ensure_in_progress()?;
        if self.phase == QuestionPhase::Resolved {
            return Err(Rejection::AlreadyResolved);
        }
        Ok(())
    }

    // ========== Mutators (services only) ==========

    pub(crate) fn record_correct(&mut self, prize: u64) {
        self.streak += 1;
        self.running_balance = self.running_balance.saturating_add(prize);
    }

    pub(crate) fn count_answer(&mut self) {
        self.questions_answered += 1;
    }

    /// Break the streak. Returns the streak length it had reached.
    /// Prizes already credited stay in the running balance.
    pub(crate) fn reset_streak(&mut self) -> u32 {
        let previous = self.streak;
        self.streak = 0;
        previous
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives_remaining = self.lives_remaining.saturating_sub(1);
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.phase = QuestionPhase::Resolved;
    }

    pub(crate) fn set_visible_options(&mut self, options: Vec<String>) {
        self.visible_options = options;
    }

    pub(crate) fn use_fifty_fifty(&mut self) {
        self.fifty_fifty_used = true;
    }

    pub(crate) fn use_skip(&mut self) {
        self.skip_used = true;
    }

    /// Step to the next question and clear per-question state.
    /// Callers check `is_last_question` first.
    pub(crate) fn move_to_next_question(&mut self) {
        debug_assert!(!self.is_last_question());
        self.current_index += 1;
        self.phase = QuestionPhase::AwaitingAnswer;
        self.visible_options = self.questions[self.current_index].options.clone();
    }

    pub(crate) fn end(&mut self, reason: EndReason, streak: u32, payout: u64) -> Ending {
        let ending = Ending { reason, payout };
        self.final_streak = streak;
        self.status = SessionStatus::Ended(ending);
        ending
    }

    #[cfg(test)]
    pub(crate) fn set_streak(&mut self, streak: u32, running_balance: u64) {
        self.streak = streak;
        self.running_balance = running_balance;
    }
}
