//! One-shot lifelines: 50/50 and skip.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::config::SkipPolicy;
use crate::models::errors::{GameResult, Rejection};
use crate::models::outcome::Outcome;
use crate::models::session::Session;
use crate::services::answer;

/// Picks which incorrect option survives a 50/50.
pub trait OptionChooser {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform choice from a seeded `StdRng`.
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn from_seed(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomChooser {
            rng: StdRng::from_entropy(),
        }
    }
}

impl OptionChooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same position (clamped to the candidate count).
pub struct FixedChooser(pub usize);

impl OptionChooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Remove all but one incorrect option from the active question.
///
/// The surviving options keep their original order.
pub fn apply_fifty_fifty(
    session: &mut Session,
    chooser: &mut dyn OptionChooser,
) -> GameResult<Outcome> {
    session.ensure_awaiting_answer()?;
    if session.fifty_fifty_used() {
        return Err(Rejection::FiftyFiftyUsed.into());
    }
    let question = session.current_question().ok_or(Rejection::SessionEnded)?;

    let incorrect: Vec<&str> = question.incorrect_options().collect();
    // Questions are validated to have at least two options, so one is incorrect.
    let keep = incorrect[chooser.choose(incorrect.len()).min(incorrect.len() - 1)];
    let visible: Vec<String> = question
        .options
        .iter()
        .filter(|o| question.is_correct(o) || o.as_str() == keep)
        .cloned()
        .collect();

    debug!(index = session.current_index(), kept = keep, "50/50 applied");
    session.set_visible_options(visible);
    session.use_fifty_fifty();
    Ok(session.outcome())
}

/// Move past the active question without answering it.
///
/// Lives are untouched. The streak, and the running balance with it,
/// follow the configured [`SkipPolicy`].
pub fn apply_skip(session: &mut Session) -> GameResult<Outcome> {
    session.ensure_awaiting_answer()?;
    if session.skip_used() {
        return Err(Rejection::SkipUsed.into());
    }

    session.use_skip();
    if session.config().skip_policy == SkipPolicy::ResetStreak {
        session.reset_streak();
    }
    debug!(
        index = session.current_index(),
        streak = session.streak(),
        "question skipped"
    );

    if session.is_last_question() {
        answer::finish(session);
    } else {
        session.move_to_next_question();
    }
    Ok(session.outcome())
}
