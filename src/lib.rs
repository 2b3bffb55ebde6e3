//! Trivia Streak Rules Engine
//!
//! The rules engine behind a stake-based trivia "streak" game.
//!
//! # Overview
//!
//! A player stakes an amount and answers an ordered set of questions.
//! Unbroken runs of correct answers raise the prize for each question and
//! unlock a cashout; a wrong answer or timeout either costs one of a few
//! lives early on or ends the session with a failure payout. Two one-shot
//! lifelines (50/50 and skip) are available per session.
//!
//! # Modules
//!
//! - [`game_engine`] - Event dispatch, question timer and settlement
//! - [`models`] - Domain models (Session, Question, configuration, results)
//! - [`services`] - Rules (payouts, answers, lives, lifelines, cashout)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust
//! use trivia_streak::models::config::EngineConfig;
//! use trivia_streak::models::question::Question;
//! use trivia_streak::models::session::Session;
//! use trivia_streak::{Event, GameEngine};
//!
//! let questions = vec![Question::new("q1", "2 + 2?", &["3", "4"], "4")];
//! let session = Session::new(questions, 1000, 2, EngineConfig::default()).unwrap();
//! let mut engine = GameEngine::with_seed(session, 42);
//!
//! let outcome = engine.handle(Event::Answer("4".into())).unwrap();
//! assert_eq!(outcome.streak, 1);
//! assert!(outcome.ended());
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{Event, GameEngine};
pub use models::errors::{ConfigError, GameError, GameResult, Rejection};
pub use models::outcome::{EndReason, Ending, Outcome, Settlement};
