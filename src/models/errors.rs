use thiserror::Error;

/// Problems with the inputs a session is built from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a session needs at least one question")]
    EmptyQuestionSet,
    #[error("stake must be greater than zero")]
    NonPositiveStake,
    #[error("a session needs at least one starting life")]
    NoStartingLives,
    #[error("seconds per question must be greater than zero")]
    ZeroTimer,
    #[error("question {question_id} has fewer than two options")]
    TooFewOptions { question_id: String },
    #[error("question {question_id} has more than {max} options")]
    TooManyOptions { question_id: String, max: usize },
    #[error("question {question_id} lists option {option:?} more than once")]
    DuplicateOption { question_id: String, option: String },
    #[error("question {question_id} has a correct answer that is not one of its options")]
    CorrectAnswerMissing { question_id: String },
    #[error("question id {question_id} appears more than once")]
    DuplicateQuestionId { question_id: String },
}

/// Why an event was refused. Session state is untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Rejection {
    #[error("the session has already ended")]
    SessionEnded,
    #[error("the current question has already been resolved")]
    AlreadyResolved,
    #[error("the current question has not been resolved yet")]
    NotResolved,
    #[error("{0:?} is not one of the selectable options")]
    OptionNotVisible(String),
    #[error("the 50/50 lifeline has already been used")]
    FiftyFiftyUsed,
    #[error("the skip lifeline has already been used")]
    SkipUsed,
    #[error("cashout needs a streak of {required}, current streak is {streak}")]
    CashoutIneligible { streak: u32, required: u32 },
    #[error("the session is still in progress")]
    SessionInProgress,
    #[error("the session has already been settled")]
    AlreadySettled,
}

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] Rejection),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// The rejection carried by this error, if it is an invalid event.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GameError::InvalidEvent(rejection) => Some(rejection),
            _ => None,
        }
    }
}
