//! Shared error types for the services crate.

use thiserror::Error;

use quantduo_core::model::{
    ChallengeError, ChallengeId, ContentError, LeaderboardError, LessonError, LessonId,
    ModuleError, ProfileError, StrategyError, StrategyId,
};

/// Errors emitted by `ProgressService`.
///
/// The original client silently swallowed a mark-completed call for an
/// unknown lesson id; here the miss is reported and state is left untouched,
/// so callers that want the old behavior can simply ignore the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("no lesson with id {0}")]
    LessonNotFound(LessonId),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("lesson has no quiz questions")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error("quiz still in progress")]
    InProgress,
    #[error("choice {choice} out of range for {options} options")]
    ChoiceOutOfRange { choice: usize, options: usize },
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("no strategy with id {0}")]
    StrategyNotFound(StrategyId),
    #[error("no challenge with id {0}")]
    ChallengeNotFound(ChallengeId),
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

/// Errors emitted while building the seed catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}

/// Errors emitted while bootstrapping or driving app services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    #[error("no authored content for lesson {0}")]
    ContentNotFound(LessonId),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Practice(#[from] PracticeError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
