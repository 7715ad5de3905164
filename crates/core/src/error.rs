use thiserror::Error;

use crate::model::{
    ChallengeError, ContentError, LeaderboardError, LessonError, ModuleError, ProfileError,
    StrategyError,
};

#[derive(Debug, Error)]
pub enum Error {
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
