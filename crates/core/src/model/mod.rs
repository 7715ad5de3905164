mod challenge;
mod content;
mod ids;
mod insight;
mod leaderboard;
mod lesson;
mod module;
mod profile;
mod strategy;

pub use ids::{ChallengeId, LessonId, ModuleId, ParseIdError, StrategyId, UserId};

pub use challenge::{Challenge, ChallengeError, Difficulty, Requirement};
pub use content::{ContentError, InteractiveKind, LessonContent, LessonSection, QuizQuestion};
pub use insight::MarketInsight;
pub use leaderboard::{
    ActivitySummary, CategoryFilter, LeaderboardEntry, LeaderboardError, PointTotals, TimeFilter,
};
pub use lesson::{Lesson, LessonError, LessonState};
pub use module::{LessonCompletion, Module, ModuleError};
pub use profile::{Badge, ProfileError, ProfileStat, UserProfile, XpGain};
pub use strategy::{Strategy, StrategyError, StrategyPerformance};
