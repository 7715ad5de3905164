#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod leaderboard_service;
pub mod practice_service;
pub mod profile_service;
pub mod progress_service;
pub mod quiz;

pub use quantduo_core::Clock;

pub use error::{AppError, CatalogError, PracticeError, ProgressError, QuizError};

pub use app_services::{AppServices, DashboardView, LESSON_XP};
pub use leaderboard_service::{LeaderboardService, RankedEntry};
pub use practice_service::PracticeService;
pub use profile_service::ProfileService;
pub use progress_service::ProgressService;
pub use quiz::{QuizAnswer, QuizScore, QuizSession};
