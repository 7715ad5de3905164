use quantduo_core::Clock;
use quantduo_core::model::{
    Badge, CategoryFilter, ChallengeId, LessonCompletion, LessonContent, LessonId, MarketInsight,
    Module, TimeFilter,
};

use crate::catalog;
use crate::error::{AppError, QuizError};
use crate::leaderboard_service::{LeaderboardService, RankedEntry};
use crate::practice_service::PracticeService;
use crate::profile_service::ProfileService;
use crate::progress_service::ProgressService;
use crate::quiz::QuizSession;

/// XP awarded for finishing a lesson for the first time.
pub const LESSON_XP: u32 = 50;

//
// ─── DASHBOARD VIEW ────────────────────────────────────────────────────────────
//

/// The home screen's "next lesson" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextLessonView {
    pub lesson_id: LessonId,
    pub title: String,
    pub module_title: String,
    pub duration: String,
}

/// Aggregate view backing the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub streak_days: u32,
    pub next_lesson: Option<NextLessonView>,
    pub insights: &'a [MarketInsight],
    pub top_traders: Vec<RankedEntry<'a>>,
}

//
// ─── APP SERVICES ──────────────────────────────────────────────────────────────
//

/// Assembles the stores behind the app's screens and drives the workflows
/// that span more than one of them (finishing a lesson touches progress,
/// profile XP, streak and badges).
///
/// Constructed once at startup from the seed catalog and handed to every
/// consumer; state lives nowhere else.
#[derive(Debug, Clone)]
pub struct AppServices {
    clock: Clock,
    progress: ProgressService,
    practice: PracticeService,
    leaderboard: LeaderboardService,
    profile: ProfileService,
    contents: Vec<LessonContent>,
    insights: Vec<MarketInsight>,
}

// Equality compares state only; the clock is not part of it.
impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.progress == other.progress
            && self.practice == other.practice
            && self.leaderboard == other.leaderboard
            && self.profile == other.profile
            && self.contents == other.contents
            && self.insights == other.insights
    }
}

impl AppServices {
    /// Builds every store from the seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the shipped seed data fails model
    /// validation.
    pub fn seeded(clock: Clock) -> Result<Self, AppError> {
        Ok(Self {
            clock,
            progress: ProgressService::new(catalog::modules()?),
            practice: PracticeService::new(catalog::strategies()?, catalog::challenges()?),
            leaderboard: LeaderboardService::new(catalog::leaderboard()?),
            profile: ProfileService::new(catalog::profile()?),
            contents: catalog::lesson_contents()?,
            insights: catalog::market_insights(),
        })
    }

    // Accessors
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn practice(&self) -> &PracticeService {
        &self.practice
    }

    #[must_use]
    pub fn leaderboard(&self) -> &LeaderboardService {
        &self.leaderboard
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    #[must_use]
    pub fn market_insights(&self) -> &[MarketInsight] {
        &self.insights
    }

    /// Authored body for a lesson, if any.
    #[must_use]
    pub fn lesson_content(&self, id: &LessonId) -> Option<&LessonContent> {
        self.contents.iter().find(|c| c.lesson_id() == id)
    }

    /// Starts a quiz session for a lesson.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContentNotFound` when the lesson has no authored
    /// body, or `QuizError::Empty` when the body carries no questions.
    pub fn start_quiz(&self, id: &LessonId) -> Result<QuizSession, AppError> {
        let content = self
            .lesson_content(id)
            .ok_or_else(|| AppError::ContentNotFound(id.clone()))?;
        Ok(QuizSession::new(content, self.clock.now())?)
    }

    /// Finishes a lesson: marks it completed in the progress store, awards
    /// lesson XP and counters on first completion, records today's activity
    /// for the streak, and awards the module badge when the completion
    /// finishes its module.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::LessonNotFound` for an unknown lesson id; no
    /// state changes in that case.
    pub fn finish_lesson(&mut self, id: &LessonId) -> Result<LessonCompletion, AppError> {
        let outcome = self.progress.mark_lesson_completed(id)?;

        if outcome.newly_completed {
            self.profile.add_xp(LESSON_XP);
            self.profile.record_lesson_completed();
        }
        self.profile.record_activity(self.clock.today());

        if outcome.module_completed
            && let Some(module) = self.progress.module(&outcome.module_id)
        {
            self.profile.award_badge(module_badge(module));
        }

        Ok(outcome)
    }

    /// Finishes the lesson behind a completed quiz session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InProgress` if the session has unanswered
    /// questions; otherwise behaves like [`AppServices::finish_lesson`].
    pub fn finish_quiz(&mut self, session: &QuizSession) -> Result<LessonCompletion, AppError> {
        if !session.is_complete() {
            return Err(AppError::Quiz(QuizError::InProgress));
        }
        self.finish_lesson(&session.lesson_id().clone())
    }

    /// Completes a challenge: flips it in the practice store, then awards its
    /// XP reward, bumps the challenge counter and records streak activity.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError` for an unknown or already-completed
    /// challenge; no XP is awarded in either case.
    pub fn complete_challenge(&mut self, id: &ChallengeId) -> Result<u32, AppError> {
        let reward = self.practice.complete_challenge(id)?;

        self.profile.add_xp(reward);
        self.profile.record_challenge_completed();
        self.profile.record_activity(self.clock.today());

        Ok(reward)
    }

    /// Checks off one requirement of a challenge.
    ///
    /// # Errors
    ///
    /// Propagates `PracticeError` lookup and range failures.
    pub fn check_challenge_requirement(
        &mut self,
        id: &ChallengeId,
        index: usize,
    ) -> Result<(), AppError> {
        self.practice.check_requirement(id, index)?;
        Ok(())
    }

    /// The home screen aggregate: streak, next lesson, market insights and
    /// the weekly top five.
    #[must_use]
    pub fn dashboard(&self) -> DashboardView<'_> {
        let next_lesson = self.progress.next_lesson().map(|(module, lesson)| NextLessonView {
            lesson_id: lesson.id().clone(),
            title: lesson.title().to_owned(),
            module_title: module.title().to_owned(),
            duration: lesson.duration().to_owned(),
        });

        DashboardView {
            streak_days: self.profile.profile().streak_days(),
            next_lesson,
            insights: &self.insights,
            top_traders: self.leaderboard.top(5, TimeFilter::Weekly, CategoryFilter::All),
        }
    }
}

fn module_badge(module: &Module) -> Badge {
    Badge::new(
        format!("module-{}", module.id()),
        module.title(),
        "checkmark.seal.fill",
        module.color(),
        format!("Completed the {} module", module.title()),
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
