use thiserror::Error;

use crate::model::ids::{LessonId, ModuleId};
use crate::model::lesson::Lesson;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("module must contain at least one lesson")]
    NoLessons,

    #[error("duplicate lesson id {0} in module")]
    DuplicateLessonId(LessonId),
}

//
// ─── LESSON COMPLETION ─────────────────────────────────────────────────────────
//

/// Outcome of marking a lesson completed within a module.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonCompletion {
    pub module_id: ModuleId,
    pub lesson_id: LessonId,
    /// False when the lesson had already been completed (idempotent re-mark).
    pub newly_completed: bool,
    /// The immediate successor that this completion unlocked, if any.
    pub unlocked: Option<LessonId>,
    /// Module progress after the mutation.
    pub progress: f32,
    /// True when every lesson in the module is now completed.
    pub module_completed: bool,
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// A named group of sequential lessons with aggregate progress.
///
/// The lesson sequence defines unlock order: completing the lesson at
/// position `i` unlocks the lesson at position `i + 1`. `progress` is always
/// derived from the lessons and never supplied by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    id: ModuleId,
    title: String,
    description: String,
    lessons: Vec<Lesson>,
    progress: f32,
    icon: String,
    color: String,
}

impl Module {
    /// Creates a new Module, computing `progress` from the seeded lessons.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::EmptyTitle` if the title is blank,
    /// `ModuleError::NoLessons` if the lesson list is empty, or
    /// `ModuleError::DuplicateLessonId` if two lessons share an id.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, ModuleError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if lessons.is_empty() {
            return Err(ModuleError::NoLessons);
        }
        for (i, lesson) in lessons.iter().enumerate() {
            if lessons[..i].iter().any(|other| other.id() == lesson.id()) {
                return Err(ModuleError::DuplicateLessonId(lesson.id().clone()));
            }
        }

        let mut module = Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            lessons,
            progress: 0.0,
            icon: icon.into(),
            color: color.into(),
        };
        module.recompute_progress();
        Ok(module)
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Icon identifier used by the client (e.g. `function`).
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Color identifier used by the client (e.g. `#4C9AFF`).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Lessons in unlock order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Fraction of lessons completed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_completed()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lessons.iter().all(Lesson::is_completed)
    }

    /// Linear lookup of a lesson by id.
    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id() == id)
    }

    #[must_use]
    pub fn contains_lesson(&self, id: &LessonId) -> bool {
        self.lesson(id).is_some()
    }

    /// Marks the lesson with `id` completed, unlocks its immediate successor
    /// if that successor is currently locked and not completed, and recomputes
    /// `progress`.
    ///
    /// Returns `None` when the module contains no lesson with `id`; the module
    /// is untouched in that case. Re-marking an already-completed lesson is a
    /// no-op for state and reports `newly_completed: false`.
    pub fn mark_lesson_completed(&mut self, id: &LessonId) -> Option<LessonCompletion> {
        let position = self.lessons.iter().position(|l| l.id() == id)?;

        let newly_completed = !self.lessons[position].is_completed();
        self.lessons[position].complete();

        // Only the lesson directly after the completed one unlocks.
        let mut unlocked = None;
        if let Some(next) = self.lessons.get_mut(position + 1)
            && next.is_locked()
            && !next.is_completed()
        {
            next.unlock();
            unlocked = Some(next.id().clone());
        }

        self.recompute_progress();

        Some(LessonCompletion {
            module_id: self.id.clone(),
            lesson_id: id.clone(),
            newly_completed,
            unlocked,
            progress: self.progress,
            module_completed: self.is_complete(),
        })
    }

    // Recomputed from scratch on every mutation; the lists are a handful of
    // entries, so no incremental bookkeeping is warranted.
    fn recompute_progress(&mut self) {
        let total = self.lessons.len();
        self.progress = if total > 0 {
            self.completed_lessons() as f32 / total as f32
        } else {
            0.0
        };
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
