use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson duration cannot be empty")]
    EmptyDuration,
}

//
// ─── LESSON STATE ──────────────────────────────────────────────────────────────
//

/// Where a lesson sits in its unlock lifecycle.
///
/// Transitions: `Locked` → `Unlocked` when the predecessor completes,
/// `Unlocked` → `Completed` when the learner finishes it. `Completed` is
/// terminal; lessons are never un-completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonState {
    Locked,
    Unlocked,
    Completed,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// An individual learning unit with completion and lock state.
///
/// Position within the owning module's lesson sequence defines unlock order;
/// the lesson itself carries no position field.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration: String,
    completed: bool,
    locked: bool,
}

impl Lesson {
    /// Creates a new Lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` or `LessonError::EmptyDuration` if
    /// the respective field is empty or whitespace-only.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration: impl Into<String>,
        completed: bool,
        locked: bool,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        let duration = duration.into();
        if duration.trim().is_empty() {
            return Err(LessonError::EmptyDuration);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            duration: duration.trim().to_owned(),
            completed,
            locked,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display string such as `"12 min"`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn state(&self) -> LessonState {
        if self.completed {
            LessonState::Completed
        } else if self.locked {
            LessonState::Locked
        } else {
            LessonState::Unlocked
        }
    }

    /// Marks the lesson completed. Idempotent; completion is terminal.
    pub(crate) fn complete(&mut self) {
        self.completed = true;
    }

    /// Clears the lock, making the lesson available to the learner.
    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_new_rejects_empty_title() {
        let err = Lesson::new(LessonId::new("qb-1"), "  ", "5 min", false, false).unwrap_err();
        assert_eq!(err, LessonError::EmptyTitle);
    }

    #[test]
    fn lesson_new_rejects_empty_duration() {
        let err = Lesson::new(LessonId::new("qb-1"), "Intro", "", false, false).unwrap_err();
        assert_eq!(err, LessonError::EmptyDuration);
    }

    #[test]
    fn lesson_state_reflects_flags() {
        let locked = Lesson::new(LessonId::new("a"), "A", "5 min", false, true).unwrap();
        assert_eq!(locked.state(), LessonState::Locked);

        let open = Lesson::new(LessonId::new("b"), "B", "5 min", false, false).unwrap();
        assert_eq!(open.state(), LessonState::Unlocked);

        let done = Lesson::new(LessonId::new("c"), "C", "5 min", true, false).unwrap();
        assert_eq!(done.state(), LessonState::Completed);
    }

    #[test]
    fn complete_is_terminal_and_idempotent() {
        let mut lesson = Lesson::new(LessonId::new("a"), "A", "5 min", false, false).unwrap();
        lesson.complete();
        assert!(lesson.is_completed());
        lesson.complete();
        assert!(lesson.is_completed());
        assert_eq!(lesson.state(), LessonState::Completed);
    }

    #[test]
    fn unlock_clears_lock() {
        let mut lesson = Lesson::new(LessonId::new("a"), "A", "5 min", false, true).unwrap();
        lesson.unlock();
        assert!(!lesson.is_locked());
        assert_eq!(lesson.state(), LessonState::Unlocked);
    }

    #[test]
    fn lesson_trims_title_and_duration() {
        let lesson = Lesson::new(LessonId::new("a"), "  Intro  ", " 5 min ", false, false).unwrap();
        assert_eq!(lesson.title(), "Intro");
        assert_eq!(lesson.duration(), "5 min");
    }
}
