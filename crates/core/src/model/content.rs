use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("lesson content title cannot be empty")]
    EmptyTitle,

    #[error("quiz question prompt cannot be empty")]
    EmptyPrompt,

    #[error("quiz question needs at least two options")]
    TooFewOptions,

    #[error("correct answer index {index} out of range for {options} options")]
    CorrectAnswerOutOfRange { index: usize, options: usize },
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

/// Interaction style for an interactive section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveKind {
    DragDrop,
    FillBlank,
    Slider,
}

/// One block in a lesson body, rendered in order by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonSection {
    Text {
        body: String,
    },
    Image {
        url: String,
        caption: Option<String>,
    },
    Code {
        source: String,
        language: Option<String>,
        caption: Option<String>,
    },
    Chart {
        kind: String,
        caption: Option<String>,
    },
    Interactive {
        prompt: String,
        kind: InteractiveKind,
        caption: Option<String>,
    },
    Video {
        url: String,
        caption: Option<String>,
    },
    Formula {
        name: String,
        latex: String,
        caption: Option<String>,
    },
}

impl LessonSection {
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match self {
            LessonSection::Text { .. } => None,
            LessonSection::Image { caption, .. }
            | LessonSection::Code { caption, .. }
            | LessonSection::Chart { caption, .. }
            | LessonSection::Interactive { caption, .. }
            | LessonSection::Video { caption, .. }
            | LessonSection::Formula { caption, .. } => caption.as_deref(),
        }
    }
}

//
// ─── QUIZ QUESTIONS ────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
}

impl QuizQuestion {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is blank, fewer than two options are
    /// given, or `correct_answer` does not index into `options`.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ContentError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(ContentError::TooFewOptions);
        }
        if correct_answer >= options.len() {
            return Err(ContentError::CorrectAnswerOutOfRange {
                index: correct_answer,
                options: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.trim().to_owned(),
            options,
            correct_answer,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    /// Shown to the learner after answering, right or wrong.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// The body of a lesson: ordered sections followed by a quiz.
///
/// Content is keyed by the same globally unique lesson id used for
/// progression, so a client can route from a lesson list entry straight to
/// its body.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonContent {
    lesson_id: LessonId,
    title: String,
    module_title: String,
    duration: String,
    sections: Vec<LessonSection>,
    quiz: Vec<QuizQuestion>,
}

impl LessonContent {
    /// Creates new lesson content.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(
        lesson_id: LessonId,
        title: impl Into<String>,
        module_title: impl Into<String>,
        duration: impl Into<String>,
        sections: Vec<LessonSection>,
        quiz: Vec<QuizQuestion>,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }

        Ok(Self {
            lesson_id,
            title: title.trim().to_owned(),
            module_title: module_title.into(),
            duration: duration.into(),
            sections,
            quiz,
        })
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn module_title(&self) -> &str {
        &self.module_title
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn sections(&self) -> &[LessonSection] {
        &self.sections
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    #[must_use]
    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
