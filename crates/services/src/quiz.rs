use chrono::{DateTime, Utc};
use std::fmt;

use quantduo_core::model::{LessonContent, LessonId, QuizQuestion};

use crate::error::QuizError;

//
// ─── ANSWERS & SCORE ───────────────────────────────────────────────────────────
//

/// Outcome of answering one quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub question_index: usize,
    pub choice: usize,
    pub correct: bool,
    /// Shown to the learner after answering, right or wrong.
    pub explanation: String,
}

/// Final tally for a finished (or in-flight) quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// Fraction of questions answered correctly, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f32 / self.total as f32
    }

    /// All questions answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory pass over a lesson's quiz.
///
/// Steps through the questions sequentially: answer the current question,
/// read the explanation, advance. Completing the last question stamps
/// `completed_at`; the session never persists anything — the caller marks
/// the lesson completed in the progress store afterwards.
pub struct QuizSession {
    lesson_id: LessonId,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<QuizAnswer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Starts a quiz for the given lesson content.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the lesson carries no quiz questions.
    pub fn new(content: &LessonContent, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if content.quiz().is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            lesson_id: content.lesson_id().clone(),
            questions: content.quiz().to_vec(),
            current: 0,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Running score; equals the final score once the session is complete.
    #[must_use]
    pub fn score(&self) -> QuizScore {
        QuizScore {
            correct: self.answers.iter().filter(|a| a.correct).count(),
            total: self.questions.len(),
        }
    }

    /// Grades `choice` against the current question and advances. Answering
    /// the last question completes the session.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the quiz is already finished, or
    /// `QuizError::ChoiceOutOfRange` if `choice` does not index into the
    /// current question's options.
    pub fn answer_current(
        &mut self,
        choice: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<&QuizAnswer, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };
        if choice >= question.options().len() {
            return Err(QuizError::ChoiceOutOfRange {
                choice,
                options: question.options().len(),
            });
        }

        let answer = QuizAnswer {
            question_index: self.current,
            choice,
            correct: question.is_correct(choice),
            explanation: question.explanation().to_owned(),
        };
        self.answers.push(answer);

        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(answered_at);
        }

        self.answers.last().ok_or(QuizError::Completed)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("lesson_id", &self.lesson_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quantduo_core::time::fixed_now;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion::new(
            "Q?",
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct,
            "because",
        )
        .unwrap()
    }

    fn content(questions: Vec<QuizQuestion>) -> LessonContent {
        LessonContent::new(
            LessonId::new("qb-1"),
            "Introduction to Quant Trading",
            "Quant Basics",
            "5 min",
            Vec::new(),
            questions,
        )
        .unwrap()
    }

    #[test]
    fn empty_quiz_returns_error() {
        let err = QuizSession::new(&content(Vec::new()), fixed_now()).unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn quiz_advances_and_completes() {
        let mut session =
            QuizSession::new(&content(vec![question(1), question(2)]), fixed_now()).unwrap();

        assert!(!session.is_complete());
        let first = session.answer_current(1, fixed_now()).unwrap();
        assert!(first.correct);
        assert!(!session.is_complete());

        let second = session.answer_current(0, fixed_now()).unwrap();
        assert!(!second.correct);
        assert_eq!(second.explanation, "because");
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));

        let score = session.score();
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 2);
        assert!((score.fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn answering_after_completion_is_rejected() {
        let mut session = QuizSession::new(&content(vec![question(0)]), fixed_now()).unwrap();
        session.answer_current(0, fixed_now()).unwrap();

        let err = session.answer_current(0, fixed_now()).unwrap_err();
        assert_eq!(err, QuizError::Completed);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn out_of_range_choice_is_rejected_without_advancing() {
        let mut session = QuizSession::new(&content(vec![question(0)]), fixed_now()).unwrap();

        let err = session.answer_current(9, fixed_now()).unwrap_err();
        assert_eq!(err, QuizError::ChoiceOutOfRange { choice: 9, options: 4 });
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn perfect_score_detection() {
        let mut session =
            QuizSession::new(&content(vec![question(0), question(3)]), fixed_now()).unwrap();
        session.answer_current(0, fixed_now()).unwrap();
        session.answer_current(3, fixed_now()).unwrap();
        assert!(session.score().is_perfect());
    }
}
