use std::fmt;
use thiserror::Error;

use crate::model::ids::ChallengeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge title cannot be empty")]
    EmptyTitle,

    #[error("challenge reward must be > 0 XP")]
    ZeroReward,

    #[error("requirement index {index} out of range for {requirements} requirements")]
    RequirementOutOfRange { index: usize, requirements: usize },

    #[error("challenge already completed")]
    AlreadyCompleted,
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        write!(f, "{label}")
    }
}

//
// ─── REQUIREMENTS ──────────────────────────────────────────────────────────────
//

/// A checkable acceptance criterion for a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    description: String,
    completed: bool,
}

impl Requirement {
    #[must_use]
    pub fn new(description: impl Into<String>, completed: bool) -> Self {
        Self {
            description: description.into(),
            completed,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn check(&mut self) {
        self.completed = true;
    }
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// A practice challenge with instruction steps, checkable requirements and an
/// XP reward on completion. Completion is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    description: String,
    difficulty: Difficulty,
    reward_xp: u32,
    completed: bool,
    instructions: Vec<String>,
    requirements: Vec<Requirement>,
}

impl Challenge {
    /// Creates a new Challenge.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyTitle` if the title is blank or
    /// `ChallengeError::ZeroReward` if the reward is zero XP.
    pub fn new(
        id: ChallengeId,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        reward_xp: u32,
        completed: bool,
        instructions: Vec<String>,
        requirements: Vec<Requirement>,
    ) -> Result<Self, ChallengeError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChallengeError::EmptyTitle);
        }
        if reward_xp == 0 {
            return Err(ChallengeError::ZeroReward);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into(),
            difficulty,
            reward_xp,
            completed,
            instructions,
            requirements,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &ChallengeId {
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

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn reward_xp(&self) -> u32 {
        self.reward_xp
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// True when every requirement is checked off (vacuously true when the
    /// challenge lists no requirements).
    #[must_use]
    pub fn requirements_met(&self) -> bool {
        self.requirements.iter().all(Requirement::is_completed)
    }

    /// Checks off the requirement at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::RequirementOutOfRange` if `index` does not
    /// address a requirement.
    pub fn check_requirement(&mut self, index: usize) -> Result<(), ChallengeError> {
        let requirements = self.requirements.len();
        let Some(requirement) = self.requirements.get_mut(index) else {
            return Err(ChallengeError::RequirementOutOfRange {
                index,
                requirements,
            });
        };
        requirement.check();
        Ok(())
    }

    /// Marks the challenge completed, returning its XP reward.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::AlreadyCompleted` on a second completion so
    /// callers cannot double-award XP.
    pub fn complete(&mut self) -> Result<u32, ChallengeError> {
        if self.completed {
            return Err(ChallengeError::AlreadyCompleted);
        }
        self.completed = true;
        Ok(self.reward_xp)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
