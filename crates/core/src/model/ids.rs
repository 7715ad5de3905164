use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a learning Module (e.g. `quant-basics`)
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(String);

/// Unique identifier for a Lesson (e.g. `qb-4`)
///
/// Lesson ids are globally unique across modules and double as routing keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonId(String);

/// Unique identifier for a practice Strategy
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrategyId(String);

/// Unique identifier for a practice Challenge
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChallengeId(String);

/// Unique identifier for a leaderboard user
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Creates a new id from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name).to_string(),
                    });
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_id!(ModuleId);
string_id!(LessonId);
string_id!(StrategyId);
string_id!(ChallengeId);
string_id!(UserId);

// ─── Parse Error ───────────────────────────────────────────────────────────────

/// Error type for parsing an id from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_id_display() {
        let id = LessonId::new("qb-4");
        assert_eq!(id.to_string(), "qb-4");
    }

    #[test]
    fn test_lesson_id_from_str() {
        let id: LessonId = "qb-1".parse().unwrap();
        assert_eq!(id, LessonId::new("qb-1"));
    }

    #[test]
    fn test_module_id_from_str_rejects_blank() {
        let result = "   ".parse::<ModuleId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_module_id_as_str() {
        let id = ModuleId::new("quant-basics");
        assert_eq!(id.as_str(), "quant-basics");
    }

    #[test]
    fn test_challenge_id_debug() {
        let id = ChallengeId::new("chal-1");
        assert_eq!(format!("{id:?}"), "ChallengeId(chal-1)");
    }

    #[test]
    fn test_id_roundtrip() {
        let original = StrategyId::new("strat-2");
        let serialized = original.to_string();
        let deserialized: StrategyId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
