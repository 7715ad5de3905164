use quantduo_core::model::{Challenge, ChallengeId, Difficulty, Strategy, StrategyId};

use crate::error::PracticeError;

//
// ─── PRACTICE SERVICE ──────────────────────────────────────────────────────────
//

/// Owns the practice tab's strategies and challenges.
///
/// Strategies are read-only showcase data; challenges carry mutable state
/// (checkable requirements, terminal completion with an XP reward).
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeService {
    strategies: Vec<Strategy>,
    challenges: Vec<Challenge>,
}

impl PracticeService {
    #[must_use]
    pub fn new(strategies: Vec<Strategy>, challenges: Vec<Challenge>) -> Self {
        Self {
            strategies,
            challenges,
        }
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    #[must_use]
    pub fn strategy(&self, id: &StrategyId) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn challenge(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id() == id)
    }

    /// Strategies carrying the given tag (case-insensitive), catalog order.
    #[must_use]
    pub fn strategies_with_tag(&self, tag: &str) -> Vec<&Strategy> {
        self.strategies.iter().filter(|s| s.has_tag(tag)).collect()
    }

    /// Challenges at the given difficulty, catalog order.
    #[must_use]
    pub fn challenges_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| c.difficulty() == difficulty)
            .collect()
    }

    /// Challenges the learner has not yet completed.
    #[must_use]
    pub fn open_challenges(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| !c.is_completed()).collect()
    }

    /// Checks off one requirement of a challenge.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::ChallengeNotFound` for an unknown id and
    /// propagates `ChallengeError::RequirementOutOfRange`.
    pub fn check_requirement(
        &mut self,
        id: &ChallengeId,
        index: usize,
    ) -> Result<(), PracticeError> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| PracticeError::ChallengeNotFound(id.clone()))?;
        challenge.check_requirement(index)?;
        Ok(())
    }

    /// Completes a challenge and returns its XP reward.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::ChallengeNotFound` for an unknown id and
    /// propagates `ChallengeError::AlreadyCompleted` so rewards cannot be
    /// collected twice.
    pub fn complete_challenge(&mut self, id: &ChallengeId) -> Result<u32, PracticeError> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| PracticeError::ChallengeNotFound(id.clone()))?;
        Ok(challenge.complete()?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quantduo_core::model::{ChallengeError, Requirement, StrategyPerformance};

    fn strategy(id: &str, name: &str, tags: &[&str]) -> Strategy {
        Strategy::new(
            StrategyId::new(id),
            name,
            "desc",
            StrategyPerformance::new(12.5, 1.8, 8.2, 62.0).unwrap(),
            tags.iter().map(|t| (*t).to_string()).collect(),
        )
        .unwrap()
    }

    fn challenge(id: &str, difficulty: Difficulty, reward: u32, completed: bool) -> Challenge {
        Challenge::new(
            ChallengeId::new(id),
            format!("Challenge {id}"),
            "desc",
            difficulty,
            reward,
            completed,
            Vec::new(),
            vec![Requirement::new("req", false)],
        )
        .unwrap()
    }

    fn service() -> PracticeService {
        PracticeService::new(
            vec![
                strategy("strat-1", "Mean Reversion ETF", &["Mean Reversion", "ETFs"]),
                strategy("strat-2", "Momentum Stocks", &["Momentum", "Stocks"]),
            ],
            vec![
                challenge("chal-1", Difficulty::Beginner, 100, false),
                challenge("chal-2", Difficulty::Intermediate, 250, false),
                challenge("chal-4", Difficulty::Intermediate, 300, true),
            ],
        )
    }

    #[test]
    fn lookup_by_id() {
        let service = service();
        assert_eq!(
            service.strategy(&StrategyId::new("strat-2")).unwrap().name(),
            "Momentum Stocks"
        );
        assert!(service.strategy(&StrategyId::new("strat-9")).is_none());
        assert!(service.challenge(&ChallengeId::new("chal-2")).is_some());
    }

    #[test]
    fn tag_filter_matches_case_insensitively() {
        let service = service();
        let hits = service.strategies_with_tag("momentum");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), &StrategyId::new("strat-2"));
    }

    #[test]
    fn difficulty_filter() {
        let service = service();
        let intermediate = service.challenges_by_difficulty(Difficulty::Intermediate);
        assert_eq!(intermediate.len(), 2);
        assert!(service.challenges_by_difficulty(Difficulty::Advanced).is_empty());
    }

    #[test]
    fn open_challenges_excludes_completed() {
        let service = service();
        let open = service.open_challenges();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|c| !c.is_completed()));
    }

    #[test]
    fn complete_challenge_awards_reward_once() {
        let mut service = service();
        let id = ChallengeId::new("chal-1");

        assert_eq!(service.complete_challenge(&id).unwrap(), 100);
        assert!(service.challenge(&id).unwrap().is_completed());

        let err = service.complete_challenge(&id).unwrap_err();
        assert_eq!(err, PracticeError::Challenge(ChallengeError::AlreadyCompleted));
    }

    #[test]
    fn complete_unknown_challenge_fails() {
        let mut service = service();
        let err = service.complete_challenge(&ChallengeId::new("chal-9")).unwrap_err();
        assert_eq!(err, PracticeError::ChallengeNotFound(ChallengeId::new("chal-9")));
    }

    #[test]
    fn check_requirement_updates_challenge() {
        let mut service = service();
        let id = ChallengeId::new("chal-1");
        service.check_requirement(&id, 0).unwrap();
        assert!(service.challenge(&id).unwrap().requirements_met());
    }
}
