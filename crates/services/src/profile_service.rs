use chrono::NaiveDate;

use quantduo_core::model::{Badge, UserProfile, XpGain};

/// Owns the learner's profile and applies XP, streak and badge updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileService {
    profile: UserProfile,
}

impl ProfileService {
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Fill fraction for the XP progress bar, in `[0, 1]`.
    #[must_use]
    pub fn xp_progress(&self) -> f32 {
        self.profile.xp() as f32 / self.profile.xp_to_next_level() as f32
    }

    pub fn add_xp(&mut self, amount: u32) -> XpGain {
        self.profile.add_xp(amount)
    }

    pub fn record_activity(&mut self, date: NaiveDate) {
        self.profile.record_activity(date);
    }

    /// Returns true when the badge was newly awarded.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        self.profile.award_badge(badge)
    }

    pub fn record_lesson_completed(&mut self) {
        self.profile.record_lesson_completed();
    }

    pub fn record_challenge_completed(&mut self) {
        self.profile.record_challenge_completed();
    }
}
