use chrono::NaiveDate;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("profile name cannot be empty")]
    EmptyName,

    #[error("profile username cannot be empty")]
    EmptyUsername,

    #[error("profile level must be >= 1")]
    ZeroLevel,
}

//
// ─── BADGES ────────────────────────────────────────────────────────────────────
//

/// An achievement badge shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    id: String,
    name: String,
    icon: String,
    color: String,
    description: String,
}

impl Badge {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A headline stat shown on the profile screen (e.g. best Sharpe ratio).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStat {
    pub name: String,
    pub value: String,
}

impl ProfileStat {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

//
// ─── XP GAIN ───────────────────────────────────────────────────────────────────
//

/// Result of awarding XP: the profile's new position on the level curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGain {
    pub awarded: u32,
    pub levels_gained: u32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
}

//
// ─── USER PROFILE ──────────────────────────────────────────────────────────────
//

/// The learner's profile: identity, XP/level curve, streak and achievements.
///
/// The level threshold is `250 * level` XP; leveling up carries surplus XP
/// into the next level.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    name: String,
    username: String,
    level: u32,
    xp: u32,
    joined: NaiveDate,
    streak_days: u32,
    last_active: Option<NaiveDate>,
    lessons_completed: u32,
    challenges_completed: u32,
    badges: Vec<Badge>,
    stats: Vec<ProfileStat>,
}

impl UserProfile {
    /// Creates a new profile.
    ///
    /// # Errors
    ///
    /// Returns an error if name or username is blank, or level is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        level: u32,
        xp: u32,
        joined: NaiveDate,
        streak_days: u32,
        last_active: Option<NaiveDate>,
        lessons_completed: u32,
        challenges_completed: u32,
        badges: Vec<Badge>,
        stats: Vec<ProfileStat>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if level == 0 {
            return Err(ProfileError::ZeroLevel);
        }

        Ok(Self {
            name: name.trim().to_owned(),
            username: username.trim().to_owned(),
            level,
            xp,
            joined,
            streak_days,
            last_active,
            lessons_completed,
            challenges_completed,
            badges,
            stats,
        })
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// XP required to reach the next level from the start of the current one.
    #[must_use]
    pub fn xp_to_next_level(&self) -> u32 {
        250 * self.level
    }

    #[must_use]
    pub fn joined(&self) -> NaiveDate {
        self.joined
    }

    #[must_use]
    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    #[must_use]
    pub fn last_active(&self) -> Option<NaiveDate> {
        self.last_active
    }

    #[must_use]
    pub fn lessons_completed(&self) -> u32 {
        self.lessons_completed
    }

    #[must_use]
    pub fn challenges_completed(&self) -> u32 {
        self.challenges_completed
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn stats(&self) -> &[ProfileStat] {
        &self.stats
    }

    #[must_use]
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id() == id)
    }

    /// Awards XP, leveling up while the threshold is crossed. Surplus XP
    /// carries over.
    pub fn add_xp(&mut self, amount: u32) -> XpGain {
        self.xp += amount;
        let mut levels_gained = 0;
        while self.xp >= self.xp_to_next_level() {
            self.xp -= self.xp_to_next_level();
            self.level += 1;
            levels_gained += 1;
        }

        XpGain {
            awarded: amount,
            levels_gained,
            level: self.level,
            xp: self.xp,
            xp_to_next_level: self.xp_to_next_level(),
        }
    }

    /// Records learner activity on `date` and updates the daily streak:
    /// the same day is a no-op, the day after the last activity extends the
    /// streak, any later day restarts it at 1. Dates before the last recorded
    /// activity are ignored.
    pub fn record_activity(&mut self, date: NaiveDate) {
        match self.last_active {
            None => {
                self.streak_days = 1;
                self.last_active = Some(date);
            }
            Some(last) if last == date => {}
            Some(last) if last.succ_opt() == Some(date) => {
                self.streak_days += 1;
                self.last_active = Some(date);
            }
            Some(last) if date > last => {
                self.streak_days = 1;
                self.last_active = Some(date);
            }
            Some(_) => {}
        }
    }

    /// Adds a badge unless one with the same id is already held.
    /// Returns true when the badge was newly awarded.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        if self.has_badge(badge.id()) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    pub fn record_lesson_completed(&mut self) {
        self.lessons_completed += 1;
    }

    pub fn record_challenge_completed(&mut self) {
        self.challenges_completed += 1;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
