use thiserror::Error;

use crate::model::ids::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error("leaderboard entry name cannot be empty")]
    EmptyName,

    #[error("win rate must be between 0 and 100 percent")]
    InvalidWinRate,
}

//
// ─── FILTERS ───────────────────────────────────────────────────────────────────
//

/// Scoring period selected on the leaderboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    Weekly,
    Monthly,
    AllTime,
}

/// Ranking category selected on the leaderboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Learning,
    Strategies,
    Challenges,
    Friends,
}

//
// ─── ENTRY PARTS ───────────────────────────────────────────────────────────────
//

/// Points earned per scoring period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointTotals {
    pub weekly: u32,
    pub monthly: u32,
    pub all_time: u32,
}

impl PointTotals {
    #[must_use]
    pub fn new(weekly: u32, monthly: u32, all_time: u32) -> Self {
        Self {
            weekly,
            monthly,
            all_time,
        }
    }

    #[must_use]
    pub fn for_period(&self, filter: TimeFilter) -> u32 {
        match filter {
            TimeFilter::Weekly => self.weekly,
            TimeFilter::Monthly => self.monthly,
            TimeFilter::AllTime => self.all_time,
        }
    }
}

/// Weekly activity counts behind the category rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivitySummary {
    pub lessons: u32,
    pub strategies: u32,
    pub challenges: u32,
}

impl ActivitySummary {
    #[must_use]
    pub fn new(lessons: u32, strategies: u32, challenges: u32) -> Self {
        Self {
            lessons,
            strategies,
            challenges,
        }
    }
}

//
// ─── LEADERBOARD ENTRY ─────────────────────────────────────────────────────────
//

/// One user on the leaderboard.
///
/// Ranks are not stored here; they are positional, computed per filter by the
/// leaderboard service. `rank_change` is the week-over-week movement shipped
/// with the seed data.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    id: UserId,
    name: String,
    avatar: String,
    level: u32,
    points: PointTotals,
    activity: ActivitySummary,
    rank_change: i32,
    badges: Vec<String>,
    is_friend: bool,
    is_current_user: bool,
    win_rate_pct: Option<u32>,
    total_strategies: u32,
}

impl LeaderboardEntry {
    /// Creates a new entry; optional attributes are set with the `with_*`
    /// builder methods.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::EmptyName` if the name is blank.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        level: u32,
        points: PointTotals,
        activity: ActivitySummary,
    ) -> Result<Self, LeaderboardError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LeaderboardError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            avatar: avatar.into(),
            level,
            points,
            activity,
            rank_change: 0,
            badges: Vec::new(),
            is_friend: false,
            is_current_user: false,
            win_rate_pct: None,
            total_strategies: 0,
        })
    }

    #[must_use]
    pub fn with_rank_change(mut self, change: i32) -> Self {
        self.rank_change = change;
        self
    }

    #[must_use]
    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = badges;
        self
    }

    #[must_use]
    pub fn as_friend(mut self) -> Self {
        self.is_friend = true;
        self
    }

    #[must_use]
    pub fn as_current_user(mut self) -> Self {
        self.is_current_user = true;
        self
    }

    /// # Errors
    ///
    /// Returns `LeaderboardError::InvalidWinRate` if the rate exceeds 100.
    pub fn with_win_rate(mut self, win_rate_pct: u32) -> Result<Self, LeaderboardError> {
        if win_rate_pct > 100 {
            return Err(LeaderboardError::InvalidWinRate);
        }
        self.win_rate_pct = Some(win_rate_pct);
        Ok(self)
    }

    #[must_use]
    pub fn with_total_strategies(mut self, total: u32) -> Self {
        self.total_strategies = total;
        self
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Avatar initial shown in the list (e.g. `"S"`).
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn points(&self) -> &PointTotals {
        &self.points
    }

    #[must_use]
    pub fn activity(&self) -> &ActivitySummary {
        &self.activity
    }

    #[must_use]
    pub fn rank_change(&self) -> i32 {
        self.rank_change
    }

    #[must_use]
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    #[must_use]
    pub fn is_friend(&self) -> bool {
        self.is_friend
    }

    #[must_use]
    pub fn is_current_user(&self) -> bool {
        self.is_current_user
    }

    #[must_use]
    pub fn win_rate_pct(&self) -> Option<u32> {
        self.win_rate_pct
    }

    #[must_use]
    pub fn total_strategies(&self) -> u32 {
        self.total_strategies
    }

    /// Score used for ordering under the given filters: points for `All` and
    /// `Friends`, the matching activity count otherwise.
    #[must_use]
    pub fn score(&self, time: TimeFilter, category: CategoryFilter) -> u32 {
        match category {
            CategoryFilter::All | CategoryFilter::Friends => self.points.for_period(time),
            CategoryFilter::Learning => self.activity.lessons,
            CategoryFilter::Strategies => self.activity.strategies,
            CategoryFilter::Challenges => self.activity.challenges,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
