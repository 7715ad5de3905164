use quantduo_core::model::{CategoryFilter, LeaderboardEntry, TimeFilter, UserId};

//
// ─── RANKED VIEW ───────────────────────────────────────────────────────────────
//

/// One row of a ranked standings view. Ranks start at 1 and are recomputed
/// per filter combination.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: u32,
    pub score: u32,
    pub entry: &'a LeaderboardEntry,
}

//
// ─── LEADERBOARD SERVICE ───────────────────────────────────────────────────────
//

/// Owns the leaderboard entries and produces filtered, ranked views.
///
/// The friends category keeps only friends plus the current user; the
/// activity categories re-rank everyone by the matching weekly activity
/// count. Ties break on name to keep views deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardService {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, id: &UserId) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// The entry flagged as the current user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.is_current_user())
    }

    /// Ranked standings for the given filter combination, best first.
    #[must_use]
    pub fn standings(&self, time: TimeFilter, category: CategoryFilter) -> Vec<RankedEntry<'_>> {
        let mut rows: Vec<&LeaderboardEntry> = self
            .entries
            .iter()
            .filter(|e| match category {
                CategoryFilter::Friends => e.is_friend() || e.is_current_user(),
                _ => true,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.score(time, category)
                .cmp(&a.score(time, category))
                .then_with(|| a.name().cmp(b.name()))
        });

        rows.into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i as u32 + 1,
                score: entry.score(time, category),
                entry,
            })
            .collect()
    }

    /// Top `n` rows of the ranked standings.
    #[must_use]
    pub fn top(&self, n: usize, time: TimeFilter, category: CategoryFilter) -> Vec<RankedEntry<'_>> {
        let mut rows = self.standings(time, category);
        rows.truncate(n);
        rows
    }

    /// The current user's rank under the given filters.
    #[must_use]
    pub fn current_user_rank(&self, time: TimeFilter, category: CategoryFilter) -> Option<u32> {
        self.standings(time, category)
            .iter()
            .find(|row| row.entry.is_current_user())
            .map(|row| row.rank)
    }

    /// Case-insensitive substring search over names, in stored order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&LeaderboardEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| e.name().to_lowercase().contains(&query))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quantduo_core::model::{ActivitySummary, PointTotals};

    fn entry(
        id: &str,
        name: &str,
        weekly: u32,
        monthly: u32,
        lessons: u32,
    ) -> LeaderboardEntry {
        LeaderboardEntry::new(
            UserId::new(id),
            name,
            &name[..1],
            30,
            PointTotals::new(weekly, monthly, weekly * 20),
            ActivitySummary::new(lessons, 2, 1),
        )
        .unwrap()
    }

    fn service() -> LeaderboardService {
        LeaderboardService::new(vec![
            entry("user-1", "Sarah K.", 4850, 17980, 12).as_friend(),
            entry("user-2", "Michael T.", 4720, 18560, 8),
            entry("user-3", "Jessica L.", 4580, 16890, 15).as_friend(),
            entry("user-4", "You", 4450, 15640, 10).as_current_user(),
            entry("user-5", "David R.", 4320, 14200, 6),
        ])
    }

    #[test]
    fn weekly_standings_rank_by_points() {
        let service = service();
        let rows = service.standings(TimeFilter::Weekly, CategoryFilter::All);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].entry.name(), "Sarah K.");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].score, 4850);
        assert_eq!(rows[4].entry.name(), "David R.");
        assert_eq!(rows[4].rank, 5);
    }

    #[test]
    fn monthly_standings_reorder() {
        let service = service();
        let rows = service.standings(TimeFilter::Monthly, CategoryFilter::All);
        assert_eq!(rows[0].entry.name(), "Michael T.");
        assert_eq!(rows[1].entry.name(), "Sarah K.");
    }

    #[test]
    fn learning_category_ranks_by_lessons() {
        let service = service();
        let rows = service.standings(TimeFilter::Weekly, CategoryFilter::Learning);
        assert_eq!(rows[0].entry.name(), "Jessica L.");
        assert_eq!(rows[0].score, 15);
    }

    #[test]
    fn friends_category_keeps_friends_and_current_user() {
        let service = service();
        let rows = service.standings(TimeFilter::Weekly, CategoryFilter::Friends);
        let names: Vec<&str> = rows.iter().map(|r| r.entry.name()).collect();
        assert_eq!(names, ["Sarah K.", "Jessica L.", "You"]);
    }

    #[test]
    fn current_user_rank_follows_filters() {
        let service = service();
        assert_eq!(
            service.current_user_rank(TimeFilter::Weekly, CategoryFilter::All),
            Some(4)
        );
        assert_eq!(
            service.current_user_rank(TimeFilter::Weekly, CategoryFilter::Friends),
            Some(3)
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let service = service();
        let hits = service.search("sAr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Sarah K.");
        assert_eq!(service.search("  ").len(), 5);
        assert!(service.search("zzz").is_empty());
    }

    #[test]
    fn top_truncates_standings() {
        let service = service();
        let rows = service.top(3, TimeFilter::Weekly, CategoryFilter::All);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].rank, 3);
    }
}
