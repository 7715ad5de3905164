use thiserror::Error;

use crate::model::ids::StrategyId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrategyError {
    #[error("strategy name cannot be empty")]
    EmptyName,

    #[error("strategy performance metrics must be finite")]
    NonFiniteMetric,

    #[error("win rate must be between 0 and 100 percent")]
    InvalidWinRate,
}

//
// ─── PERFORMANCE ───────────────────────────────────────────────────────────────
//

/// Backtest headline metrics for a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyPerformance {
    returns_pct: f32,
    sharpe: f32,
    max_drawdown_pct: f32,
    win_rate_pct: f32,
}

impl StrategyPerformance {
    /// Creates performance metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if any metric is non-finite or the win rate is
    /// outside `[0, 100]`.
    pub fn new(
        returns_pct: f32,
        sharpe: f32,
        max_drawdown_pct: f32,
        win_rate_pct: f32,
    ) -> Result<Self, StrategyError> {
        if !(returns_pct.is_finite()
            && sharpe.is_finite()
            && max_drawdown_pct.is_finite()
            && win_rate_pct.is_finite())
        {
            return Err(StrategyError::NonFiniteMetric);
        }
        if !(0.0..=100.0).contains(&win_rate_pct) {
            return Err(StrategyError::InvalidWinRate);
        }

        Ok(Self {
            returns_pct,
            sharpe,
            max_drawdown_pct,
            win_rate_pct,
        })
    }

    #[must_use]
    pub fn returns_pct(&self) -> f32 {
        self.returns_pct
    }

    #[must_use]
    pub fn sharpe(&self) -> f32 {
        self.sharpe
    }

    #[must_use]
    pub fn max_drawdown_pct(&self) -> f32 {
        self.max_drawdown_pct
    }

    #[must_use]
    pub fn win_rate_pct(&self) -> f32 {
        self.win_rate_pct
    }
}

//
// ─── STRATEGY ──────────────────────────────────────────────────────────────────
//

/// A practice trading strategy shown on the practice tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    id: StrategyId,
    name: String,
    description: String,
    performance: StrategyPerformance,
    tags: Vec<String>,
}

impl Strategy {
    /// Creates a new Strategy.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::EmptyName` if the name is blank.
    pub fn new(
        id: StrategyId,
        name: impl Into<String>,
        description: impl Into<String>,
        performance: StrategyPerformance,
        tags: Vec<String>,
    ) -> Result<Self, StrategyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StrategyError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            description: description.into(),
            performance,
            tags,
        })
    }

    #[must_use]
    pub fn id(&self) -> &StrategyId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn performance(&self) -> &StrategyPerformance {
        &self.performance
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Case-insensitive tag match, used by the practice tab filter chips.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
