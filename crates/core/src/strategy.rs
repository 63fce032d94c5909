// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strategy-driven scoring of break layouts.
//!
//! Every strategy is a row of a policy table: one weight per break length
//! category, a length exponent, and a secondary weight on the number of days
//! spent in breaks. A break contributes
//! `category weight × total_days ^ exponent + secondary × total_days`; the
//! score of a layout is the sum over its breaks.
//!
//! The exponent decides whether the greedy allocator grows breaks or opens
//! new ones:
//!
//! - 1: every extra day of an existing break is worth less than a new
//!   three-day break, so CTO spreads into long weekends
//! - 2: short breaks are still opened first, but once a break reaches
//!   mini-break length growing it pays more than a new one
//! - 3: growing a break beats starting another one until the next category
//!   weight drops far enough to cap it
//!
//! Scores are only ever compared against other scores of the same strategy.
//! Higher is better.

use crate::breaks::{Break, BreakCategory};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How CTO days should be shaped into breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum OptimizationStrategy {
    /// Near-even weight across break lengths, plus total days off.
    #[default]
    Balanced,
    /// Several breaks of up to six days over few long ones.
    MiniBreaks,
    /// As many 3 to 4 day weekends as possible.
    LongWeekends,
    /// Week-long breaks.
    WeekLongBreaks,
    /// Consolidate CTO into one or two long vacations.
    ExtendedVacations,
}

impl OptimizationStrategy {
    /// All strategies, in display order.
    pub const ALL: [Self; 5] = [
        Self::Balanced,
        Self::MiniBreaks,
        Self::LongWeekends,
        Self::WeekLongBreaks,
        Self::ExtendedVacations,
    ];

    /// Converts this strategy to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::MiniBreaks => "mini-breaks",
            Self::LongWeekends => "long-weekends",
            Self::WeekLongBreaks => "week-long-breaks",
            Self::ExtendedVacations => "extended-vacations",
        }
    }
}

impl std::fmt::Display for OptimizationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptimizationStrategy {
    type Err = CoreError;

    /// Accepts kebab-case, snake_case, and camelCase spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "balanced" => Ok(Self::Balanced),
            "minibreaks" => Ok(Self::MiniBreaks),
            "longweekends" => Ok(Self::LongWeekends),
            "weeklongbreaks" => Ok(Self::WeekLongBreaks),
            "extendedvacations" => Ok(Self::ExtendedVacations),
            _ => Err(CoreError::UnknownStrategy(s.to_string())),
        }
    }
}

/// One row of the scoring policy table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    /// Weight of a `LongWeekend` break.
    pub long_weekend: f64,
    /// Weight of a `MiniBreak` break.
    pub mini_break: f64,
    /// Weight of a `WeekLong` break.
    pub week_long: f64,
    /// Weight of an `Extended` break.
    pub extended: f64,
    /// Weight per day spent in any break.
    pub secondary: f64,
    /// Power applied to the break length before weighting.
    pub length_exponent: i32,
}

impl StrategyWeights {
    /// Returns the default policy row for a strategy.
    #[must_use]
    pub const fn for_strategy(strategy: OptimizationStrategy) -> Self {
        match strategy {
            OptimizationStrategy::Balanced => Self {
                long_weekend: 1.0,
                mini_break: 1.25,
                week_long: 1.0,
                extended: 0.5,
                secondary: 0.25,
                length_exponent: 2,
            },
            OptimizationStrategy::MiniBreaks => Self {
                long_weekend: 1.0,
                mini_break: 1.0,
                week_long: 0.25,
                extended: 0.125,
                secondary: 0.0,
                length_exponent: 3,
            },
            OptimizationStrategy::LongWeekends => Self {
                long_weekend: 3.0,
                mini_break: 1.0,
                week_long: 0.5,
                extended: 0.25,
                secondary: 0.0,
                length_exponent: 1,
            },
            OptimizationStrategy::WeekLongBreaks => Self {
                long_weekend: 0.5,
                mini_break: 1.0,
                week_long: 1.5,
                extended: 0.5,
                secondary: 0.0,
                length_exponent: 3,
            },
            OptimizationStrategy::ExtendedVacations => Self {
                long_weekend: 0.5,
                mini_break: 1.0,
                week_long: 1.5,
                extended: 2.0,
                secondary: 0.0,
                length_exponent: 3,
            },
        }
    }

    /// Returns the weight of a break category.
    #[must_use]
    pub const fn weight(&self, category: BreakCategory) -> f64 {
        match category {
            BreakCategory::LongWeekend => self.long_weekend,
            BreakCategory::MiniBreak => self.mini_break,
            BreakCategory::WeekLong => self.week_long,
            BreakCategory::Extended => self.extended,
        }
    }
}

/// Scores break layouts for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    strategy: OptimizationStrategy,
    weights: StrategyWeights,
}

impl Scorer {
    /// Creates a scorer using the default policy row of `strategy`.
    #[must_use]
    pub const fn new(strategy: OptimizationStrategy) -> Self {
        Self {
            strategy,
            weights: StrategyWeights::for_strategy(strategy),
        }
    }

    /// Creates a scorer with a tuned policy row.
    #[must_use]
    pub const fn with_weights(strategy: OptimizationStrategy, weights: StrategyWeights) -> Self {
        Self { strategy, weights }
    }

    /// Returns the strategy this scorer ranks for.
    #[must_use]
    pub const fn strategy(&self) -> OptimizationStrategy {
        self.strategy
    }

    /// Returns the policy row in use.
    #[must_use]
    pub const fn weights(&self) -> StrategyWeights {
        self.weights
    }

    /// Scores one break from its length and category.
    #[must_use]
    pub fn score_break(&self, total_days: usize, category: BreakCategory) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let days: f64 = total_days as f64;
        self.weights.weight(category).mul_add(
            days.powi(self.weights.length_exponent),
            self.weights.secondary * days,
        )
    }

    /// Scores a break layout. Higher is better.
    #[must_use]
    pub fn score(&self, breaks: &[Break]) -> f64 {
        breaks
            .iter()
            .map(|b| self.score_break(b.total_days, b.category))
            .sum()
    }
}

/// Scores a break layout under the default policy row of `strategy`.
#[must_use]
pub fn score(breaks: &[Break], strategy: OptimizationStrategy) -> f64 {
    Scorer::new(strategy).score(breaks)
}
