// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The planning entry point.
//!
//! `optimize` is a pure function of its parameters: classify the year, run
//! the allocator, re-detect breaks on the final sequence, aggregate stats.
//! Defaults (strategy, weekend, calendars) are explicit values on
//! [`OptimizationParams`]; nothing is read from module state.

use crate::allocator::{Allocation, Allocator, Commitment};
use crate::breaks::{Break, BreakLengthBounds, mark_breaks};
use crate::error::CoreError;
use crate::stats::{OptimizationStats, aggregate};
use crate::strategy::{OptimizationStrategy, Scorer, StrategyWeights};
use cto_planner_domain::{
    CalendarDay, CompanyDayOff, Date, NamedDate, WeekendDays, build_year, expand_company_days,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Inputs of one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationParams {
    /// The current date; earlier days are never selected.
    pub today: Date,
    /// The target year.
    pub year: i32,
    /// The CTO budget.
    pub number_of_days: i32,
    /// How breaks are ranked.
    pub strategy: OptimizationStrategy,
    /// Public holidays in declaration order.
    pub holidays: Vec<NamedDate>,
    /// Company days off, single or recurring.
    pub company_days_off: Vec<CompanyDayOff>,
    /// Weekdays that are always off.
    pub weekend_days: WeekendDays,
    /// Break length categories.
    pub break_bounds: BreakLengthBounds,
    /// Tuned policy row; `None` uses the strategy's default row.
    pub weights: Option<StrategyWeights>,
}

impl OptimizationParams {
    /// Creates parameters with the default strategy, a Saturday/Sunday
    /// weekend, and empty calendars.
    ///
    /// # Arguments
    ///
    /// * `today` - The current date
    /// * `year` - The target year
    /// * `number_of_days` - The CTO budget
    #[must_use]
    pub fn new(today: Date, year: i32, number_of_days: i32) -> Self {
        Self {
            today,
            year,
            number_of_days,
            strategy: OptimizationStrategy::default(),
            holidays: Vec::new(),
            company_days_off: Vec::new(),
            weekend_days: WeekendDays::default(),
            break_bounds: BreakLengthBounds::default(),
            weights: None,
        }
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: OptimizationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the public holidays.
    #[must_use]
    pub fn with_holidays(mut self, holidays: Vec<NamedDate>) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the company days off.
    #[must_use]
    pub fn with_company_days_off(mut self, company_days_off: Vec<CompanyDayOff>) -> Self {
        self.company_days_off = company_days_off;
        self
    }

    /// Sets the weekend definition.
    #[must_use]
    pub fn with_weekend_days(mut self, weekend_days: WeekendDays) -> Self {
        self.weekend_days = weekend_days;
        self
    }

    /// Sets the break length categories.
    #[must_use]
    pub fn with_break_bounds(mut self, break_bounds: BreakLengthBounds) -> Self {
        self.break_bounds = break_bounds;
        self
    }

    /// Overrides the strategy's policy row.
    #[must_use]
    pub fn with_weights(mut self, weights: StrategyWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    fn scorer(&self) -> Scorer {
        self.weights.map_or_else(
            || Scorer::new(self.strategy),
            |weights| Scorer::with_weights(self.strategy, weights),
        )
    }
}

/// Read-only output of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Every day of the target year, annotated.
    pub days: Vec<CalendarDay>,
    /// Breaks of the final sequence, in date order.
    pub breaks: Vec<Break>,
    /// Summary counts.
    pub stats: OptimizationStats,
    /// The strategy used.
    pub strategy: OptimizationStrategy,
    /// Final strategy score.
    pub score: f64,
    /// CTO days in commitment order.
    pub commitments: Vec<Commitment>,
}

impl OptimizationResult {
    /// Returns the dates of all CTO days, in date order.
    #[must_use]
    pub fn cto_dates(&self) -> Vec<Date> {
        self.days
            .iter()
            .filter(|d| d.is_cto())
            .map(CalendarDay::date)
            .collect()
    }
}

/// Plans CTO days for a year.
///
/// # Errors
///
/// - `CoreError::InvalidBudget` if `number_of_days` is not positive
/// - `CoreError::DomainViolation` if the year is out of range
/// - `CoreError::PartialAllocation` if the year runs out of selectable
///   working days; the error carries the partial result
pub fn optimize(params: &OptimizationParams) -> Result<OptimizationResult, CoreError> {
    if params.number_of_days <= 0 {
        return Err(CoreError::InvalidBudget {
            requested: params.number_of_days,
        });
    }

    let company_days: Vec<NamedDate> = expand_company_days(&params.company_days_off);
    let days: Vec<CalendarDay> = build_year(
        params.year,
        params.weekend_days,
        &params.holidays,
        &company_days,
    )?;

    let allocator: Allocator = Allocator::new(
        days,
        params.today,
        params.number_of_days,
        params.scorer(),
        params.break_bounds,
    )?;
    let allocation: Allocation = allocator.run()?;

    let mut days: Vec<CalendarDay> = allocation.days;
    let breaks: Vec<Break> = mark_breaks(&mut days, &params.break_bounds);
    let stats: OptimizationStats = aggregate(&days, &breaks);

    info!(
        year = params.year,
        strategy = %params.strategy,
        cto_days = stats.total_cto_days,
        breaks = breaks.len(),
        days_off = stats.total_days_off,
        score = allocation.score,
        "Optimization complete"
    );

    let result: OptimizationResult = OptimizationResult {
        days,
        breaks,
        stats,
        strategy: params.strategy,
        score: allocation.score,
        commitments: allocation.commitments,
    };

    if allocation.unallocated > 0 {
        warn!(
            unallocated = allocation.unallocated,
            "Ran out of working days before the CTO budget was spent"
        );
        return Err(CoreError::PartialAllocation {
            result: Box::new(result),
            unallocated: allocation.unallocated,
        });
    }

    Ok(result)
}
