// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Greedy CTO allocation.
//!
//! The allocator owns the day sequence while it selects. Each iteration it
//! evaluates every remaining candidate as a what-if (flip the CTO flag,
//! recompute breaks, score, flip back), commits the candidate with the best
//! marginal gain, and spends one day of budget.
//!
//! ## Invariants
//!
//! - Lifecycle is `Idle` → `Selecting` → `Terminal`; no mutation after `Terminal`
//! - Candidates are working days on or after `today`
//! - Ties on gain go to the earliest date
//! - Allocation is non-backtracking: a committed day is never revisited
//! - No randomness: identical inputs commit identical days in identical order

use crate::breaks::{BreakLengthBounds, break_spans};
use crate::error::CoreError;
use crate::strategy::Scorer;
use cto_planner_domain::{CalendarDay, Date};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Lifecycle state of an allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocatorState {
    /// Constructed; nothing committed yet.
    Idle,
    /// Committing CTO days.
    Selecting,
    /// Budget spent or candidates exhausted. The sequence is frozen.
    Terminal,
}

/// One committed CTO day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    /// The date the CTO day was spent on.
    pub date: Date,
    /// Score improvement gained by this commitment.
    pub gain: f64,
    /// Score after this commitment.
    pub score: f64,
}

/// Terminal output of an allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// The final day sequence.
    pub days: Vec<CalendarDay>,
    /// Commitments in the order they were made.
    pub commitments: Vec<Commitment>,
    /// Final score.
    pub score: f64,
    /// Budget left when the candidates ran out (0 on full allocation).
    pub unallocated: u32,
}

/// Greedy, non-backtracking CTO allocator.
#[derive(Debug, Clone)]
pub struct Allocator {
    days: Vec<CalendarDay>,
    today: Date,
    budget: u32,
    scorer: Scorer,
    bounds: BreakLengthBounds,
    state: AllocatorState,
    current_score: f64,
    commitments: Vec<Commitment>,
}

impl Allocator {
    /// Creates an allocator over a classified day sequence.
    ///
    /// # Arguments
    ///
    /// * `days` - Classified days in date order, no CTO flags set
    /// * `today` - Days before this date are never selected
    /// * `number_of_days` - The CTO budget
    /// * `scorer` - Ranks break layouts
    /// * `bounds` - Break length categories
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBudget` if `number_of_days` is not positive.
    pub fn new(
        days: Vec<CalendarDay>,
        today: Date,
        number_of_days: i32,
        scorer: Scorer,
        bounds: BreakLengthBounds,
    ) -> Result<Self, CoreError> {
        let budget: u32 = match u32::try_from(number_of_days) {
            Ok(budget) if budget > 0 => budget,
            _ => {
                return Err(CoreError::InvalidBudget {
                    requested: number_of_days,
                });
            }
        };

        let mut allocator: Self = Self {
            days,
            today,
            budget,
            scorer,
            bounds,
            state: AllocatorState::Idle,
            current_score: 0.0,
            commitments: Vec::new(),
        };
        allocator.current_score = allocator.layout_score();

        Ok(allocator)
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> AllocatorState {
        self.state
    }

    /// Returns the budget not yet spent.
    #[must_use]
    pub const fn remaining_budget(&self) -> u32 {
        self.budget
    }

    /// Returns the committed score.
    #[must_use]
    pub const fn current_score(&self) -> f64 {
        self.current_score
    }

    /// Returns the read-only day sequence.
    #[must_use]
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the commitments made so far, in order.
    #[must_use]
    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    /// Returns the indices of every selectable day, in date order.
    #[must_use]
    pub fn candidates(&self) -> Vec<usize> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, day)| day.is_working_day() && day.date() >= self.today)
            .map(|(index, _)| index)
            .collect()
    }

    /// Performs one selection iteration.
    ///
    /// Returns the commitment made, or `None` once the allocator is terminal
    /// (budget spent or no candidate left).
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate unexpectedly refuses the CTO flag.
    pub fn step(&mut self) -> Result<Option<Commitment>, CoreError> {
        if self.state == AllocatorState::Terminal {
            return Ok(None);
        }
        self.state = AllocatorState::Selecting;

        if self.budget == 0 {
            self.state = AllocatorState::Terminal;
            return Ok(None);
        }

        let mut best: Option<(usize, f64)> = None;
        for index in self.candidates() {
            let candidate_score: f64 = self.evaluate(index)?;
            // Strict comparison keeps the earliest date on ties.
            if best.is_none_or(|(_, best_score)| candidate_score > best_score) {
                best = Some((index, candidate_score));
            }
        }

        let Some((index, new_score)) = best else {
            debug!(
                remaining_budget = self.budget,
                "No CTO candidates left; stopping early"
            );
            self.state = AllocatorState::Terminal;
            return Ok(None);
        };

        self.days[index].mark_cto()?;
        let commitment: Commitment = Commitment {
            date: self.days[index].date(),
            gain: new_score - self.current_score,
            score: new_score,
        };
        debug!(
            date = %commitment.date,
            gain = commitment.gain,
            score = commitment.score,
            "Committed CTO day"
        );

        self.current_score = new_score;
        self.commitments.push(commitment);
        self.budget -= 1;
        if self.budget == 0 {
            self.state = AllocatorState::Terminal;
        }

        Ok(Some(commitment))
    }

    /// Runs to completion and hands out the frozen sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate unexpectedly refuses the CTO flag.
    pub fn run(mut self) -> Result<Allocation, CoreError> {
        while self.step()?.is_some() {}

        Ok(Allocation {
            days: self.days,
            commitments: self.commitments,
            score: self.current_score,
            unallocated: self.budget,
        })
    }

    /// Scores the current layout from break spans alone.
    ///
    /// Equal to scoring the detected breaks, without materializing them.
    fn layout_score(&self) -> f64 {
        break_spans(&self.days, &self.bounds)
            .into_iter()
            .map(|(span, category)| self.scorer.score_break(span.len(), category))
            .sum()
    }

    /// Scores the layout obtained by spending a CTO day on `index`.
    ///
    /// The flag is reverted before returning.
    fn evaluate(&mut self, index: usize) -> Result<f64, CoreError> {
        self.days[index].mark_cto()?;
        let candidate_score: f64 = self.layout_score();
        self.days[index].clear_cto();

        trace!(
            date = %self.days[index].date(),
            candidate_score,
            "Evaluated CTO candidate"
        );

        Ok(candidate_score)
    }
}
