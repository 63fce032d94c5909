// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Summary counts over a final day sequence.

use crate::breaks::Break;
use cto_planner_domain::CalendarDay;
use serde::{Deserialize, Serialize};

/// Aggregate counts of an optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptimizationStats {
    /// Days with a CTO day spent on them.
    pub total_cto_days: usize,
    /// Public holidays in the sequence.
    pub total_public_holidays: usize,
    /// Weekend days outside every break.
    pub total_normal_weekends: usize,
    /// Weekend days inside a break.
    pub total_extended_weekends: usize,
    /// Company days off in the sequence.
    pub total_company_days_off: usize,
    /// Distinct days off for any reason.
    pub total_days_off: usize,
}

/// Reduces a day sequence and its breaks into summary counts.
///
/// A day that is off for several reasons (a holiday on a weekend, say) is
/// counted once in `total_days_off`.
#[must_use]
pub fn aggregate(days: &[CalendarDay], breaks: &[Break]) -> OptimizationStats {
    days.iter().fold(OptimizationStats::default(), |mut stats, day| {
        if day.is_cto() {
            stats.total_cto_days += 1;
        }
        if day.is_public_holiday() {
            stats.total_public_holidays += 1;
        }
        if day.is_company_day_off() {
            stats.total_company_days_off += 1;
        }
        if day.is_weekend() {
            if breaks.iter().any(|b| b.contains(day.date())) {
                stats.total_extended_weekends += 1;
            } else {
                stats.total_normal_weekends += 1;
            }
        }
        if day.is_off() {
            stats.total_days_off += 1;
        }
        stats
    })
}
