// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Break detection.
//!
//! A break is a maximal run of consecutive off days (weekend, public holiday,
//! company day off, or CTO) that is at least [`MIN_BREAK_LENGTH`] days long.
//! Shorter runs still count as days off but are not breaks.
//!
//! Breaks are always recomputed from the full day sequence. Output is a pure
//! function of the input: re-running on the same sequence yields the same
//! breaks in the same order.

use crate::error::CoreError;
use cto_planner_domain::{CalendarDay, Date};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Shortest run of off days that counts as a break.
pub const MIN_BREAK_LENGTH: usize = 3;

/// Longest break in the `LongWeekend` category by default.
pub const DEFAULT_LONG_WEEKEND_MAX: usize = 4;

/// Longest break in the `MiniBreak` category by default.
pub const DEFAULT_MINI_BREAK_MAX: usize = 6;

/// Longest break in the `WeekLong` category by default.
pub const DEFAULT_WEEK_LONG_MAX: usize = 9;

/// Length category of a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BreakCategory {
    /// 3 to 4 days by default.
    LongWeekend,
    /// 5 to 6 days by default.
    MiniBreak,
    /// 7 to 9 days by default.
    WeekLong,
    /// 10 days or more by default.
    Extended,
}

impl BreakCategory {
    /// Returns the category name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LongWeekend => "long weekend",
            Self::MiniBreak => "mini break",
            Self::WeekLong => "week-long break",
            Self::Extended => "extended vacation",
        }
    }
}

impl std::fmt::Display for BreakCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upper bounds (inclusive) of the break length categories.
///
/// Categories are contiguous: `LongWeekend` starts at [`MIN_BREAK_LENGTH`],
/// each following category starts one day after the previous maximum, and
/// `Extended` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_field_names)]
pub struct BreakLengthBounds {
    long_weekend_max: usize,
    mini_break_max: usize,
    week_long_max: usize,
}

impl BreakLengthBounds {
    /// Creates category bounds.
    ///
    /// # Arguments
    ///
    /// * `long_weekend_max` - Longest `LongWeekend` break
    /// * `mini_break_max` - Longest `MiniBreak` break
    /// * `week_long_max` - Longest `WeekLong` break
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBreakBounds` unless
    /// `MIN_BREAK_LENGTH <= long_weekend_max <= mini_break_max <= week_long_max`.
    pub const fn new(
        long_weekend_max: usize,
        mini_break_max: usize,
        week_long_max: usize,
    ) -> Result<Self, CoreError> {
        if long_weekend_max < MIN_BREAK_LENGTH
            || mini_break_max < long_weekend_max
            || week_long_max < mini_break_max
        {
            return Err(CoreError::InvalidBreakBounds {
                long_weekend_max,
                mini_break_max,
                week_long_max,
            });
        }

        Ok(Self {
            long_weekend_max,
            mini_break_max,
            week_long_max,
        })
    }

    /// Returns the longest `LongWeekend` break.
    #[must_use]
    pub const fn long_weekend_max(&self) -> usize {
        self.long_weekend_max
    }

    /// Returns the longest `MiniBreak` break.
    #[must_use]
    pub const fn mini_break_max(&self) -> usize {
        self.mini_break_max
    }

    /// Returns the longest `WeekLong` break.
    #[must_use]
    pub const fn week_long_max(&self) -> usize {
        self.week_long_max
    }

    /// Categorizes a run length.
    ///
    /// Returns `None` for runs shorter than [`MIN_BREAK_LENGTH`].
    #[must_use]
    pub const fn categorize(&self, total_days: usize) -> Option<BreakCategory> {
        if total_days < MIN_BREAK_LENGTH {
            None
        } else if total_days <= self.long_weekend_max {
            Some(BreakCategory::LongWeekend)
        } else if total_days <= self.mini_break_max {
            Some(BreakCategory::MiniBreak)
        } else if total_days <= self.week_long_max {
            Some(BreakCategory::WeekLong)
        } else {
            Some(BreakCategory::Extended)
        }
    }
}

impl Default for BreakLengthBounds {
    fn default() -> Self {
        Self {
            long_weekend_max: DEFAULT_LONG_WEEKEND_MAX,
            mini_break_max: DEFAULT_MINI_BREAK_MAX,
            week_long_max: DEFAULT_WEEK_LONG_MAX,
        }
    }
}

/// A maximal run of at least three consecutive days off.
///
/// The per-category counters describe flags, not a partition: a holiday
/// falling on a weekend counts towards both `holidays` and `weekends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// First day of the break (inclusive).
    pub start_date: Date,
    /// Last day of the break (inclusive).
    pub end_date: Date,
    /// Member days in date order.
    pub days: Vec<CalendarDay>,
    /// Number of days in the break.
    pub total_days: usize,
    /// Number of CTO days spent inside the break.
    pub cto_days: usize,
    /// Number of public holidays inside the break.
    pub holidays: usize,
    /// Number of weekend days inside the break.
    pub weekends: usize,
    /// Number of company days off inside the break.
    pub company_days_off: usize,
    /// Length category.
    pub category: BreakCategory,
}

impl Break {
    /// Returns whether `date` falls inside this break.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    fn from_run(run: &[CalendarDay], category: BreakCategory) -> Option<Self> {
        let first: &CalendarDay = run.first()?;
        let last: &CalendarDay = run.last()?;

        Some(Self {
            start_date: first.date(),
            end_date: last.date(),
            days: run.to_vec(),
            total_days: run.len(),
            cto_days: run.iter().filter(|d| d.is_cto()).count(),
            holidays: run.iter().filter(|d| d.is_public_holiday()).count(),
            weekends: run.iter().filter(|d| d.is_weekend()).count(),
            company_days_off: run.iter().filter(|d| d.is_company_day_off()).count(),
            category,
        })
    }
}

/// Finds all breaks using the default length categories.
#[must_use]
pub fn find_breaks(days: &[CalendarDay]) -> Vec<Break> {
    find_breaks_with(days, &BreakLengthBounds::default())
}

/// Finds all breaks in an ordered day sequence.
#[must_use]
pub fn find_breaks_with(days: &[CalendarDay], bounds: &BreakLengthBounds) -> Vec<Break> {
    break_spans(days, bounds)
        .into_iter()
        .filter_map(|(span, category)| Break::from_run(&days[span], category))
        .collect()
}

/// Recomputes breaks and updates every day's `is_part_of_break` flag.
///
/// Days outside every break have the flag cleared.
pub fn mark_breaks(days: &mut [CalendarDay], bounds: &BreakLengthBounds) -> Vec<Break> {
    let spans: Vec<(Range<usize>, BreakCategory)> = break_spans(days, bounds);

    for day in days.iter_mut() {
        day.set_part_of_break(false);
    }
    for (span, _) in &spans {
        for day in &mut days[span.clone()] {
            day.set_part_of_break(true);
        }
    }

    spans
        .into_iter()
        .filter_map(|(span, category)| Break::from_run(&days[span], category))
        .collect()
}

/// Single left-to-right scan returning the index range of every break.
///
/// Consecutive off days accumulate into a run; the first working day (or the
/// end of the sequence) closes it, and closed runs of at least
/// [`MIN_BREAK_LENGTH`] days are kept.
pub fn break_spans(
    days: &[CalendarDay],
    bounds: &BreakLengthBounds,
) -> Vec<(Range<usize>, BreakCategory)> {
    let mut spans: Vec<(Range<usize>, BreakCategory)> = Vec::new();
    let mut run_start: Option<usize> = None;

    for (index, day) in days.iter().enumerate() {
        match (day.is_off(), run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(start)) => {
                if let Some(category) = bounds.categorize(index - start) {
                    spans.push((start..index, category));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    let trailing: Option<(usize, BreakCategory)> = run_start
        .and_then(|start| bounds.categorize(days.len() - start).map(|category| (start, category)));
    if let Some((start, category)) = trailing {
        spans.push((start..days.len(), category));
    }

    spans
}

/// Counts weekends that were extended into a long weekend.
///
/// A weekend counts when it belongs to a break of the `LongWeekend` category
/// (3 to 4 days by default) that contains at least one weekend day.
#[must_use]
pub fn count_extended_weekends(days: &[CalendarDay]) -> usize {
    find_breaks(days)
        .iter()
        .filter(|b| b.category == BreakCategory::LongWeekend && b.weekends > 0)
        .count()
}
