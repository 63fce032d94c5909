// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cto_planner_domain::{CalendarDay, Date, NamedDate, WeekendDays, build_year};
use time::macros::date;

/// Canadian statutory holidays for 2025.
pub fn create_canada_2025_holidays() -> Vec<NamedDate> {
    vec![
        NamedDate::new(date!(2025 - 01 - 01), "New Year's Day"),
        NamedDate::new(date!(2025 - 02 - 17), "Family Day"),
        NamedDate::new(date!(2025 - 04 - 18), "Good Friday"),
        NamedDate::new(date!(2025 - 05 - 19), "Victoria Day"),
        NamedDate::new(date!(2025 - 07 - 01), "Canada Day"),
        NamedDate::new(date!(2025 - 08 - 04), "Civic Holiday"),
        NamedDate::new(date!(2025 - 09 - 01), "Labour Day"),
        NamedDate::new(date!(2025 - 10 - 13), "Thanksgiving"),
        NamedDate::new(date!(2025 - 12 - 25), "Christmas Day"),
        NamedDate::new(date!(2025 - 12 - 26), "Boxing Day"),
    ]
}

/// The classified 2025 calendar with Canadian holidays.
pub fn create_canada_2025_days() -> Vec<CalendarDay> {
    build_year(
        2025,
        WeekendDays::default(),
        &create_canada_2025_holidays(),
        &[],
    )
    .unwrap()
}

/// Builds a sequence of consecutive days starting at `start`.
///
/// Each entry of `pattern` describes one day: `'W'` weekend, `'H'` holiday,
/// `'C'` company day off, `'T'` CTO, anything else a working day.
pub fn create_days(start: Date, pattern: &str) -> Vec<CalendarDay> {
    let mut days: Vec<CalendarDay> = Vec::new();
    let mut date: Date = start;

    for code in pattern.chars() {
        let day: CalendarDay = match code {
            'W' => CalendarDay::new(date).with_weekend(true),
            'H' => CalendarDay::new(date).with_holiday("Holiday"),
            'C' => CalendarDay::new(date).with_company_day_off("Company day"),
            'T' => {
                let mut day: CalendarDay = CalendarDay::new(date);
                day.mark_cto().unwrap();
                day
            }
            _ => CalendarDay::new(date),
        };
        days.push(day);
        date = date.next_day().unwrap();
    }

    days
}
