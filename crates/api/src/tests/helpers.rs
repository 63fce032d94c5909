// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Date;
use time::macros::date;

use crate::{HolidayInput, OptimizeRequest};

pub const CANADA_2025_CSV: &str = "\
Date,Name
2025-01-01,New Year's Day
2025-02-17,Family Day
2025-04-18,Good Friday
2025-05-19,Victoria Day
2025-07-01,Canada Day
2025-08-04,Civic Holiday
2025-09-01,Labour Day
2025-10-13,Thanksgiving
2025-12-25,Christmas Day
2025-12-26,Boxing Day
";

pub fn create_test_today() -> Date {
    date!(2025 - 01 - 01)
}

pub fn create_canada_2025_holidays() -> Vec<HolidayInput> {
    vec![
        HolidayInput::new("2025-01-01", "New Year's Day"),
        HolidayInput::new("2025-02-17", "Family Day"),
        HolidayInput::new("2025-04-18", "Good Friday"),
        HolidayInput::new("2025-05-19", "Victoria Day"),
        HolidayInput::new("2025-07-01", "Canada Day"),
        HolidayInput::new("2025-08-04", "Civic Holiday"),
        HolidayInput::new("2025-09-01", "Labour Day"),
        HolidayInput::new("2025-10-13", "Thanksgiving"),
        HolidayInput::new("2025-12-25", "Christmas Day"),
        HolidayInput::new("2025-12-26", "Boxing Day"),
    ]
}

pub fn create_valid_request(number_of_days: i32) -> OptimizeRequest {
    OptimizeRequest {
        year: Some(2025),
        holidays: create_canada_2025_holidays(),
        ..OptimizeRequest::new(number_of_days)
    }
}
