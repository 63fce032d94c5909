// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, BreakInfo, CompanyDayInput, HolidayInput, OptimizeRequest, OptimizeResponse,
    optimize_request,
};

use super::helpers::{create_test_today, create_valid_request};

fn assert_invalid_field(result: Result<OptimizeResponse, ApiError>, expected_field: &str) {
    match result.unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected invalid input for {expected_field}, got {other:?}"),
    }
}

// ============================================================================
// Successful planning
// ============================================================================

#[test]
fn test_single_day_request() {
    let response: OptimizeResponse =
        optimize_request(&create_valid_request(1), create_test_today()).unwrap();

    assert_eq!(response.year, 2025);
    assert_eq!(response.strategy, "balanced");
    assert_eq!(response.number_of_days, 1);
    assert_eq!(response.unallocated_days, 0);
    assert_eq!(response.cto_dates, vec![String::from("2025-06-30")]);
    assert_eq!(response.stats.total_public_holidays, 10);
    assert_eq!(response.stats.total_cto_days, 1);
    assert_eq!(response.days.len(), 365);
    assert!(response.warnings.is_empty());

    let canada_day: &BreakInfo = response
        .breaks
        .iter()
        .find(|b| b.start_date == "2025-06-28")
        .unwrap();
    assert_eq!(canada_day.end_date, "2025-07-01");
    assert_eq!(canada_day.category, "long weekend");
}

#[test]
fn test_five_day_request_extends_weekends() {
    let response: OptimizeResponse =
        optimize_request(&create_valid_request(5), create_test_today()).unwrap();

    assert_eq!(response.stats.total_cto_days, 5);
    assert_eq!(response.commitments.len(), 5);
    assert_eq!(response.commitments[0].date, "2025-06-30");
    assert!(
        response
            .days
            .iter()
            .any(|d| d.is_weekend && d.is_part_of_break)
    );
}

#[test]
fn test_year_defaults_to_today() {
    let request: OptimizeRequest = OptimizeRequest {
        year: None,
        ..create_valid_request(1)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();
    assert_eq!(response.year, 2025);
}

#[test]
fn test_request_today_overrides_clock() {
    let request: OptimizeRequest = OptimizeRequest {
        today: Some(String::from("2025-07-02")),
        ..create_valid_request(1)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();
    assert_eq!(response.cto_dates, vec![String::from("2025-12-24")]);
}

#[test]
fn test_strategy_is_parsed() {
    let request: OptimizeRequest = OptimizeRequest {
        strategy: Some(String::from("extended_vacations")),
        ..create_valid_request(10)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();

    assert_eq!(response.strategy, "extended-vacations");
    assert_eq!(response.stats.total_cto_days, 10);
}

#[test]
fn test_company_day_off_is_applied() {
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![CompanyDayInput::single("2025-06-30", "Summer shutdown")],
        ..create_valid_request(1)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();

    assert_eq!(response.stats.total_company_days_off, 1);
    assert_eq!(response.cto_dates, vec![String::from("2025-06-27")]);
}

#[test]
fn test_weekly_company_days_are_expanded() {
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![CompanyDayInput::weekly(
            "fri",
            "2025-07-01",
            "2025-07-31",
            "Summer Friday",
        )],
        ..create_valid_request(1)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();
    assert_eq!(response.stats.total_company_days_off, 4);
}

#[test]
fn test_partial_allocation_is_a_warning() {
    let request: OptimizeRequest = OptimizeRequest {
        today: Some(String::from("2025-12-29")),
        ..create_valid_request(5)
    };
    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();

    assert_eq!(response.unallocated_days, 2);
    assert_eq!(response.cto_dates.len(), 3);
    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].starts_with("Only 3 of 5 CTO days could be placed"));
}

#[test]
fn test_holidays_outside_year_are_reported() {
    let mut request: OptimizeRequest = create_valid_request(1);
    request
        .holidays
        .push(HolidayInput::new("2026-01-01", "New Year's Day"));

    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();

    assert_eq!(response.stats.total_public_holidays, 10);
    assert_eq!(
        response.warnings,
        vec![String::from(
            "1 holiday(s) outside 2025 ignored: 2026-01-01"
        )]
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_budget_is_rejected() {
    let err: ApiError = optimize_request(&create_valid_request(0), create_test_today()).unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("number_of_days"),
            message: String::from("number of CTO days must be greater than 0 (got 0)"),
        }
    );
}

#[test]
fn test_negative_budget_is_rejected() {
    assert_invalid_field(
        optimize_request(&create_valid_request(-2), create_test_today()),
        "number_of_days",
    );
}

#[test]
fn test_malformed_today_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        today: Some(String::from("tomorrow")),
        ..create_valid_request(1)
    };
    assert_invalid_field(optimize_request(&request, create_test_today()), "today");
}

#[test]
fn test_year_out_of_range_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        year: Some(1800),
        ..create_valid_request(1)
    };
    assert_invalid_field(optimize_request(&request, create_test_today()), "year");
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        strategy: Some(String::from("sabbatical")),
        ..create_valid_request(1)
    };
    assert_invalid_field(optimize_request(&request, create_test_today()), "strategy");
}

#[test]
fn test_invalid_weekend_index_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        weekend_days: Some(vec![0, 7]),
        ..create_valid_request(1)
    };
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "weekend_days",
    );
}

#[test]
fn test_malformed_holiday_date_is_rejected() {
    let mut request: OptimizeRequest = create_valid_request(1);
    request.holidays[1].date = String::from("2025-02-30");
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "holidays[1].date",
    );
}

#[test]
fn test_blank_holiday_name_is_rejected() {
    let mut request: OptimizeRequest = create_valid_request(1);
    request.holidays[0].name = String::from("   ");
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "holidays[0].name",
    );
}

#[test]
fn test_company_day_needs_date_or_weekday() {
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![CompanyDayInput {
            name: String::from("Offsite"),
            ..CompanyDayInput::default()
        }],
        ..create_valid_request(1)
    };
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "company_days_off[0].date",
    );
}

#[test]
fn test_weekly_company_day_needs_end_date() {
    let mut entry: CompanyDayInput =
        CompanyDayInput::weekly("Friday", "2025-07-01", "2025-07-31", "Summer Friday");
    entry.end_date = None;
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![entry],
        ..create_valid_request(1)
    };
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "company_days_off[0].end_date",
    );
}

#[test]
fn test_reversed_recurrence_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![CompanyDayInput::weekly(
            "Friday",
            "2025-07-31",
            "2025-07-01",
            "Summer Friday",
        )],
        ..create_valid_request(1)
    };
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "company_days_off[0].end_date",
    );
}

#[test]
fn test_unknown_weekday_is_rejected() {
    let request: OptimizeRequest = OptimizeRequest {
        company_days_off: vec![CompanyDayInput::weekly(
            "Caturday",
            "2025-07-01",
            "2025-07-31",
            "Summer Friday",
        )],
        ..create_valid_request(1)
    };
    assert_invalid_field(
        optimize_request(&request, create_test_today()),
        "company_days_off[0].weekday",
    );
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_request_defaults_from_json() {
    let request: OptimizeRequest = serde_json::from_str(r#"{ "number_of_days": 3 }"#).unwrap();
    assert_eq!(request, OptimizeRequest::new(3));
}

#[test]
fn test_request_from_json_with_calendars() {
    let json: &str = r#"{
        "number_of_days": 2,
        "strategy": "long-weekends",
        "year": 2025,
        "holidays": [{ "date": "2025-07-01", "name": "Canada Day" }],
        "company_days_off": [
            { "name": "Shutdown", "date": "2025-12-24" },
            { "name": "Summer Friday", "weekday": "friday", "start_date": "2025-08-01", "end_date": "2025-08-31" }
        ],
        "weekend_days": [0, 6]
    }"#;
    let request: OptimizeRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.company_days_off.len(), 2);
    assert_eq!(request.company_days_off[1].weekday.as_deref(), Some("friday"));

    let response: OptimizeResponse = optimize_request(&request, create_test_today()).unwrap();
    assert_eq!(response.strategy, "long-weekends");
    // Shutdown plus five Fridays in August 2025
    assert_eq!(response.stats.total_company_days_off, 6);
}

#[test]
fn test_response_serializes_iso_dates() {
    let response: OptimizeResponse =
        optimize_request(&create_valid_request(1), create_test_today()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["cto_dates"][0], "2025-06-30");
    assert_eq!(json["days"][0]["date"], "2025-01-01");
    assert_eq!(json["days"][0]["weekday"], "Wednesday");
    assert_eq!(json["days"][0]["holiday_name"], "New Year's Day");
    assert_eq!(json["unallocated_days"], 0);
}
