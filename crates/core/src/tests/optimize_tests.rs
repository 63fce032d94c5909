// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::breaks::{Break, BreakCategory, BreakLengthBounds};
use crate::error::CoreError;
use crate::optimize::{OptimizationParams, OptimizationResult, optimize};
use crate::strategy::{OptimizationStrategy, Scorer};
use crate::tests::helpers::create_canada_2025_holidays;
use cto_planner_domain::{CalendarDay, CompanyDayOff, Date, DomainError, WeekendDays};
use time::macros::date;

fn create_canada_params(today: Date, number_of_days: i32) -> OptimizationParams {
    OptimizationParams::new(today, 2025, number_of_days)
        .with_holidays(create_canada_2025_holidays())
}

fn assert_result_invariants(result: &OptimizationResult, today: Date) {
    for day in &result.days {
        if day.is_cto() {
            assert!(!day.is_fixed_off(), "CTO on fixed day {}", day.date());
            assert!(day.date() >= today, "CTO before today on {}", day.date());
        }
        let in_break: bool = result.breaks.iter().any(|b| b.contains(day.date()));
        assert_eq!(day.is_part_of_break(), in_break, "flag on {}", day.date());
    }

    let off_days: usize = result.days.iter().filter(|d| d.is_off()).count();
    assert_eq!(result.stats.total_days_off, off_days);
    assert_eq!(result.stats.total_cto_days, result.cto_dates().len());
    assert_eq!(result.stats.total_cto_days, result.commitments.len());

    let expected_score: f64 = Scorer::new(result.strategy).score(&result.breaks);
    assert!((result.score - expected_score).abs() < 1e-9);
}

#[test]
fn test_rejects_non_positive_budget() {
    let params: OptimizationParams = create_canada_params(date!(2025 - 01 - 01), 0);
    assert_eq!(
        optimize(&params).unwrap_err(),
        CoreError::InvalidBudget { requested: 0 }
    );
}

#[test]
fn test_rejects_year_out_of_range() {
    let params: OptimizationParams = OptimizationParams::new(date!(2025 - 01 - 01), 1800, 3);
    let err: CoreError = optimize(&params).unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidYear(_))
    ));
}

#[test]
fn test_single_day_plan() {
    let today: Date = date!(2025 - 01 - 01);
    let result: OptimizationResult = optimize(&create_canada_params(today, 1)).unwrap();

    assert_eq!(result.days.len(), 365);
    assert_eq!(result.cto_dates(), vec![date!(2025 - 06 - 30)]);
    assert_eq!(result.stats.total_public_holidays, 10);
    assert_eq!(result.strategy, OptimizationStrategy::Balanced);

    let canada_day: &Break = result
        .breaks
        .iter()
        .find(|b| b.contains(date!(2025 - 07 - 01)))
        .unwrap();
    assert_eq!(canada_day.start_date, date!(2025 - 06 - 28));
    assert_eq!(canada_day.end_date, date!(2025 - 07 - 01));
    assert_eq!(canada_day.cto_days, 1);
    assert_eq!(canada_day.category, BreakCategory::LongWeekend);

    assert_result_invariants(&result, today);
}

#[test]
fn test_five_day_plan() {
    let today: Date = date!(2025 - 01 - 01);
    let result: OptimizationResult = optimize(&create_canada_params(today, 5)).unwrap();

    assert_eq!(result.stats.total_cto_days, 5);
    assert_eq!(result.stats.total_public_holidays, 10);
    assert_eq!(result.breaks.len(), 8);
    assert_eq!(
        result.cto_dates(),
        vec![
            date!(2025 - 06 - 26),
            date!(2025 - 06 - 27),
            date!(2025 - 06 - 30),
            date!(2025 - 12 - 23),
            date!(2025 - 12 - 24),
        ]
    );

    let mini_breaks: Vec<(Date, Date)> = result
        .breaks
        .iter()
        .filter(|b| b.category == BreakCategory::MiniBreak)
        .map(|b| (b.start_date, b.end_date))
        .collect();
    assert_eq!(
        mini_breaks,
        vec![
            (date!(2025 - 06 - 26), date!(2025 - 07 - 01)),
            (date!(2025 - 12 - 23), date!(2025 - 12 - 28)),
        ]
    );

    // 104 weekend days in 2025, split by break membership.
    assert_eq!(
        result.stats.total_normal_weekends + result.stats.total_extended_weekends,
        104
    );
    // 8 holiday weekends, two weekend days each.
    assert_eq!(result.stats.total_extended_weekends, 16);

    assert_result_invariants(&result, today);
}

#[test]
fn test_partial_allocation_keeps_result() {
    let today: Date = date!(2025 - 12 - 29);
    let err: CoreError = optimize(&create_canada_params(today, 5)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Only 3 CTO days could be placed; 2 left unallocated"
    );
    let CoreError::PartialAllocation {
        result,
        unallocated,
    } = err
    else {
        panic!("expected a partial allocation");
    };
    assert_eq!(unallocated, 2);
    assert_eq!(
        result.cto_dates(),
        vec![
            date!(2025 - 12 - 29),
            date!(2025 - 12 - 30),
            date!(2025 - 12 - 31),
        ]
    );

    let last: &Break = result.breaks.last().unwrap();
    assert_eq!(last.start_date, date!(2025 - 12 - 25));
    assert_eq!(last.end_date, date!(2025 - 12 - 31));
    assert_eq!(last.category, BreakCategory::WeekLong);

    assert_result_invariants(&result, today);
}

#[test]
fn test_today_after_target_year() {
    let err: CoreError = optimize(&create_canada_params(date!(2026 - 01 - 01), 4)).unwrap_err();

    let result: &OptimizationResult = err.partial_result().unwrap();
    assert_eq!(result.stats.total_cto_days, 0);
    assert!(result.commitments.is_empty());
    assert!(matches!(
        err,
        CoreError::PartialAllocation { unallocated: 4, .. }
    ));
}

#[test]
fn test_extended_vacations_builds_one_long_break() {
    let today: Date = date!(2025 - 01 - 01);
    let params: OptimizationParams = OptimizationParams::new(today, 2025, 10)
        .with_strategy(OptimizationStrategy::ExtendedVacations);
    let result: OptimizationResult = optimize(&params).unwrap();

    assert_eq!(result.breaks.len(), 1);
    let vacation: &Break = &result.breaks[0];
    assert_eq!(vacation.start_date, date!(2025 - 01 - 01));
    assert_eq!(vacation.end_date, date!(2025 - 01 - 14));
    assert_eq!(vacation.total_days, 14);
    assert_eq!(vacation.cto_days, 10);
    assert_eq!(vacation.category, BreakCategory::Extended);

    assert_result_invariants(&result, today);
}

#[test]
fn test_company_day_off_is_not_a_candidate() {
    let today: Date = date!(2025 - 01 - 01);
    let params: OptimizationParams = create_canada_params(today, 1).with_company_days_off(vec![
        CompanyDayOff::single(date!(2025 - 06 - 30), "Summer shutdown"),
    ]);
    let result: OptimizationResult = optimize(&params).unwrap();

    // Canada Day is already bridged, so the Friday before grows it.
    assert_eq!(result.cto_dates(), vec![date!(2025 - 06 - 27)]);
    assert_eq!(result.stats.total_company_days_off, 1);

    let bridged: &CalendarDay = result
        .days
        .iter()
        .find(|d| d.date() == date!(2025 - 06 - 30))
        .unwrap();
    assert_eq!(bridged.company_day_name(), Some("Summer shutdown"));
    assert!(bridged.is_part_of_break());

    assert_result_invariants(&result, today);
}

#[test]
fn test_weekly_company_days_expand() {
    let today: Date = date!(2025 - 01 - 01);
    let summer_fridays: CompanyDayOff = CompanyDayOff::weekly(
        time::Weekday::Friday,
        date!(2025 - 07 - 01),
        date!(2025 - 07 - 31),
        "Summer Friday",
    )
    .unwrap();
    let params: OptimizationParams =
        create_canada_params(today, 1).with_company_days_off(vec![summer_fridays]);
    let result: OptimizationResult = optimize(&params).unwrap();

    assert_eq!(result.stats.total_company_days_off, 4);
    assert_result_invariants(&result, today);
}

#[test]
fn test_custom_weekend() {
    let today: Date = date!(2025 - 01 - 01);
    let params: OptimizationParams = OptimizationParams::new(today, 2025, 1)
        .with_strategy(OptimizationStrategy::LongWeekends)
        .with_weekend_days(WeekendDays::from_indices(&[5, 6]).unwrap());
    let result: OptimizationResult = optimize(&params).unwrap();

    // Friday and Saturday off: the Thursday before makes the first long weekend.
    assert_eq!(result.cto_dates(), vec![date!(2025 - 01 - 02)]);
    assert_result_invariants(&result, today);
}

#[test]
fn test_every_strategy_spends_the_budget() {
    let today: Date = date!(2025 - 01 - 01);
    for strategy in OptimizationStrategy::ALL {
        let params: OptimizationParams = create_canada_params(today, 12).with_strategy(strategy);
        let result: OptimizationResult = optimize(&params).unwrap();

        assert_eq!(result.stats.total_cto_days, 12, "strategy {strategy}");
        assert_result_invariants(&result, today);
    }
}

#[test]
fn test_custom_break_bounds() {
    assert!(matches!(
        BreakLengthBounds::new(2, 1, 0),
        Err(CoreError::InvalidBreakBounds { .. })
    ));

    let today: Date = date!(2025 - 01 - 01);
    let params: OptimizationParams = create_canada_params(today, 1)
        .with_break_bounds(BreakLengthBounds::new(3, 5, 8).unwrap());
    let result: OptimizationResult = optimize(&params).unwrap();

    // June 28 to July 1 is a mini break once long weekends end at three days.
    let canada_day: &Break = result
        .breaks
        .iter()
        .find(|b| b.contains(date!(2025 - 07 - 01)))
        .unwrap();
    assert_eq!(canada_day.total_days, 4);
    assert_eq!(canada_day.category, BreakCategory::MiniBreak);
    assert_result_invariants(&result, today);
}

#[test]
fn test_optimize_is_deterministic() {
    let params: OptimizationParams = create_canada_params(date!(2025 - 04 - 01), 7)
        .with_strategy(OptimizationStrategy::WeekLongBreaks);

    assert_eq!(optimize(&params).unwrap(), optimize(&params).unwrap());
}

#[test]
fn test_result_serializes_to_json() {
    let result: OptimizationResult =
        optimize(&create_canada_params(date!(2025 - 01 - 01), 1)).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["strategy"], "balanced");
    assert_eq!(json["stats"]["total_cto_days"], 1);
    assert_eq!(json["days"].as_array().unwrap().len(), 365);
}
