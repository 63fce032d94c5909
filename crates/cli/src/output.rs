// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain text rendering of a planning response.

use std::fmt;

use cto_planner_api::{BreakInfo, OptimizeResponse};

fn describe_break(found: &BreakInfo) -> String {
    let mut parts: Vec<String> = Vec::new();
    if found.cto_days > 0 {
        parts.push(format!("{} CTO", found.cto_days));
    }
    if found.holidays > 0 {
        parts.push(format!("{} holiday", found.holidays));
    }
    if found.company_days_off > 0 {
        parts.push(format!("{} company", found.company_days_off));
    }
    if found.weekends > 0 {
        parts.push(format!("{} weekend", found.weekends));
    }

    format!(
        "{} to {}  {:>2} days  {} ({})",
        found.start_date,
        found.end_date,
        found.total_days,
        found.category,
        parts.join(", ")
    )
}

/// Plain text view of a response.
struct TextReport<'a>(&'a OptimizeResponse);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response: &OptimizeResponse = self.0;

        writeln!(
            f,
            "CTO plan for {} ({} strategy, {} days requested)",
            response.year, response.strategy, response.number_of_days
        )?;

        writeln!(f, "\nCTO days:")?;
        if response.cto_dates.is_empty() {
            writeln!(f, "  none")?;
        }
        for date in &response.cto_dates {
            writeln!(f, "  {date}")?;
        }

        writeln!(f, "\nBreaks:")?;
        if response.breaks.is_empty() {
            writeln!(f, "  none")?;
        }
        for found in &response.breaks {
            writeln!(f, "  {}", describe_break(found))?;
        }

        writeln!(f, "\nStats:")?;
        let rows: [(&str, usize); 6] = [
            ("CTO days", response.stats.total_cto_days),
            ("Public holidays", response.stats.total_public_holidays),
            ("Company days off", response.stats.total_company_days_off),
            ("Weekend days outside breaks", response.stats.total_normal_weekends),
            ("Weekend days inside breaks", response.stats.total_extended_weekends),
            ("Total days off", response.stats.total_days_off),
        ];
        for (label, value) in rows {
            writeln!(f, "  {label:<28} {value}")?;
        }

        if !response.warnings.is_empty() {
            writeln!(f, "\nWarnings:")?;
            for warning in &response.warnings {
                writeln!(f, "  {warning}")?;
            }
        }

        Ok(())
    }
}

/// Renders the CTO dates, breaks, statistics and warnings of a response.
pub fn render_text(response: &OptimizeResponse) -> String {
    TextReport(response).to_string()
}
