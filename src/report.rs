//! Human-readable rendering of a finished plan.

use crate::types::{TripPlanResult, TripRequest};

/// Format a whole-dollar figure with thousands separators, e.g. `$3,500`.
pub fn format_usd(amount: f64) -> String {
    format!("${}", group_thousands(amount.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render the trip summary shown to the user. Pure function of the request
/// and the reconciled result; printing is the caller's job.
pub fn trip_summary(request: &TripRequest, result: &TripPlanResult) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(50));
    lines.push("TRIP SUMMARY".to_string());
    lines.push("=".repeat(50));
    lines.push(format!("{} → {}", request.origin(), request.destination()));
    lines.push(format!(
        "{} nights - {} budget",
        request.nights(),
        format_usd(request.budget())
    ));

    lines.push(String::new());
    lines.push(format!("Flight:     {}", result.flight_recommendation));
    lines.push(format!("Hotel:      {}", result.hotel_recommendation));
    lines.push(format!("Activities: {}", result.activity_recommendation));

    lines.push(String::new());
    lines.push("COST BREAKDOWN:".to_string());
    lines.push(format!("   Flights:    {}", format_usd(result.flight_cost as f64)));
    lines.push(format!("   Hotels:     {}", format_usd(result.hotel_cost as f64)));
    lines.push(format!("   Activities: {}", format_usd(result.activity_cost as f64)));
    lines.push("   ──────────────────────".to_string());
    lines.push(format!("   Total:      {}", format_usd(result.total_cost as f64)));
    lines.push(format!("   Remaining:  {}", format_usd(result.remaining_budget)));

    lines.push(String::new());
    if result.within_budget {
        lines.push("TRIP FITS BUDGET!".to_string());
        lines.push(format!(
            "Ready for your {}-night adventure!",
            request.nights()
        ));
    } else {
        let over_budget = result.total_cost as f64 - request.budget();
        lines.push(format!("Over budget by {}", format_usd(over_budget)));
        lines.push("Consider reducing accommodation or activities".to_string());
    }
    lines.push("=".repeat(50));

    lines.join("\n")
}
