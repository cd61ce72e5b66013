use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{Category, ExtractedRecommendation};

/// Line marker announcing the chosen tier in an advisory reply.
pub const BEST_CHOICE_MARKER: &str = "BEST CHOICE:";
/// Line marker carrying the summed activity cost.
pub const TOTAL_ACTIVITIES_MARKER: &str = "TOTAL ACTIVITIES:";

const ACTIVITY_DETAILS: &str = "Activity plan created";

// First digit run after a dollar sign. Thousands separators are not
// supported: "$1,850" yields 1.
static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)").expect("dollar amount pattern"));
static NIGHTS_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"nights = \$(\d+)").expect("nights total pattern"));

/// Recover the recommended option and its cost from one advisory reply.
///
/// Total contract: never panics and never errors. A reply the category rules
/// cannot parse degrades to [`ExtractedRecommendation::sentinel`] so that one
/// malformed consultation cannot abort the whole planning run.
pub fn extract_recommendation(
    reply: &str,
    category: Category,
    nights: u32,
) -> ExtractedRecommendation {
    let lines: Vec<&str> = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let label = recommendation_label(&lines);

    let extracted = match category {
        Category::Flight => extract_flight(&lines, &label),
        Category::Hotel => extract_hotel(&lines, &label, nights),
        Category::Activity => extract_activity(&lines),
    };

    extracted.unwrap_or_else(|| {
        debug!(
            target: "trip_planner::extract",
            category = category.as_str(),
            "no usable recommendation in reply, degrading to sentinel"
        );
        ExtractedRecommendation::sentinel()
    })
}

/// The tier name declared on the `BEST CHOICE:` line, trimmed and lowercased.
/// Empty when the marker line is absent.
fn recommendation_label(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(BEST_CHOICE_MARKER))
        .map(|rest| rest.trim().to_lowercase())
        .unwrap_or_default()
}

fn dollar_amount(line: &str) -> Option<u32> {
    DOLLAR_AMOUNT
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

fn nights_total(line: &str) -> Option<u32> {
    NIGHTS_TOTAL
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

/// First line that names the recommended tier and carries a `$` amount.
fn extract_flight(lines: &[&str], label: &str) -> Option<ExtractedRecommendation> {
    if label.is_empty() {
        return None;
    }
    lines.iter().find_map(|line| {
        if !line.to_lowercase().contains(label) {
            return None;
        }
        let cost = dollar_amount(line)?;
        Some(ExtractedRecommendation::new(cost, *line))
    })
}

/// Like flights, but the multi-night total ("N nights = $X") wins over the
/// bare per-night amount; a per-night amount is multiplied out.
fn extract_hotel(lines: &[&str], label: &str, nights: u32) -> Option<ExtractedRecommendation> {
    if label.is_empty() {
        return None;
    }
    let line = lines
        .iter()
        .find(|line| line.to_lowercase().contains(label) && line.contains('$'))?;
    let cost = nights_total(line)
        .or_else(|| dollar_amount(line).and_then(|per_night| per_night.checked_mul(nights)))?;
    Some(ExtractedRecommendation::new(cost, *line))
}

/// The recommendation label is ignored for activities; only the summed
/// `TOTAL ACTIVITIES:` line matters.
fn extract_activity(lines: &[&str]) -> Option<ExtractedRecommendation> {
    lines
        .iter()
        .filter(|line| line.starts_with(TOTAL_ACTIVITIES_MARKER))
        .find_map(|line| dollar_amount(line))
        .map(|cost| ExtractedRecommendation::new(cost, ACTIVITY_DETAILS))
}
