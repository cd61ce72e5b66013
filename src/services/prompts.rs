use std::fmt::Display;

use crate::report::format_usd;
use crate::types::{Category, TripRequest};

/// Render candidate options as a numbered, human-readable block.
pub fn format_options<T: Display>(options: &[T]) -> String {
    if options.is_empty() {
        return "No data available".to_string();
    }

    let mut formatted = String::from("Available Options:\n");
    for (idx, option) in options.iter().enumerate() {
        formatted.push_str(&format!("{}. {}\n", idx + 1, option));
    }
    formatted
}

/// Role instruction text for one category's advisory agent.
///
/// The instructions mandate the literal reply layout the extractor depends
/// on; conformance is advisory only and non-conformant replies degrade to
/// the zero-cost sentinel downstream.
pub fn role_instructions(category: Category, request: &TripRequest) -> String {
    match category {
        Category::Flight => flight_instructions(request),
        Category::Hotel => hotel_instructions(request),
        Category::Activity => activity_instructions(request),
    }
}

/// Short task line sent alongside the numbered options.
pub fn consultation_task(category: Category, request: &TripRequest) -> String {
    match category {
        Category::Flight => format!(
            "Please recommend flights from {} to {}",
            request.origin(),
            request.destination()
        ),
        Category::Hotel => format!(
            "Please recommend hotels in {} for {} nights",
            request.destination(),
            request.nights()
        ),
        Category::Activity => format!(
            "Please create a {}-day activity plan for {}",
            request.nights(),
            request.destination()
        ),
    }
}

/// Full user message for one consultation: task line plus numbered options.
pub fn user_message<T: Display>(category: Category, request: &TripRequest, options: &[T]) -> String {
    format!(
        "{}\n\n{}",
        consultation_task(category, request),
        format_options(options)
    )
}

fn flight_instructions(request: &TripRequest) -> String {
    format!(
        "You are a flight booking specialist for trips from {origin} to {destination}.\n\
         Budget: {budget}\n\n\
         When given flight options, analyze them and respond in this EXACT format:\n\n\
         FLIGHT RECOMMENDATIONS:\n\
         Premium: [Airline] - $[price] ([duration], [stops])\n\
         Standard: [Airline] - $[price] ([duration], [stops])\n\
         Budget: [Airline] - $[price] ([duration], [stops])\n\n\
         BEST CHOICE: [Premium/Standard/Budget]\n\
         REASON: [Brief explanation]\n\n\
         Always recommend the option that best balances price, duration, and convenience within budget.",
        origin = request.origin(),
        destination = request.destination(),
        budget = format_usd(request.budget()),
    )
}

fn hotel_instructions(request: &TripRequest) -> String {
    format!(
        "You are a hotel booking specialist for {destination}.\n\
         Trip length: {nights} nights\n\
         Total budget: {budget}\n\n\
         When given hotel options, analyze them and respond in this EXACT format:\n\n\
         HOTEL RECOMMENDATIONS:\n\
         Luxury: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\
         Mid-Range: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\
         Budget: [Hotel Name] - $[price per night] ([location], {nights} nights = $[total])\n\n\
         BEST CHOICE: [Luxury/Mid-Range/Budget]\n\
         REASON: [Brief explanation considering location and value]\n\n\
         Consider total cost for {nights} nights and recommend based on best value.",
        destination = request.destination(),
        nights = request.nights(),
        budget = format_usd(request.budget()),
    )
}

fn activity_instructions(request: &TripRequest) -> String {
    format!(
        "You are an activities specialist for {destination}.\n\
         Trip length: {nights} days\n\
         Budget: {budget}\n\n\
         When given activity options, create a {nights}-day plan in this EXACT format:\n\n\
         ACTIVITY PLAN:\n\
         Day 1: [Activity 1] + [Activity 2] - Cost: $[total]\n\
         Day 2: [Activity 1] + [Activity 2] - Cost: $[total]\n\
         Day 3: [Activity 1] + [Activity 2] - Cost: $[total]\n\n\
         TOTAL ACTIVITIES: $[sum of all days]\n\
         HIGHLIGHTS: [Top 3 must-see activities]\n\n\
         Mix free and paid activities. Prioritize must-see attractions while staying within budget.",
        destination = request.destination(),
        nights = request.nights(),
        budget = format_usd(request.budget()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::extraction::{BEST_CHOICE_MARKER, TOTAL_ACTIVITIES_MARKER};
    use crate::types::Flight;

    fn request() -> TripRequest {
        TripRequest::new(3500.0, "New York", "Tokyo", 3).unwrap()
    }

    #[test]
    fn test_format_options_numbers_entries() {
        let flights = vec![
            Flight {
                airline: "ANA".to_string(),
                price: 2100,
                duration: "13h 45m".to_string(),
                stops: "Direct".to_string(),
            },
            Flight {
                airline: "Korean Air".to_string(),
                price: 1320,
                duration: "19h 10m".to_string(),
                stops: "1 stop (Seoul)".to_string(),
            },
        ];

        let formatted = format_options(&flights);
        assert!(formatted.starts_with("Available Options:\n"));
        assert!(formatted.contains("1. ANA - $2100 (13h 45m, Direct)"));
        assert!(formatted.contains("2. Korean Air - $1320 (19h 10m, 1 stop (Seoul))"));
    }

    #[test]
    fn test_format_options_empty() {
        let none: Vec<Flight> = vec![];
        assert_eq!(format_options(&none), "No data available");
    }

    #[test]
    fn test_instructions_carry_extractor_markers() {
        let req = request();
        for category in [Category::Flight, Category::Hotel] {
            let instructions = role_instructions(category, &req);
            assert!(instructions.contains(BEST_CHOICE_MARKER));
        }
        let activity = role_instructions(Category::Activity, &req);
        assert!(activity.contains(TOTAL_ACTIVITIES_MARKER));
    }

    #[test]
    fn test_instructions_are_parameterized() {
        let req = request();
        let flight = role_instructions(Category::Flight, &req);
        assert!(flight.contains("from New York to Tokyo"));
        assert!(flight.contains("$3,500"));

        let hotel = role_instructions(Category::Hotel, &req);
        assert!(hotel.contains("3 nights = $[total]"));
    }

    #[test]
    fn test_consultation_tasks() {
        let req = request();
        assert_eq!(
            consultation_task(Category::Flight, &req),
            "Please recommend flights from New York to Tokyo"
        );
        assert_eq!(
            consultation_task(Category::Hotel, &req),
            "Please recommend hotels in Tokyo for 3 nights"
        );
        assert_eq!(
            consultation_task(Category::Activity, &req),
            "Please create a 3-day activity plan for Tokyo"
        );
    }
}
