//! Static listing tables standing in for real travel inventory APIs.

use crate::types::{Activity, Flight, Hotel};

/// Supplies candidate flights, hotels, and activities for a route or city.
///
/// Known keys return the fixed table below; unknown keys return exactly one
/// synthetic generic entry so callers always receive a non-empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingProvider;

impl ListingProvider {
    pub fn new() -> Self {
        Self
    }

    /// Get available flights for a route.
    pub fn flights(&self, origin: &str, destination: &str) -> Vec<Flight> {
        match (origin, destination) {
            ("New York", "Tokyo") => vec![
                flight("United Airlines", 1850, "14h 20m", "Direct"),
                flight("ANA", 2100, "13h 45m", "Direct"),
                flight("Korean Air", 1320, "19h 10m", "1 stop (Seoul)"),
            ],
            ("London", "Paris") => vec![
                flight("British Airways", 180, "1h 25m", "Direct"),
                flight("Air France", 165, "1h 20m", "Direct"),
                flight("Lufthansa", 220, "3h 45m", "1 stop (Frankfurt)"),
            ],
            _ => vec![flight("Generic Airways", 800, "8h", "Direct")],
        }
    }

    /// Get available hotels for a destination.
    pub fn hotels(&self, destination: &str) -> Vec<Hotel> {
        match destination {
            "Tokyo" => vec![
                hotel("Park Hyatt Tokyo", 450, 4.8, "Shinjuku"),
                hotel("Tokyo Station Hotel", 95, 4.2, "Tokyo Station"),
                hotel("Capsule Inn Akihabara", 35, 3.8, "Akihabara"),
            ],
            "Paris" => vec![
                hotel("Le Meurice", 950, 4.9, "1st Arrondissement"),
                hotel("Hotel des Grands Boulevards", 180, 4.3, "2nd Arr."),
                hotel("Generator Paris", 45, 4.1, "10th Arr."),
            ],
            _ => vec![hotel(
                &format!("Hotel {destination}"),
                120,
                4.0,
                "City Center",
            )],
        }
    }

    /// Get available activities for a destination.
    pub fn activities(&self, destination: &str) -> Vec<Activity> {
        match destination {
            "Tokyo" => vec![
                activity("Senso-ji Temple", 0, "Cultural"),
                activity("Tokyo Skytree", 25, "Sightseeing"),
                activity("Tsukiji Market Tour", 45, "Food"),
                activity("teamLab Borderless", 35, "Art"),
            ],
            "Paris" => vec![
                activity("Louvre Museum", 17, "Museum"),
                activity("Eiffel Tower", 29, "Sightseeing"),
                activity("Seine River Cruise", 15, "Sightseeing"),
                activity("Versailles Palace", 20, "Historical"),
            ],
            _ => vec![activity(
                &format!("{destination} City Tour"),
                30,
                "Sightseeing",
            )],
        }
    }
}

fn flight(airline: &str, price: u32, duration: &str, stops: &str) -> Flight {
    Flight {
        airline: airline.to_string(),
        price,
        duration: duration.to_string(),
        stops: stops.to_string(),
    }
}

fn hotel(name: &str, price_per_night: u32, rating: f32, location: &str) -> Hotel {
    Hotel {
        name: name.to_string(),
        price_per_night,
        rating,
        location: location.to_string(),
    }
}

fn activity(name: &str, price: u32, category: &str) -> Activity {
    Activity {
        name: name.to_string(),
        price,
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_route_returns_table() {
        let provider = ListingProvider::new();
        let flights = provider.flights("New York", "Tokyo");
        assert_eq!(flights.len(), 3);
        assert_eq!(flights[2].airline, "Korean Air");
        assert_eq!(flights[2].price, 1320);
    }

    #[test]
    fn test_unknown_route_returns_generic_fallback() {
        let provider = ListingProvider::new();
        let flights = provider.flights("New York", "Berlin");
        assert_eq!(
            flights,
            vec![Flight {
                airline: "Generic Airways".to_string(),
                price: 800,
                duration: "8h".to_string(),
                stops: "Direct".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_city_hotel_fallback() {
        let provider = ListingProvider::new();
        let hotels = provider.hotels("Berlin");
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Hotel Berlin");
        assert_eq!(hotels[0].price_per_night, 120);
        assert_eq!(hotels[0].rating, 4.0);
        assert_eq!(hotels[0].location, "City Center");
    }

    #[test]
    fn test_unknown_city_activity_fallback() {
        let provider = ListingProvider::new();
        let activities = provider.activities("Berlin");
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Berlin City Tour");
        assert_eq!(activities[0].price, 30);
        assert_eq!(activities[0].category, "Sightseeing");
    }

    #[test]
    fn test_known_city_tables() {
        let provider = ListingProvider::new();
        assert_eq!(provider.hotels("Paris").len(), 3);
        assert_eq!(provider.activities("Tokyo").len(), 4);
        assert_eq!(provider.activities("Tokyo")[0].price, 0);
    }
}
