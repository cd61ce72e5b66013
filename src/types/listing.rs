use std::fmt;

use serde::{Deserialize, Serialize};

/// One flight option for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub airline: String,
    pub price: u32,
    pub duration: String,
    pub stops: String,
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ${} ({}, {})",
            self.airline, self.price, self.duration, self.stops
        )
    }
}

/// One hotel option in a destination city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub price_per_night: u32,
    pub rating: f32,
    pub location: String,
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ${}/night ({}, rated {:.1})",
            self.name, self.price_per_night, self.location, self.rating
        )
    }
}

/// One activity option in a destination city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub price: u32,
    pub category: String,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${} ({})", self.name, self.price, self.category)
    }
}
