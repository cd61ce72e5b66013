use serde::{Deserialize, Serialize};

/// Details placeholder used when nothing could be extracted from a reply.
pub const NO_DETAILS: &str = "No details available";

/// One of the three independent consultation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flight,
    Hotel,
    Activity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flight => "flight",
            Category::Hotel => "hotel",
            Category::Activity => "activity",
        }
    }

    /// Display name of the advisory agent for this category.
    pub fn agent_name(&self) -> &'static str {
        match self {
            Category::Flight => "FlightAgent",
            Category::Hotel => "HotelAgent",
            Category::Activity => "ActivityAgent",
        }
    }
}

/// Cost and detail line recovered from one advisory reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecommendation {
    pub cost: u32,
    pub details: String,
}

impl ExtractedRecommendation {
    pub fn new(cost: u32, details: impl Into<String>) -> Self {
        Self {
            cost,
            details: details.into(),
        }
    }

    /// The explicit nothing-extractable value. Not an error: a malformed or
    /// incomplete reply degrades to this instead of aborting the run.
    pub fn sentinel() -> Self {
        Self {
            cost: 0,
            details: NO_DETAILS.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.cost == 0 && self.details == NO_DETAILS
    }
}

/// Final outcome of one planning run.
///
/// Derived entirely from the three extracted recommendations and the request
/// budget; immutable once built and not retained anywhere by the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlanResult {
    pub total_cost: u64,
    pub remaining_budget: f64,
    pub within_budget: bool,
    pub flight_cost: u32,
    pub hotel_cost: u32,
    pub activity_cost: u32,
    pub flight_recommendation: String,
    pub hotel_recommendation: String,
    pub activity_recommendation: String,
}
