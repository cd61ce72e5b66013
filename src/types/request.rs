use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Validated parameters for one planning run.
///
/// Construction is the only place validation happens; a `TripRequest` that
/// exists is always well-formed and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    budget: f64,
    origin: String,
    destination: String,
    nights: u32,
}

impl TripRequest {
    /// Build a request, trimming the endpoints and rejecting bad parameters.
    pub fn new(
        budget: f64,
        origin: impl Into<String>,
        destination: impl Into<String>,
        nights: u32,
    ) -> Result<Self> {
        let origin = origin.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        if !budget.is_finite() || budget <= 0.0 {
            return Err(PlannerError::Validation(
                "Budget must be positive".to_string(),
            ));
        }
        if nights == 0 {
            return Err(PlannerError::Validation(
                "Number of nights must be positive".to_string(),
            ));
        }
        if origin.is_empty() || destination.is_empty() {
            return Err(PlannerError::Validation(
                "Origin and destination are required".to_string(),
            ));
        }

        Ok(Self {
            budget,
            origin,
            destination,
            nights,
        })
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }
}
