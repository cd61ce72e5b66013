//! trip-planner-rs: a budget-aware travel planner coordinating advisory LLM agents
//!
//! This library issues three independent advisory consultations (flight, hotel,
//! activity), turns each free-form natural-language reply into a structured cost
//! figure, and reconciles the total against the trip budget. Extraction is
//! deliberately total: a malformed or missing reply degrades to a zero-cost
//! sentinel instead of aborting the run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = TripRequest::new(3500.0, "New York", "Tokyo", 3)?;
//!     let planner = TripPlanner::from_env(request)?;
//!
//!     if let Some(result) = planner.plan().await {
//!         println!("Total cost: ${}", result.total_cost);
//!         println!("Within budget: {}", result.within_budget);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod data;
pub mod error;
pub mod planner;
pub mod report;
pub(crate) mod services;
pub mod types;

pub use crate::core::{
    consultation_task, extract_recommendation, format_options, role_instructions, user_message,
    AdvisoryService, LlmAdvisoryService, BEST_CHOICE_MARKER, TOTAL_ACTIVITIES_MARKER,
};
pub use data::ListingProvider;
pub use error::{PlannerError, Result};
pub use planner::TripPlanner;
pub use report::{format_usd, trip_summary};
pub use types::{
    Activity, Category, ExtractedRecommendation, Flight, Hotel, TripPlanResult, TripRequest,
    NO_DETAILS,
};

#[cfg(feature = "cli")]
pub mod cli;
