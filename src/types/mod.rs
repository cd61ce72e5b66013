pub mod listing;
pub mod plan;
pub mod request;

pub use listing::{Activity, Flight, Hotel};
pub use plan::{Category, ExtractedRecommendation, TripPlanResult, NO_DETAILS};
pub use request::TripRequest;
