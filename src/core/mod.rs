pub mod advisor;

pub use crate::services::extraction::{
    extract_recommendation, BEST_CHOICE_MARKER, TOTAL_ACTIVITIES_MARKER,
};
pub use crate::services::prompts::{
    consultation_task, format_options, role_instructions, user_message,
};
pub use advisor::{AdvisoryService, LlmAdvisoryService};
