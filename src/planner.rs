use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::{
    core::advisor::{AdvisoryService, LlmAdvisoryService},
    data::ListingProvider,
    error::{PlannerError, Result},
    services::{extraction, prompts},
    types::{Category, ExtractedRecommendation, TripPlanResult, TripRequest},
};

/// Coordinates the three advisory consultations and reconciles the budget.
#[derive(Debug)]
pub struct TripPlanner {
    request: TripRequest,
    provider: ListingProvider,
    advisor: Arc<dyn AdvisoryService>,
    consult_timeout: Duration,
}

impl TripPlanner {
    pub fn new(request: TripRequest, advisor: Arc<dyn AdvisoryService>) -> Self {
        Self {
            request,
            provider: ListingProvider::new(),
            advisor,
            consult_timeout: Duration::from_secs(120),
        }
    }

    /// Build a planner backed by the environment-configured LLM service.
    pub fn from_env(request: TripRequest) -> Result<Self> {
        let advisor = LlmAdvisoryService::from_env()?;
        Ok(Self::new(request, Arc::new(advisor)))
    }

    /// Bound for one consultation call; an elapsed timeout degrades that
    /// category to the zero-cost sentinel like any other agent failure.
    pub fn with_consult_timeout(mut self, consult_timeout: Duration) -> Self {
        self.consult_timeout = consult_timeout;
        self
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    /// Run a full planning pass.
    ///
    /// Returns `None` when the run fails outright; a per-consultation failure
    /// never does that, it only zeroes the affected category. A returned
    /// result is always complete, never partial.
    pub async fn plan(&self) -> Option<TripPlanResult> {
        match self.plan_inner().await {
            Ok(result) => Some(result),
            Err(err) => {
                error!("Trip planning failed: {err}");
                None
            }
        }
    }

    async fn plan_inner(&self) -> Result<TripPlanResult> {
        let request = &self.request;
        info!(
            origin = request.origin(),
            destination = request.destination(),
            nights = request.nights(),
            budget = request.budget(),
            "planning trip"
        );

        let flights = self.provider.flights(request.origin(), request.destination());
        let hotels = self.provider.hotels(request.destination());
        let activities = self.provider.activities(request.destination());
        info!(
            flights = flights.len(),
            hotels = hotels.len(),
            activities = activities.len(),
            "gathered travel options"
        );

        // Independent consultations: no data dependency, joined before
        // reconciliation, a failure in one never cancels the others.
        let (flight_reply, hotel_reply, activity_reply) = tokio::join!(
            self.consult(
                Category::Flight,
                prompts::role_instructions(Category::Flight, request),
                prompts::user_message(Category::Flight, request, &flights),
            ),
            self.consult(
                Category::Hotel,
                prompts::role_instructions(Category::Hotel, request),
                prompts::user_message(Category::Hotel, request, &hotels),
            ),
            self.consult(
                Category::Activity,
                prompts::role_instructions(Category::Activity, request),
                prompts::user_message(Category::Activity, request, &activities),
            ),
        );

        let flight = extraction::extract_recommendation(&flight_reply, Category::Flight, request.nights());
        let hotel = extraction::extract_recommendation(&hotel_reply, Category::Hotel, request.nights());
        let activity =
            extraction::extract_recommendation(&activity_reply, Category::Activity, request.nights());

        Ok(reconcile(request, flight, hotel, activity))
    }

    /// One consultation with the failure-isolation rule applied: any service
    /// error or timeout is absorbed here and replaced by a fixed error reply
    /// that fails every extraction pattern downstream.
    async fn consult(&self, category: Category, instructions: String, message: String) -> String {
        match self.try_consult(category, &instructions, &message).await {
            Ok(reply) => {
                debug!(
                    category = category.as_str(),
                    reply_len = reply.len(),
                    "consultation finished"
                );
                reply
            }
            Err(err) => {
                warn!(category = category.as_str(), error = %err, "consultation failed");
                format!(
                    "Error: Unable to get recommendation from {}",
                    category.agent_name()
                )
            }
        }
    }

    async fn try_consult(
        &self,
        category: Category,
        instructions: &str,
        message: &str,
    ) -> Result<String> {
        debug!(category = category.as_str(), "consulting {}", category.agent_name());
        timeout(
            self.consult_timeout,
            self.advisor.generate_reply(instructions, message),
        )
        .await
        .map_err(|_| {
            PlannerError::Timeout(format!(
                "{} did not reply within {:?}",
                category.agent_name(),
                self.consult_timeout
            ))
        })?
    }
}

fn reconcile(
    request: &TripRequest,
    flight: ExtractedRecommendation,
    hotel: ExtractedRecommendation,
    activity: ExtractedRecommendation,
) -> TripPlanResult {
    let total_cost =
        u64::from(flight.cost) + u64::from(hotel.cost) + u64::from(activity.cost);
    let remaining_budget = request.budget() - total_cost as f64;
    // Inclusive boundary: a trip costing exactly the budget fits it.
    let within_budget = total_cost as f64 <= request.budget();

    TripPlanResult {
        total_cost,
        remaining_budget,
        within_budget,
        flight_cost: flight.cost,
        hotel_cost: hotel.cost,
        activity_cost: activity.cost,
        flight_recommendation: flight.details,
        hotel_recommendation: hotel.details,
        activity_recommendation: activity.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest::new(1000.0, "London", "Paris", 2).unwrap()
    }

    fn rec(cost: u32) -> ExtractedRecommendation {
        ExtractedRecommendation::new(cost, format!("option at ${cost}"))
    }

    #[test]
    fn test_reconcile_sums_and_classifies() {
        let result = reconcile(&request(), rec(180), rec(360), rec(80));
        assert_eq!(result.total_cost, 620);
        assert_eq!(result.remaining_budget, 380.0);
        assert!(result.within_budget);
    }

    #[test]
    fn test_reconcile_over_budget() {
        let result = reconcile(&request(), rec(800), rec(300), rec(100));
        assert_eq!(result.total_cost, 1200);
        assert_eq!(result.remaining_budget, -200.0);
        assert!(!result.within_budget);
    }

    #[test]
    fn test_reconcile_exact_budget_is_within() {
        let result = reconcile(&request(), rec(500), rec(400), rec(100));
        assert_eq!(result.remaining_budget, 0.0);
        assert!(result.within_budget);
    }

    #[test]
    fn test_reconcile_keeps_sentinel_details() {
        let result = reconcile(
            &request(),
            rec(180),
            ExtractedRecommendation::sentinel(),
            rec(80),
        );
        assert_eq!(result.hotel_cost, 0);
        assert_eq!(result.hotel_recommendation, "No details available");
        assert_eq!(result.total_cost, 260);
    }
}
