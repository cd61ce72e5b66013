use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::info;

use crate::{report, LlmAdvisoryService, TripPlanner, TripRequest};

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("A budget-aware travel planner coordinating advisory LLM agents")
        .arg(
            Arg::new("origin")
                .short('o')
                .long("origin")
                .value_name("CITY")
                .help("Departure city")
                .default_value("New York"),
        )
        .arg(
            Arg::new("destination")
                .short('d')
                .long("destination")
                .value_name("CITY")
                .help("Destination city")
                .default_value("Tokyo"),
        )
        .arg(
            Arg::new("nights")
                .short('n')
                .long("nights")
                .value_name("COUNT")
                .help("Trip length in nights")
                .default_value("3"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("DOLLARS")
                .help("Total trip budget in dollars")
                .default_value("3500"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The OpenRouter model to use")
                .default_value("openai/gpt-4.1-mini"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("OpenRouter API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help(
                    "OpenRouter base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)",
                ),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-consultation timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the plan result as JSON instead of the summary"),
        )
        .get_matches();

    let budget: f64 = matches
        .get_one::<String>("budget")
        .unwrap()
        .parse()
        .context("--budget must be a number")?;
    let nights: u32 = matches
        .get_one::<String>("nights")
        .unwrap()
        .parse()
        .context("--nights must be a positive integer")?;
    let timeout_seconds: u64 = matches
        .get_one::<String>("timeout")
        .unwrap()
        .parse()
        .context("--timeout must be a number of seconds")?;

    let request = TripRequest::new(
        budget,
        matches.get_one::<String>("origin").unwrap().as_str(),
        matches.get_one::<String>("destination").unwrap().as_str(),
        nights,
    )?;

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .context("OpenRouter API key is required. Set OPENAI_API_KEY environment variable or use --api-key")?;

    // Resolve base URL from CLI or environment
    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("OPENAI_BASE_URL").ok())
        .or_else(|| env::var("OPENROUTER_BASE_URL").ok())
        .unwrap_or_else(|| "https://openrouter.ai/api/v1".to_string());

    let advisor = LlmAdvisoryService::new(api_key)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_base_url(base_url.clone())
        .with_timeout(Duration::from_secs(timeout_seconds));

    let planner = TripPlanner::new(request, Arc::new(advisor))
        .with_consult_timeout(Duration::from_secs(timeout_seconds));

    info!(
        "Planning {} → {} ({} nights)",
        planner.request().origin(),
        planner.request().destination(),
        planner.request().nights()
    );
    info!(
        "Using model: {}",
        matches.get_one::<String>("model").unwrap()
    );
    info!("Base URL: {}", base_url);

    match planner.plan().await {
        Some(result) => {
            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("\n{}", report::trip_summary(planner.request(), &result));
            }
            Ok(())
        }
        None => Err(anyhow::anyhow!(
            "Unable to plan trip. Please check your setup and try again"
        )),
    }
}
