use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two endpoints default to the recruitment API the original interaction
/// targets; overriding them only matters for testing.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "records-summary-etl")]
#[command(about = "Fetch personal records, derive age/colour summaries, submit them back")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://recruitment.highfieldqualifications.com/api/gettest"
    )]
    pub fetch_endpoint: String,

    #[arg(
        long,
        default_value = "https://recruitment.highfieldqualifications.com/api/SubmitTest"
    )]
    pub submit_endpoint: String,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn fetch_endpoint(&self) -> &str {
        &self.fetch_endpoint
    }

    fn submit_endpoint(&self) -> &str {
        &self.submit_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("fetch_endpoint", &self.fetch_endpoint)?;
        validate_url("submit_endpoint", &self.submit_endpoint)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
