pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{etl::EtlEngine, pipeline::SummaryPipeline};
pub use utils::error::{EtlError, Result};
