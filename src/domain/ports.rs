use crate::domain::model::{RecordSet, Summary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn fetch_endpoint(&self) -> &str;
    fn submit_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// The three pipeline phases, run strictly in order: extract (HTTP GET),
/// transform (pure summary computation), load (HTTP PUT of the result).
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RecordSet>;
    async fn transform(&self, data: RecordSet) -> Result<Summary>;
    async fn load(&self, result: Summary) -> Result<()>;
}
