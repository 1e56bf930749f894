use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("Starting fetch/transform/submit run...");

        // Extract
        tracing::info!("Fetching records...");
        let record_set = self.pipeline.extract().await?;
        tracing::info!("Fetched {} records", record_set.data.len());

        // Transform
        tracing::info!("Computing summary...");
        let summary = self.pipeline.transform(record_set).await?;
        tracing::info!(
            "Computed {} age projections across {} colours",
            summary.age_plus_20.len(),
            summary.top_colours.entries().len()
        );

        // Load
        tracing::info!("Submitting summary...");
        self.pipeline.load(summary).await?;
        tracing::info!("Summary submitted");

        Ok(())
    }
}
