use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct FormatEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FormatEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();

        tracing::info!("Reading input...");
        let raw = self.pipeline.extract().await?;
        tracing::info!("Read {} bytes of text", raw.len());

        tracing::info!("Formatting records...");
        let result = self.pipeline.transform(raw).await?;
        tracing::info!("Formatted {} records", result.records.len());

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Done in {:.2?}, output saved to: {}", started.elapsed(), output_path);

        Ok(output_path)
    }
}
