use crate::core::{formatter, ConfigProvider, FormatResult, Pipeline, Record, Storage};
use crate::utils::error::{FormatError, Result};

/// File-based gateway around the formatter: reads and validates the input
/// file, runs the transformation, writes the downloadable report.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;

        let limit = self.config.max_input_bytes();
        if bytes.len() > limit {
            return Err(FormatError::InputTooLargeError {
                size: bytes.len(),
                limit,
            });
        }

        let raw = String::from_utf8(bytes)?;

        // The formatter itself maps no-content input to "", so the empty
        // check belongs here at the boundary, not in the core.
        if raw.trim().is_empty() {
            return Err(FormatError::EmptyInputError);
        }

        Ok(raw)
    }

    async fn transform(&self, raw: String) -> Result<FormatResult> {
        let records: Vec<Record> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| Record {
                number: index + 1,
                text: line.to_string(),
            })
            .collect();

        tracing::debug!("Collected {} records from input", records.len());
        let output = formatter::format(&raw);

        Ok(FormatResult { records, output })
    }

    async fn load(&self, result: FormatResult) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_name()
        );

        tracing::debug!(
            "Writing formatted output ({} bytes) to {}",
            result.output.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
