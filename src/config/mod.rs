pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_txt_extension,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listafmt")]
#[command(about = "Formats a plain-text record list into a numbered report")]
pub struct CliConfig {
    /// Input .txt file, one record per line
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "lista_formatada.txt")]
    pub output_name: String,

    #[arg(long, default_value = "16", help = "Maximum accepted input size in MiB")]
    pub max_size_mb: usize,

    #[arg(long, help = "Optional TOML job config; values in it override the defaults")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies the TOML job config named by `--config`, if any.
    pub fn with_overlay(self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                let overlay = toml_config::TomlConfig::from_file(path)?;
                Ok(overlay.apply(self))
            }
            None => Ok(self),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }

    fn max_input_bytes(&self) -> usize {
        self.max_size_mb * 1024 * 1024
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_txt_extension(&self.input)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_name", &self.output_name)?;
        validate_positive_number("max_size_mb", self.max_size_mb, 1)?;
        Ok(())
    }
}
