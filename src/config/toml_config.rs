use crate::config::CliConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Optional job config file. Every table and field is optional; present
/// values replace the corresponding CLI defaults.
///
/// ```toml
/// [input]
/// path = "clientes.txt"
///
/// [output]
/// path = "./reports"
/// filename = "lista_formatada.txt"
///
/// [limits]
/// max_size_mb = 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_size_mb: Option<usize>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply(self, mut cli: CliConfig) -> CliConfig {
        if let Some(input) = self.input {
            if let Some(path) = input.path {
                cli.input = path;
            }
        }
        if let Some(output) = self.output {
            if let Some(path) = output.path {
                cli.output_path = path;
            }
            if let Some(filename) = output.filename {
                cli.output_name = filename;
            }
        }
        if let Some(limits) = self.limits {
            if let Some(max_size_mb) = limits.max_size_mb {
                cli.max_size_mb = max_size_mb;
            }
        }
        cli
    }
}
