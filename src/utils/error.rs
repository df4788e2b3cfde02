use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8 text: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input file is empty")]
    EmptyInputError,

    #[error("Unsupported extension for '{filename}': only .txt files are accepted")]
    WrongExtensionError { filename: String },

    #[error("Input file too large: {size} bytes (limit {limit})")]
    InputTooLargeError { size: usize, limit: usize },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormatError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // An empty list is a warning, not a failure of the tool.
            FormatError::EmptyInputError => ErrorSeverity::Low,
            FormatError::InputTooLargeError { .. } => ErrorSeverity::Medium,
            FormatError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::IoError(e) => format!("Could not read or write a file: {}", e),
            FormatError::DecodeError(_) => {
                "The input file is not plain UTF-8 text.".to_string()
            }
            FormatError::TomlError(e) => format!("The job config file is not valid TOML: {}", e),
            FormatError::EmptyInputError => "The input file is empty.".to_string(),
            FormatError::WrongExtensionError { filename } => {
                format!("'{}' is not a .txt file.", filename)
            }
            FormatError::InputTooLargeError { size, limit } => format!(
                "The input file is too large ({} bytes, limit {} bytes).",
                size, limit
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::IoError(_) => "Check that the path exists and is readable/writable.",
            FormatError::DecodeError(_) => "Re-save the file as UTF-8 text and try again.",
            FormatError::TomlError(_) | FormatError::ConfigError { .. } => {
                "Fix the config file and re-run."
            }
            FormatError::MissingConfigError { .. }
            | FormatError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments."
            }
            FormatError::EmptyInputError => "Provide a file with at least one non-blank line.",
            FormatError::WrongExtensionError { .. } => "Rename or convert the file to .txt.",
            FormatError::InputTooLargeError { .. } => {
                "Split the list or raise --max-size-mb."
            }
            FormatError::ProcessingError { .. } => "Inspect the input around the failing record.",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
