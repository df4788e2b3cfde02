pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::FormatEngine, pipeline::FilePipeline};
pub use utils::error::{FormatError, Result};
