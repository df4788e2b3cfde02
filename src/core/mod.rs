pub mod engine;
pub mod formatter;
pub mod pipeline;

pub use crate::domain::model::{FormatResult, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
