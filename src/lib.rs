pub mod catalog;
pub mod config;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunOutcome, RunSummary};
