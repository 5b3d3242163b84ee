pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod utils;
pub mod viewer;

pub use cache::{OrderCache, RecordSource};
pub use config::Config;
pub use error::ViewerError;
pub use viewer::{view, LookupOutcome};
