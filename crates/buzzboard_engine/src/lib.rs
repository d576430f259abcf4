//! Buzzboard engine: item fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ApiItemFetcher, FetchSettings, ItemFetcher};
pub use types::{EngineEvent, FetchError};
