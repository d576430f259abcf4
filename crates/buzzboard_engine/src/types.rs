use buzzboard_core::{Generation, Item};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    RefreshCompleted {
        generation: Generation,
        result: Result<Vec<Item>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build http client: {message}")]
    Client { message: String },
    #[error("malformed items response: {message}")]
    Decode { message: String },
}
