use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `GET /items?<query>` for the given refresh generation.
    FetchItems { generation: Generation, query: String },
}
