use crate::{Generation, Item, Sort};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User selected a sort tab. The enum makes the choice mutually
    /// exclusive by construction.
    SortSelected(Sort),
    /// User changed the source-type filter; refreshes immediately.
    SourceTypeChanged(String),
    /// User edited the keyword field. Updates state without fetching.
    KeywordChanged(String),
    /// User edited the tag field. Updates state without fetching.
    TagChanged(String),
    /// Explicit refresh action (also dispatched once at startup).
    RefreshRequested,
    /// Engine completion: items for a previously issued refresh.
    ItemsFetched {
        generation: Generation,
        items: Vec<Item>,
    },
    /// Engine completion: the refresh aborted (malformed response body).
    FetchFailed {
        generation: Generation,
        message: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
