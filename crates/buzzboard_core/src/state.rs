use crate::view_model::{board_view, BoardViewModel};
use crate::Item;

/// Monotonically increasing refresh counter. A completed fetch only lands
/// if its generation still matches the latest issued request.
pub type Generation = u64;

/// Ranking order requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    New,
    Buzz,
}

impl Sort {
    /// Wire value used in the `sort=` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Sort::New => "new",
            Sort::Buzz => "buzz",
        }
    }

    /// Parses a wire value back into a sort option.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Sort::New),
            "buzz" => Some(Sort::Buzz),
            _ => None,
        }
    }
}

/// User-chosen sort/filter parameters driving the API query.
///
/// `sort` is always set to a valid value; the three string filters default
/// to empty, meaning "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub sort: Sort,
    pub keyword: String,
    pub tag: String,
    pub source_type: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    filters: FilterState,
    items: Vec<Item>,
    generation: Generation,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn set_sort(&mut self, sort: Sort) {
        self.filters.sort = sort;
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.filters.keyword = keyword;
    }

    pub fn set_tag(&mut self, tag: String) {
        self.filters.tag = tag;
    }

    pub fn set_source_type(&mut self, source_type: String) {
        self.filters.source_type = source_type;
    }

    /// Issues a new refresh generation. Any fetch still in flight for an
    /// older generation becomes stale and will be discarded on completion.
    pub fn begin_refresh(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    pub fn latest_generation(&self) -> Generation {
        self.generation
    }

    /// Replaces the item list wholesale if `generation` is still current.
    /// Returns whether the result landed.
    pub fn apply_fetched(&mut self, generation: Generation, items: Vec<Item>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.dirty = true;
        true
    }

    /// Returns the dirty flag and clears it. The shell re-renders only when
    /// this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> BoardViewModel {
        board_view(self.filters.sort, &self.items)
    }
}
