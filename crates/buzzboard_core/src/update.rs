use crate::{build_query, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SortSelected(sort) => {
            state.set_sort(sort);
            vec![fetch_effect(&mut state)]
        }
        Msg::SourceTypeChanged(source_type) => {
            state.set_source_type(source_type);
            vec![fetch_effect(&mut state)]
        }
        Msg::KeywordChanged(keyword) => {
            // Text edits only mutate state; the explicit refresh action
            // (or a sort/source change) triggers the fetch.
            state.set_keyword(keyword);
            Vec::new()
        }
        Msg::TagChanged(tag) => {
            state.set_tag(tag);
            Vec::new()
        }
        Msg::RefreshRequested => vec![fetch_effect(&mut state)],
        Msg::ItemsFetched { generation, items } => {
            // Stale generations are dropped: the display always reflects
            // the latest issued request, not the latest response.
            state.apply_fetched(generation, items);
            Vec::new()
        }
        Msg::FetchFailed { .. } => {
            // Diagnostic-only failure. The previous item list stays on
            // screen; the shell has already logged the cause.
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn fetch_effect(state: &mut AppState) -> Effect {
    let generation = state.begin_refresh();
    Effect::FetchItems {
        generation,
        query: build_query(state.filters()),
    }
}
