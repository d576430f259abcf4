//! Buzzboard core: pure filter state machine and view-model construction.
mod effect;
mod item;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use item::{Item, Mention};
pub use msg::Msg;
pub use query::build_query;
pub use state::{AppState, FilterState, Generation, Sort};
pub use update::update;
pub use view_model::{
    board_view, card_view, format_scores, mention_view, BoardViewModel, CardView, Embed,
    MentionView, POST_LINK_LABEL, SUMMARY_PENDING,
};
