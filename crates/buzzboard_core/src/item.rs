use serde::Deserialize;

/// One aggregated content entry as served by `GET /items`.
///
/// Items are transient render inputs: the whole list is replaced on every
/// refresh. Unknown JSON fields from the API are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub score_buzz: f64,
    pub score_new: f64,
    #[serde(default)]
    pub summary_points: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

/// One social-media reference to an [`Item`], from a specific provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mention {
    pub source_name: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    pub source_type: String,
    #[serde(default)]
    pub post_url: Option<String>,
    #[serde(default)]
    pub embed_html: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub repost_count: Option<u64>,
    #[serde(default)]
    pub reply_count: Option<u64>,
}
