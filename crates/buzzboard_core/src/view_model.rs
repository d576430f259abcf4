use crate::{Item, Mention, Sort};

/// Placeholder summary shown while an item has no generated summary yet.
pub const SUMMARY_PENDING: &str = "要約準備中";

/// Label for the plain external-link fallback of a mention.
pub const POST_LINK_LABEL: &str = "紹介ポストを見る";

const METRIC_SEPARATOR: &str = "  ";

/// Structured description of the whole board. The hard rules (branching,
/// formatting, omission) live here; the rendering surface only walks it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub active_sort: Sort,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub summary: String,
    /// `"<buzz> / <new>"`, both to exactly two decimal places.
    pub score_line: String,
    pub points: Vec<String>,
    pub tags: Vec<String>,
    pub mentions: Vec<MentionView>,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionView {
    /// `source_name` plus optional `source_handle`, whitespace-trimmed.
    pub meta: String,
    pub embed: Embed,
    /// Up to three engagement tokens joined by a fixed separator; zero and
    /// absent counts are both omitted.
    pub metrics: String,
}

/// How a mention's original post is represented visually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Embed {
    /// Quoted-post placeholder wrapping the link; hydrated afterwards by
    /// the external widget loader.
    TwitterQuote { post_url: String },
    /// Provider-supplied markup injected verbatim. Deliberately
    /// unsanitized: this is the one path that bypasses text escaping, and
    /// the only way to request it.
    TrustedHtml(String),
    /// Plain external link with the fixed localized label.
    Link { url: String },
    /// Metadata and metrics only.
    None,
}

pub fn board_view(active_sort: Sort, items: &[Item]) -> BoardViewModel {
    BoardViewModel {
        active_sort,
        cards: items.iter().map(card_view).collect(),
    }
}

pub fn card_view(item: &Item) -> CardView {
    let title = match &item.title {
        Some(title) => title.clone(),
        None => item.url.clone(),
    };
    let summary = item
        .summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| SUMMARY_PENDING.to_string());

    CardView {
        title,
        summary,
        score_line: format_scores(item.score_buzz, item.score_new),
        points: item.summary_points.clone(),
        tags: item.tags.clone(),
        mentions: item.mentions.iter().map(mention_view).collect(),
        source_url: item.url.clone(),
    }
}

/// Two decimal places each, buzz first. Rust's float formatting rounds to
/// nearest on the binary value, so e.g. `2.345_f64` renders as `2.34`.
pub fn format_scores(buzz: f64, new: f64) -> String {
    format!("{buzz:.2} / {new:.2}")
}

pub fn mention_view(mention: &Mention) -> MentionView {
    let meta = match &mention.source_handle {
        Some(handle) => format!("{} {}", mention.source_name, handle),
        None => mention.source_name.clone(),
    }
    .trim()
    .to_string();

    // Branch priority: twitter quote beats raw embed beats plain link.
    let embed = match (&mention.post_url, &mention.embed_html) {
        (Some(url), _) if mention.source_type == "twitter" => Embed::TwitterQuote {
            post_url: url.clone(),
        },
        (_, Some(html)) => Embed::TrustedHtml(html.clone()),
        (Some(url), None) => Embed::Link { url: url.clone() },
        (None, None) => Embed::None,
    };

    let mut tokens = Vec::new();
    if let Some(n) = nonzero(mention.like_count) {
        tokens.push(format!("❤ {n}"));
    }
    if let Some(n) = nonzero(mention.repost_count) {
        tokens.push(format!("🔁 {n}"));
    }
    if let Some(n) = nonzero(mention.reply_count) {
        tokens.push(format!("💬 {n}"));
    }

    MentionView {
        meta,
        embed,
        metrics: tokens.join(METRIC_SEPARATOR),
    }
}

fn nonzero(count: Option<u64>) -> Option<u64> {
    count.filter(|n| *n > 0)
}
