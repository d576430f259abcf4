//! Thin rendering adapter: walks a [`BoardViewModel`] and emits the HTML
//! page. All text goes through [`escape_html`]; the only unescaped path is
//! [`Embed::TrustedHtml`], which the core hands out solely for
//! provider-supplied embed markup.

use buzzboard_core::{BoardViewModel, CardView, Embed, MentionView, POST_LINK_LABEL};

const PAGE_TITLE: &str = "Buzzboard";
const WIDGETS_SCRIPT_URL: &str = "https://platform.twitter.com/widgets.js";

pub fn render_page(view: &BoardViewModel) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n</head>\n<body>\n"));
    html.push_str(&format!(
        "<main class=\"board\" data-sort=\"{}\">\n",
        view.active_sort.as_str()
    ));
    for card in &view.cards {
        html.push_str(&render_card(card));
    }
    html.push_str("</main>\n");
    // External embed loader; hydrates twitter placeholders after the full
    // render pass. The inline guard makes its absence a no-op.
    html.push_str(&format!(
        "<script async src=\"{WIDGETS_SCRIPT_URL}\"></script>\n"
    ));
    html.push_str("<script>if (window.twttr && window.twttr.widgets) { twttr.widgets.load(); }</script>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_card(card: &CardView) -> String {
    let mut out = String::from("<article class=\"card\">\n");
    out.push_str(&format!(
        "  <h2 class=\"title\">{}</h2>\n",
        escape_html(&card.title)
    ));
    out.push_str(&format!(
        "  <p class=\"summary\">{}</p>\n",
        escape_html(&card.summary)
    ));
    out.push_str(&format!(
        "  <div class=\"score-value\">{}</div>\n",
        escape_html(&card.score_line)
    ));
    out.push_str("  <ol class=\"points\">\n");
    for point in &card.points {
        out.push_str(&format!("    <li>{}</li>\n", escape_html(point)));
    }
    out.push_str("  </ol>\n  <div class=\"tags\">\n");
    for tag in &card.tags {
        out.push_str(&format!("    <span>{}</span>\n", escape_html(tag)));
    }
    out.push_str("  </div>\n  <div class=\"mentions\">\n");
    for mention in &card.mentions {
        out.push_str(&render_mention(mention));
    }
    out.push_str("  </div>\n");
    out.push_str(&format!(
        "  <a class=\"source-link\" href=\"{url}\">{url}</a>\n",
        url = escape_html(&card.source_url)
    ));
    out.push_str("</article>\n");
    out
}

fn render_mention(mention: &MentionView) -> String {
    let mut out = String::from("    <div class=\"mention\">\n");
    out.push_str(&format!(
        "      <div class=\"meta\">{}</div>\n",
        escape_html(&mention.meta)
    ));
    match &mention.embed {
        Embed::TwitterQuote { post_url } => {
            out.push_str(&format!(
                "      <blockquote class=\"twitter-tweet\"><a href=\"{}\"></a></blockquote>\n",
                escape_html(post_url)
            ));
        }
        Embed::TrustedHtml(html) => {
            // Trust boundary: provider markup is injected verbatim.
            out.push_str("      <div class=\"embed\">");
            out.push_str(html);
            out.push_str("</div>\n");
        }
        Embed::Link { url } => {
            out.push_str(&format!(
                "      <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>\n",
                escape_html(url),
                escape_html(POST_LINK_LABEL)
            ));
        }
        Embed::None => {}
    }
    out.push_str(&format!(
        "      <div class=\"scoreline\">{}</div>\n",
        escape_html(&mention.metrics)
    ));
    out.push_str("    </div>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use buzzboard_core::{board_view, Item, Mention, Sort};

    fn mention() -> Mention {
        Mention {
            source_name: "Watcher".to_string(),
            source_handle: None,
            source_type: "rss".to_string(),
            post_url: None,
            embed_html: None,
            like_count: None,
            repost_count: None,
            reply_count: None,
        }
    }

    fn item_with_mentions(mentions: Vec<Mention>) -> Item {
        Item {
            url: "https://example.com/a".to_string(),
            title: Some("A <b>bold</b> title".to_string()),
            summary: Some("plain".to_string()),
            score_buzz: 1.0,
            score_new: 2.0,
            summary_points: vec!["point & more".to_string()],
            tags: vec!["rust".to_string()],
            mentions,
        }
    }

    #[test]
    fn text_slots_are_escaped() {
        let view = board_view(Sort::New, &[item_with_mentions(Vec::new())]);
        let page = render_page(&view);

        assert!(page.contains("A &lt;b&gt;bold&lt;/b&gt; title"));
        assert!(page.contains("point &amp; more"));
        assert!(!page.contains("<b>bold</b>"));
    }

    #[test]
    fn trusted_embed_markup_is_injected_verbatim() {
        let embed = Mention {
            embed_html: Some("<iframe src=\"https://p.example/e\"></iframe>".to_string()),
            ..mention()
        };
        let view = board_view(Sort::New, &[item_with_mentions(vec![embed])]);
        let page = render_page(&view);

        assert!(page.contains("<div class=\"embed\"><iframe src=\"https://p.example/e\"></iframe></div>"));
    }

    #[test]
    fn twitter_placeholder_wraps_the_post_link() {
        let tweet = Mention {
            source_type: "twitter".to_string(),
            post_url: Some("https://twitter.com/w/status/1".to_string()),
            ..mention()
        };
        let view = board_view(Sort::Buzz, &[item_with_mentions(vec![tweet])]);
        let page = render_page(&view);

        assert!(page.contains(
            "<blockquote class=\"twitter-tweet\"><a href=\"https://twitter.com/w/status/1\"></a></blockquote>"
        ));
        assert!(page.contains("data-sort=\"buzz\""));
    }

    #[test]
    fn plain_link_opens_in_new_context_without_opener() {
        let link = Mention {
            post_url: Some("https://example.com/post".to_string()),
            ..mention()
        };
        let view = board_view(Sort::New, &[item_with_mentions(vec![link])]);
        let page = render_page(&view);

        assert!(page.contains(
            "<a href=\"https://example.com/post\" target=\"_blank\" rel=\"noopener\">紹介ポストを見る</a>"
        ));
    }

    #[test]
    fn page_always_carries_the_guarded_widget_loader() {
        let page = render_page(&board_view(Sort::New, &[]));

        assert!(page.contains(WIDGETS_SCRIPT_URL));
        assert!(page.contains("if (window.twttr && window.twttr.widgets)"));
    }

    #[test]
    fn rendered_page_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("buzzboard.html");
        let view = board_view(Sort::New, &[item_with_mentions(Vec::new())]);

        std::fs::write(&path, render_page(&view)).expect("write page");
        let written = std::fs::read_to_string(&path).expect("read page");

        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("class=\"card\""));
    }
}
