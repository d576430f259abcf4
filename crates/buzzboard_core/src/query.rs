use url::form_urlencoded::Serializer;

use crate::FilterState;

/// Serializes filter state into a canonical URL query string.
///
/// `sort` is always present and comes first; `q`, `tag` and `source_type`
/// are appended in that fixed order only when their field is non-empty.
/// Values are percent-encoded per standard query encoding.
pub fn build_query(filters: &FilterState) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("sort", filters.sort.as_str());
    if !filters.keyword.is_empty() {
        query.append_pair("q", &filters.keyword);
    }
    if !filters.tag.is_empty() {
        query.append_pair("tag", &filters.tag);
    }
    if !filters.source_type.is_empty() {
        query.append_pair("source_type", &filters.source_type);
    }
    query.finish()
}
