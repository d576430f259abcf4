use std::time::Duration;

use buzzboard_engine::{ApiItemFetcher, EngineEvent, FetchError, FetchSettings, ItemFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn items_body() -> serde_json::Value {
    serde_json::json!([
        {
            "url": "https://example.com/first",
            "title": "First",
            "summary": "one",
            "score_buzz": 2.5,
            "score_new": 1.0,
            "summary_points": ["a"],
            "tags": ["rust"],
            "mentions": [
                {
                    "source_name": "Watcher",
                    "source_handle": "@watcher",
                    "source_type": "twitter",
                    "post_url": "https://twitter.com/w/status/1",
                    "like_count": 3
                }
            ]
        },
        {
            "url": "https://example.com/second",
            "score_buzz": 1.5,
            "score_new": 4.0
        }
    ])
}

#[tokio::test]
async fn success_preserves_length_and_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("sort", "buzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .mount(&server)
        .await;

    let fetcher = ApiItemFetcher::new(server.uri(), FetchSettings::default()).expect("fetcher");
    let items = fetcher.fetch_items("sort=buzz").await.expect("fetch ok");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].url, "https://example.com/first");
    assert_eq!(items[1].url, "https://example.com/second");
    assert_eq!(items[0].mentions.len(), 1);
    assert_eq!(items[0].mentions[0].like_count, Some(3));
    // The second item carried only the required fields.
    assert_eq!(items[1].title, None);
    assert!(items[1].mentions.is_empty());
}

#[tokio::test]
async fn filter_parameters_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("sort", "new"))
        .and(query_param("q", "rust async"))
        .and(query_param("tag", "webdev"))
        .and(query_param("source_type", "twitter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ApiItemFetcher::new(server.uri(), FetchSettings::default()).expect("fetcher");
    let items = fetcher
        .fetch_items("sort=new&q=rust+async&tag=webdev&source_type=twitter")
        .await
        .expect("fetch ok");

    assert!(items.is_empty());
}

#[tokio::test]
async fn non_success_status_yields_empty_list_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ApiItemFetcher::new(server.uri(), FetchSettings::default()).expect("fetcher");
    let items = fetcher.fetch_items("sort=new").await.expect("fail soft");

    assert!(items.is_empty());
}

#[tokio::test]
async fn transport_error_yields_empty_list_without_error() {
    // Start a server only to learn a free port, then shut it down.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let settings = FetchSettings {
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_millis(500),
    };
    let fetcher = ApiItemFetcher::new(uri, settings).expect("fetcher");
    let items = fetcher.fetch_items("sort=new").await.expect("fail soft");

    assert!(items.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let fetcher = ApiItemFetcher::new(server.uri(), FetchSettings::default()).expect("fetcher");
    let err = fetcher.fetch_items("sort=new").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn engine_handle_reports_completion_with_generation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .mount(&server)
        .await;

    let (engine, events) =
        buzzboard_engine::EngineHandle::new(server.uri(), FetchSettings::default())
            .expect("engine");
    engine.refresh(7, "sort=new");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event");
    match event {
        EngineEvent::RefreshCompleted { generation, result } => {
            assert_eq!(generation, 7);
            assert_eq!(result.expect("items").len(), 2);
        }
    }
}
