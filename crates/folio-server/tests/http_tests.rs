//! HTTP Surface Tests
//!
//! Requests against the full route tree over the shared site fixture.
//!
use folio_content::MemoryStore;
use folio_page::{PageComposer, PageQuery, PageSettings};
use folio_server::{routes, AppState, SiteConfig};
use folio_test_utils::{record, sample_source, sample_store, source_over, RecordingDelivery};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

fn settings() -> PageSettings {
    PageSettings::default().with_render_budget(Duration::from_secs(5))
}

fn app(delivery: &Arc<RecordingDelivery>) -> AppState {
    AppState::new(PageComposer::new(sample_source(), settings()), delivery.clone())
}

fn body(res: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    String::from_utf8(res.body().to_vec()).unwrap()
}

#[tokio::test]
async fn test_page_uses_query_state() {
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(app(&delivery));

    let res = warp::test::request()
        .path("/?experience=job2&contact=open")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/html; charset=utf-8");

    let html = body(&res);
    assert!(html.contains("Looms Inc"));
    assert!(html.contains(r#"<form class="contact-form" method="post" action="/contact">"#));
    // links keep the active tab
    assert!(html.contains("?experience=job2&amp;skills=Frontend&amp;contact=open#skills"));
}

#[tokio::test]
async fn test_repeated_query_key_keeps_last_value() {
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(app(&delivery));

    let res = warp::test::request()
        .path("/?skills=Frontend&skills=Backend&experience=job2")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), 200);

    let html = body(&res);
    assert!(html.contains("Looms Inc"));
    // same state the CLI parser reads
    let expected = PageQuery::parse("skills=Frontend&skills=Backend&experience=job2");
    assert_eq!(expected.skills.as_deref(), Some("Backend"));
    assert!(html.contains("experience=job2&amp;skills=Backend"));
}

#[tokio::test]
async fn test_page_without_query() {
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(app(&delivery));

    let res = warp::test::request().path("/").reply(&routes).await;
    assert_eq!(res.status(), 200);
    assert!(body(&res).contains("Analytical Engine"));
}

#[tokio::test]
async fn test_blank_field_never_reaches_delivery() {
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(app(&delivery));

    let res = warp::test::request()
        .method("POST")
        .path("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=&message=Hello")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), 200);

    let html = body(&res);
    assert!(html.contains("All fields are required."));
    assert!(html.contains(r#"value="Ada""#));
    assert_eq!(delivery.calls(), 0);
}

#[tokio::test]
async fn test_successful_submission_clears_form() {
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(app(&delivery));

    let res = warp::test::request()
        .method("POST")
        .path("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=ada%40engines.dev&message=Hello+there")
        .reply(&routes)
        .await;

    let html = body(&res);
    assert!(html.contains("Message sent successfully!"));
    assert!(!html.contains(r#"value="Ada""#));

    let sent = delivery.messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "ada@engines.dev");
    assert_eq!(sent[0].message, "Hello there");
}

#[tokio::test]
async fn test_failed_delivery_keeps_fields() {
    let delivery = Arc::new(RecordingDelivery::failing());
    let routes = routes(app(&delivery));

    let res = warp::test::request()
        .method("POST")
        .path("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=ada%40engines.dev&message=Hello")
        .reply(&routes)
        .await;

    let html = body(&res);
    assert!(html.contains("Failed to send the message. Please try again later."));
    assert!(html.contains(r#"value="ada@engines.dev""#));
    assert_eq!(delivery.calls(), 1);
}

#[tokio::test]
async fn test_sections_table() {
    let store = sample_store();
    store.insert(
        "sections",
        "experience",
        record(json!({"displayNumber": 2, "enabled": false})),
    );
    let delivery = Arc::new(RecordingDelivery::new());
    let routes = routes(AppState::new(
        PageComposer::new(source_over(store), settings()),
        delivery,
    ));

    let res = warp::test::request().path("/api/sections").reply(&routes).await;
    assert_eq!(res.status(), 200);

    let table: Value = serde_json::from_slice(res.body()).unwrap();
    let rows = table.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["section"], "hero");
    assert!(rows[0].get("ordinal").is_none());
    assert_eq!(rows[2]["section"], "experience");
    assert_eq!(rows[2]["state"], "hidden");
    assert_eq!(rows[3]["section"], "skills");
    assert_eq!(rows[3]["ordinal"], 2);
}

#[tokio::test]
async fn test_config_drives_numbering() {
    let config = SiteConfig::default()
        .with_numbering(folio_sections::NumberingPolicy::FixedOrdinal)
        .apply_env(|key| (key == "FOLIO_RENDER_WAIT_MS").then(|| "5000".to_string()))
        .unwrap();

    let store = MemoryStore::from_bundle(folio_test_utils::sample_bundle()).unwrap();
    store.insert("sections", "about", record(json!({"displayNumber": 7})));
    let composer = PageComposer::new(source_over(store), config.page_settings());

    let html = composer.render(&Default::default(), None).await;
    assert!(html.contains(r#"<span class="section-number">07.</span>About Me"#));
}
