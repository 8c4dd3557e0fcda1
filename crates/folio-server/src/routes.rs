//! HTTP routes
//!
//! | Method | Path            | Response                                  |
//! |--------|-----------------|-------------------------------------------|
//! | GET    | `/`             | Page, UI state from the query string      |
//! | POST   | `/contact`      | Page with the submission's inline status  |
//! | GET    | `/api/sections` | Resolved visibility and ordinal table     |
//! | GET    | `/healthz`      | Liveness                                  |

use folio_page::{PageComposer, PageQuery};
use folio_sections::{submit, ContactForm, EmailDelivery};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

/// Largest accepted contact form body
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Shared per-process state
#[derive(Clone)]
pub struct AppState {
    composer: PageComposer,
    delivery: Arc<dyn EmailDelivery>,
}

impl AppState {
    /// Create state from a composer and a delivery backend
    pub fn new(composer: PageComposer, delivery: Arc<dyn EmailDelivery>) -> Self {
        Self { composer, delivery }
    }

    /// Page composer
    #[inline]
    #[must_use]
    pub fn composer(&self) -> &PageComposer {
        &self.composer
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("composer", &self.composer)
            .field("delivery", &self.delivery.name())
            .finish()
    }
}

/// Every route of the site
pub fn routes(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_state = warp::any().map(move || state.clone());

    let page = warp::path::end()
        .and(warp::get())
        .and(page_query())
        .and(with_state.clone())
        .then(render_page);

    let contact = warp::path("contact")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BYTES))
        .and(warp::body::form::<ContactForm>())
        .and(with_state.clone())
        .then(submit_contact);

    let sections = warp::path!("api" / "sections")
        .and(warp::get())
        .and(with_state)
        .then(section_table);

    let health = warp::path("healthz")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"status": "ok", "version": crate::VERSION})));

    page.or(contact)
        .or(sections)
        .or(health)
        .with(warp::trace::request())
}

/// UI state from the raw query string; repeated keys keep the last value
fn page_query() -> impl Filter<Extract = (PageQuery,), Error = std::convert::Infallible> + Clone {
    warp::query::raw()
        .or(warp::any().map(String::new))
        .unify()
        .map(|raw: String| PageQuery::parse(&raw))
}

async fn render_page(query: PageQuery, state: AppState) -> warp::reply::Html<String> {
    warp::reply::html(state.composer.render(&query, None).await)
}

async fn submit_contact(form: ContactForm, state: AppState) -> warp::reply::Html<String> {
    let submission = submit(form, state.delivery.as_ref()).await;
    let query = PageQuery {
        contact: Some("open".to_string()),
        ..PageQuery::default()
    };
    warp::reply::html(state.composer.render(&query, Some(&submission)).await)
}

async fn section_table(state: AppState) -> warp::reply::Json {
    let snapshot = state.composer.snapshot().await;
    warp::reply::json(&snapshot.table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_page::PageSettings;
    use folio_test_utils::{sample_source, RecordingDelivery};
    use std::time::Duration;

    fn state(delivery: Arc<RecordingDelivery>) -> AppState {
        let settings = PageSettings::default().with_render_budget(Duration::from_secs(5));
        AppState::new(PageComposer::new(sample_source(), settings), delivery)
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let routes = routes(state(Arc::new(RecordingDelivery::new())));
        let res = warp::test::request().path("/healthz").reply(&routes).await;
        assert_eq!(res.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let routes = routes(state(Arc::new(RecordingDelivery::new())));
        let res = warp::test::request().path("/admin").reply(&routes).await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn contact_requires_post() {
        let routes = routes(state(Arc::new(RecordingDelivery::new())));
        let res = warp::test::request().method("GET").path("/contact").reply(&routes).await;
        assert_eq!(res.status(), 405);
    }
}
