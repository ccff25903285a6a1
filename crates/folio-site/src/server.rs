//! Routes and the HTTP server loop.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Path, State};
use axum::handler::Handler;
use axum::http::header::{CONTENT_TYPE, HOST, REFERER, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use folio_core::Result;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::reveal::RevealLatch;
use crate::state::SiteState;
use crate::theme::{CookiePreferences, PreferenceStore};
use crate::views::{self, PageContext, SITE_CSS, STYLESHEET_PATH};

/// Build the application router.
///
/// Every route is mounted under the configured base path. Paths no route
/// matches are looked up in the static directory, then fall back to the
/// not-found page.
pub fn create_router(state: SiteState) -> Router {
    let mut routes = Router::new()
        .route("/", get(home))
        .route("/projects/{slug}", get(project_detail))
        .route("/theme", post(toggle_theme))
        .route("/health", get(health))
        .route(STYLESHEET_PATH, get(stylesheet));

    routes = match &state.options.static_dir {
        Some(dir) => routes.fallback_service(
            ServeDir::new(dir).not_found_service(not_found.with_state(state.clone())),
        ),
        None => routes.fallback(not_found),
    };

    let base = state.base_path().clone();
    let app = if base.is_root() {
        routes
    } else {
        Router::new()
            .nest(base.as_str(), routes)
            .route(&format!("{}/", base.as_str()), get(home_with_slash))
            .fallback(not_found)
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Serve until Ctrl-C.
pub async fn run_server(state: SiteState, addr: SocketAddr) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ============================================================================
// Handlers
// ============================================================================

fn page_context(state: &SiteState, headers: &HeaderMap) -> PageContext {
    let theme = CookiePreferences::from_headers(headers).theme_or(state.options.default_theme);
    PageContext::new(theme, state.base_path().clone())
}

async fn home(State(state): State<SiteState>, headers: HeaderMap) -> Html<String> {
    let ctx = page_context(&state, &headers);
    let projects = state.registry.list_visible_projects();
    // No viewport on the server, so every section counts as entered.
    let reveal = RevealLatch::all_entered(views::home::REVEAL_SECTIONS);
    Html(views::home::render(&ctx, &state.profile, &projects, &reveal))
}

/// The base path with a trailing slash redirects to the home page.
async fn home_with_slash(State(state): State<SiteState>) -> Redirect {
    Redirect::permanent(&state.base_path().home())
}

async fn project_detail(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = page_context(&state, &headers);
    match state.resolver.resolve(&slug).await {
        Some(doc) => Html(views::project::render(&ctx, &doc)).into_response(),
        None => {
            debug!("No project document for '{slug}'");
            (StatusCode::NOT_FOUND, Html(views::not_found::render(&ctx))).into_response()
        }
    }
}

async fn not_found(State(state): State<SiteState>, headers: HeaderMap) -> Response {
    let ctx = page_context(&state, &headers);
    (StatusCode::NOT_FOUND, Html(views::not_found::render(&ctx))).into_response()
}

async fn toggle_theme(State(state): State<SiteState>, headers: HeaderMap) -> Response {
    let mut prefs = CookiePreferences::from_headers(&headers).with_path(state.base_path().home());
    let theme = prefs.theme_or(state.options.default_theme).toggled();
    prefs.set_theme(theme);
    debug!("Theme switched to {theme}");

    let target = return_target(&headers).unwrap_or_else(|| state.base_path().home());
    let mut response = Redirect::to(&target).into_response();
    for cookie in prefs.set_cookie_headers() {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping unencodable cookie: {e}"),
        }
    }
    response
}

/// Same-site path from the `Referer` header, if there is one.
fn return_target(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    if referer.starts_with('/') {
        return is_local_path(referer).then(|| referer.to_string());
    }

    let host = headers.get(HOST)?.to_str().ok()?;
    let rest = referer
        .strip_prefix("http://")
        .or_else(|| referer.strip_prefix("https://"))?;
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, "/"),
    };
    (authority.eq_ignore_ascii_case(host) && is_local_path(path)).then(|| path.to_string())
}

/// A path browsers resolve against the current origin. `//x` and `/\x` are
/// read as a host.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

async fn health() -> &'static str {
    "ok"
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/css; charset=utf-8")],
        SITE_CSS,
    )
}
