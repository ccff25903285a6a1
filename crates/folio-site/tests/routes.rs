//! End-to-end route tests driving the router in-process.

use std::fs;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, HOST, LOCATION, REFERER, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use folio_content::ProjectResolver;
use folio_projects::{Category, ProjectRecord, Registry};
use folio_site::{SiteOptions, SiteState, Theme, create_router};
use tempfile::TempDir;
use tower::ServiceExt;

const TIDETRACK: &str = "---
title: TideTrack
year: 2024
description: Forecasting harmful algae blooms
githubUrl: https://github.com/tzuhan2424/kean-capstone
technologies: [Python, React]
---
# Overview

See [the data](https://example.org/data) and ![map]().

<script>alert(1)</script>
";

struct Site {
    _content: TempDir,
    state: SiteState,
}

fn site(options: SiteOptions) -> Site {
    let content = TempDir::new().unwrap();
    fs::write(content.path().join("tidetrack.md"), TIDETRACK).unwrap();
    fs::write(content.path().join("broken.md"), "---\ntitle: [open\n").unwrap();

    let registry = Registry::new(vec![
        ProjectRecord::new("alpha", "Alpha", Category::Personal).with_href("/projects/alpha"),
        ProjectRecord::new("beta", "Beta", Category::Work).hidden(),
        ProjectRecord::new("tidetrack", "TideTrack", Category::Personal)
            .with_href("/projects/tidetrack"),
    ]);
    let state = SiteState::new(registry, ProjectResolver::new(content.path()), options);
    Site {
        _content: content,
        state,
    }
}

async fn send(site: &Site, request: Request<Body>) -> Response {
    create_router(site.state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

async fn get(site: &Site, uri: &str) -> Response {
    send(site, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_shows_visible_projects_in_order() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let alpha = html.find("data-project=\"alpha\"").unwrap();
    let tide = html.find("data-project=\"tidetrack\"").unwrap();
    assert!(alpha < tide);
    assert!(!html.contains("data-project=\"beta\""));
    assert!(html.contains("class=\"section-visible\""));
    assert!(!html.contains("class=\"section-hidden\""));
}

#[tokio::test]
async fn test_project_detail() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/projects/tidetrack").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1 class=\"project-title\">TideTrack</h1>"));
    assert!(html.contains("2024"));
    assert!(html.contains("View Code"));
    assert!(!html.contains("View Live"));
    assert!(html.contains(
        "href=\"https://example.org/data\" target=\"_blank\" rel=\"noopener noreferrer\""
    ));
    assert!(html.contains("src=\"/placeholder.svg\""));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_missing_project_is_not_found_view() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/projects/sample-project").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("Project Not Found"));
    assert!(html.contains("Back to Resume"));
}

#[tokio::test]
async fn test_malformed_project_is_not_found_view() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/projects/broken").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Project Not Found"));
}

#[tokio::test]
async fn test_traversal_slug_is_not_found_view() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/projects/..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Project Not Found"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found_view() {
    let site = site(SiteOptions::default());
    let response = get(&site, "/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Project Not Found"));
}

#[tokio::test]
async fn test_health_and_stylesheet() {
    let site = site(SiteOptions::default());

    let response = get(&site, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let response = get(&site, "/assets/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
}

#[tokio::test]
async fn test_theme_cookie_selects_theme() {
    let site = site(SiteOptions::default());
    let request = Request::get("/")
        .header(COOKIE, "theme=dark")
        .body(Body::empty())
        .unwrap();
    let html = body_text(send(&site, request).await).await;
    assert!(html.contains("<html lang=\"en\" class=\"dark\">"));

    let html = body_text(get(&site, "/").await).await;
    assert!(html.contains("<html lang=\"en\" class=\"light\">"));
}

#[tokio::test]
async fn test_default_theme_option() {
    let site = site(SiteOptions::default().with_default_theme(Theme::Dark));
    let html = body_text(get(&site, "/").await).await;
    assert!(html.contains("class=\"dark\""));
}

#[tokio::test]
async fn test_theme_toggle_sets_cookie_and_redirects_back() {
    let site = site(SiteOptions::default());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/theme")
        .header(COOKIE, "theme=light")
        .header(REFERER, "/projects/tidetrack")
        .body(Body::empty())
        .unwrap();
    let response = send(&site, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/projects/tidetrack");
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("theme=dark;"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_base_path_prefixes_routes_and_links() {
    let site = site(SiteOptions::default().with_base_path("/portfolio"));

    let response = get(&site, "/portfolio").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("href=\"/portfolio/projects/tidetrack\""));
    assert!(html.contains("href=\"/portfolio/assets/site.css\""));
    assert!(html.contains("action=\"/portfolio/theme\""));

    let response = get(&site, "/portfolio/projects/tidetrack").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&site, "/projects/tidetrack").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_directory() {
    let public = TempDir::new().unwrap();
    fs::create_dir(public.path().join("images")).unwrap();
    fs::write(public.path().join("images").join("tidetrack.png"), b"png").unwrap();

    let site = site(SiteOptions::default().with_static_dir(public.path()));

    let response = get(&site, "/images/tidetrack.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "png");

    let response = get(&site, "/images/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Project Not Found"));
}

#[tokio::test]
async fn test_base_path_prefixes_markdown_images() {
    let public = TempDir::new().unwrap();
    fs::write(public.path().join("placeholder.svg"), "<svg/>").unwrap();
    let site = site(
        SiteOptions::default()
            .with_base_path("/portfolio")
            .with_static_dir(public.path()),
    );

    let response = get(&site, "/portfolio/projects/tidetrack").await;
    let html = body_text(response).await;
    assert!(html.contains("src=\"/portfolio/placeholder.svg\""));
    assert!(!html.contains("src=\"/placeholder.svg\""));
    assert!(html.contains("href=\"https://example.org/data\""));

    let response = get(&site, "/portfolio/placeholder.svg").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_base_path_with_trailing_slash_redirects_home() {
    let site = site(SiteOptions::default().with_base_path("/portfolio"));
    let response = get(&site, "/portfolio/").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/portfolio");
}

#[tokio::test]
async fn test_theme_toggle_ignores_protocol_relative_referer() {
    let site = site(SiteOptions::default());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/theme")
        .header(HOST, "site.example")
        .header(REFERER, "https://site.example//evil.example/x")
        .body(Body::empty())
        .unwrap();
    let response = send(&site, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");
}
