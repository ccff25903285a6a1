//! Handler functions for the site commands.
//!
//! `serve` runs the router; `projects`, `render` and `check` inspect the
//! registry and content directory without starting a server.

use folio_content::ProjectResolver;
use folio_core::{Error, Result};
use folio_projects::{Category, CategoryInfo, ProjectRecord, Registry};
use folio_site::views::{self, PageContext};
use folio_site::{SiteState, run_server};
use tracing::{debug, info};

use crate::config::FolioConfig;

/// Prefix of registry hrefs that point at a project detail page.
const DETAIL_PREFIX: &str = "/projects/";

// ============================================================================
// serve
// ============================================================================

/// Serve the site until interrupted.
pub async fn handle_serve(
    config: &FolioConfig,
    host: Option<&str>,
    port: Option<u16>,
) -> Result<()> {
    let addr = config.socket_addr(host, port)?;
    let resolver = config.resolver()?;
    info!(
        "Serving {} from {}",
        config.project_name,
        resolver.content_dir().display()
    );

    let state = SiteState::new(Registry::builtin(), resolver, config.site_options());
    run_server(state, addr).await
}

// ============================================================================
// projects
// ============================================================================

/// Print the visible projects, optionally filtered to one category.
pub fn handle_projects(registry: &Registry, category: Option<Category>, json: bool) -> Result<()> {
    let projects = match category {
        Some(category) => registry.list_by_category(category),
        None => registry.list_visible_projects(),
    };

    if json {
        let out = serde_json::to_string_pretty(&projects)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        println!("{out}");
    } else {
        print!("{}", format_projects(&projects));
    }
    Ok(())
}

/// One line per project: id, category, title and destination, then the
/// repository when it differs from the destination.
fn format_projects(projects: &[&ProjectRecord]) -> String {
    let id_width = projects.iter().map(|p| p.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for p in projects {
        out.push_str(&format!(
            "{:<id_width$}  {:<11}  {}  ->  {}",
            p.id,
            p.category.as_str(),
            p.title,
            if p.href.is_empty() { "-" } else { p.href.as_str() },
        ));
        if let Some(repo) = p.repo_url().filter(|repo| *repo != p.href) {
            out.push_str(&format!("  (repo: {repo})"));
        }
        out.push('\n');
    }
    out
}

/// Print visible project counts per category.
pub fn handle_categories(registry: &Registry, json: bool) -> Result<()> {
    let categories = registry.categories();
    if json {
        let out = serde_json::to_string_pretty(&categories)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        println!("{out}");
    } else {
        print!("{}", format_categories(&categories));
    }
    Ok(())
}

fn format_categories(categories: &[CategoryInfo]) -> String {
    categories
        .iter()
        .map(|c| format!("{:<11}  {:<12}  {}\n", c.id.as_str(), c.name, c.count))
        .collect()
}

// ============================================================================
// render
// ============================================================================

/// Print the detail page for `slug`.
pub async fn handle_render(config: &FolioConfig, slug: &str) -> Result<()> {
    let resolver = config.resolver()?;
    let ctx = PageContext::new(
        config.site.default_theme,
        config.site_options().base_path,
    );
    println!("{}", render_page(&resolver, &ctx, slug).await?);
    Ok(())
}

/// Load `slug` and render its page, surfacing the load error.
async fn render_page(resolver: &ProjectResolver, ctx: &PageContext, slug: &str) -> Result<String> {
    let doc = resolver.load(slug).await?;
    Ok(views::project::render(ctx, &doc))
}

// ============================================================================
// check
// ============================================================================

/// Outcome of checking the registry against the content directory.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Documents that parsed.
    pub passed: Vec<String>,
    /// Documents or registry entries that are broken, with the reason.
    pub errors: Vec<(String, String)>,
    /// Things that work but probably are not intended.
    pub warnings: Vec<(String, String)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse every document and cross-check it with the registry.
pub async fn check_content(registry: &Registry, resolver: &ProjectResolver) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    let slugs = resolver.list_slugs().await?;
    for slug in &slugs {
        match resolver.load(slug).await {
            Ok(_) => report.passed.push(slug.clone()),
            Err(e) => report.errors.push((slug.clone(), e.to_string())),
        }
    }

    for id in registry.duplicate_ids() {
        report
            .errors
            .push((id.to_string(), "duplicate registry id".to_string()));
    }

    for record in registry.list_visible_projects() {
        if let Some(slug) = record.href.strip_prefix(DETAIL_PREFIX)
            && !slugs.iter().any(|s| s == slug)
        {
            report.warnings.push((
                record.id.clone(),
                format!("links to {} but there is no {slug}.md", record.href),
            ));
        }
    }

    debug!(
        "Checked {} document(s): {} error(s), {} warning(s)",
        slugs.len(),
        report.errors.len(),
        report.warnings.len()
    );
    Ok(report)
}

/// Run the content check and print a report.
pub async fn handle_check(config: &FolioConfig) -> Result<()> {
    let resolver = config.resolver()?;
    println!("Checking {}", resolver.content_dir().display());

    let report = check_content(&Registry::builtin(), &resolver).await?;
    for slug in &report.passed {
        println!("  ok    {slug}");
    }
    for (subject, message) in &report.errors {
        println!("  ERROR {subject}: {message}");
    }
    for (subject, message) in &report.warnings {
        println!("  WARN  {subject}: {message}");
    }

    if report.is_ok() {
        println!("All {} document(s) are valid.", report.passed.len());
        Ok(())
    } else {
        Err(Error::invalid_data(format!(
            "{} problem(s) found",
            report.errors.len()
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_site::{BasePath, Theme};
    use std::fs;
    use tempfile::TempDir;

    fn content() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tidetrack.md"),
            "---\ntitle: TideTrack\nyear: 2024\n---\n# Overview\n",
        )
        .unwrap();
        dir
    }

    fn registry() -> Registry {
        Registry::new(vec![
            ProjectRecord::new("tidetrack", "TideTrack", Category::Personal)
                .with_href("/projects/tidetrack"),
            ProjectRecord::new("ghost", "Ghost", Category::Work).with_href("/projects/ghost"),
            ProjectRecord::new("site", "Site", Category::OpenSource)
                .with_href("https://example.org"),
            ProjectRecord::new("draft", "Draft", Category::Work)
                .with_href("/projects/draft")
                .hidden(),
        ])
    }

    #[test]
    fn test_format_projects() {
        let registry = registry();
        let out = format_projects(&registry.list_visible_projects());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tidetrack  personal"));
        assert!(lines[0].ends_with("->  /projects/tidetrack"));
        assert!(lines[2].contains("open-source"));
        assert!(!out.contains("draft"));
    }

    #[test]
    fn test_format_projects_shows_repo_when_not_the_destination() {
        let record = ProjectRecord::new("tidetrack", "TideTrack", Category::Personal)
            .with_href("/projects/tidetrack")
            .with_repo("tzuhan2424", "kean-capstone");
        assert!(
            format_projects(&[&record])
                .ends_with("(repo: https://github.com/tzuhan2424/kean-capstone)\n")
        );

        let record = ProjectRecord::new("pipe", "Pipe", Category::Work)
            .with_href("https://github.com/hhtzuhh/price-pipeline")
            .with_repo("hhtzuhh", "price-pipeline");
        assert!(!format_projects(&[&record]).contains("repo:"));
    }

    #[test]
    fn test_format_categories() {
        let registry = registry();
        let out = format_categories(&registry.categories());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l.starts_with("personal") && l.ends_with(" 1")));
        assert!(lines.iter().any(|l| l.starts_with("work") && l.ends_with(" 1")));
        assert!(handle_categories(&registry, true).is_ok());
    }

    #[test]
    fn test_format_projects_empty_href() {
        let record = ProjectRecord::new("x", "X", Category::Academic);
        assert!(format_projects(&[&record]).ends_with("->  -\n"));
    }

    #[test]
    fn test_handle_projects() {
        let registry = registry();
        assert!(handle_projects(&registry, None, false).is_ok());
        assert!(handle_projects(&registry, Some(Category::Work), true).is_ok());
    }

    #[tokio::test]
    async fn test_render_page() {
        let dir = content();
        let resolver = ProjectResolver::new(dir.path());
        let ctx = PageContext::new(Theme::Light, BasePath::default());

        let html = render_page(&resolver, &ctx, "tidetrack").await.unwrap();
        assert!(html.contains("<h1 class=\"project-title\">TideTrack</h1>"));
        assert!(html.contains("<h1 class=\"md-h1\">Overview</h1>"));
    }

    #[tokio::test]
    async fn test_render_page_missing() {
        let dir = content();
        let resolver = ProjectResolver::new(dir.path());
        let ctx = PageContext::new(Theme::Light, BasePath::default());

        let err = render_page(&resolver, &ctx, "sample-project").await.unwrap_err();
        assert!(err.is_content_missing());
    }

    #[tokio::test]
    async fn test_check_content() {
        let dir = content();
        fs::write(dir.path().join("broken.md"), "---\ntitle: [open\n").unwrap();
        let resolver = ProjectResolver::new(dir.path());

        let report = check_content(&registry(), &resolver).await.unwrap();
        assert_eq!(report.passed, vec!["tidetrack".to_string()]);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].0, "broken");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].0, "ghost");
        assert!(!report.is_ok());
    }

    #[tokio::test]
    async fn test_check_content_duplicate_ids() {
        let dir = content();
        let resolver = ProjectResolver::new(dir.path());
        let registry = Registry::new(vec![
            ProjectRecord::new("tidetrack", "A", Category::Personal),
            ProjectRecord::new("tidetrack", "B", Category::Personal),
        ]);

        let report = check_content(&registry, &resolver).await.unwrap();
        assert_eq!(
            report.errors,
            vec![("tidetrack".to_string(), "duplicate registry id".to_string())]
        );
    }

    #[tokio::test]
    async fn test_check_content_missing_directory() {
        let dir = TempDir::new().unwrap();
        let resolver = ProjectResolver::new(dir.path().join("nope"));
        let report = check_content(&Registry::default(), &resolver).await.unwrap();
        assert!(report.passed.is_empty());
        assert!(report.is_ok());
    }
}
