//! Path helpers.
//!
//! Generic path handling shared by the content resolver and the CLI config
//! layer.

use std::path::{Component, Path, PathBuf};

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use folio_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/site/content");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// True when `name` is a single normal path component.
///
/// Rejects empty names, `.`, `..`, anything containing a separator and
/// absolute paths. This is a lexical check only; see [`is_within`] for the
/// filesystem-level check.
pub fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// True when `path` lies inside `root` once both are canonicalised.
///
/// Follows symlinks, so a link inside `root` pointing elsewhere is rejected.
/// Any error while canonicalising (e.g. the path does not exist) yields
/// `false`.
pub async fn is_within(root: &Path, path: &Path) -> bool {
    let (root, path) = match (
        tokio::fs::canonicalize(root).await,
        tokio::fs::canonicalize(path).await,
    ) {
        (Ok(r), Ok(p)) => (r, p),
        _ => return false,
    };
    path.starts_with(&root) && path != root
}
