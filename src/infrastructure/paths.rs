//! Path helpers for operator-supplied file locations.

use std::path::PathBuf;

/// Expands a leading `~` to the `HOME` directory.
///
/// Paths without a tilde, and tilde paths when `HOME` is unset, are returned
/// unchanged.
///
/// ```
/// use compara::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/compara.toml").to_str(), Some("/etc/compara.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_with_home(path, home)
}

fn expand_with_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
