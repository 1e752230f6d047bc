/*!
 * Shared helpers and built-in defaults
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Names excluded from every scan, at any depth
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["node_modules", ".git", "dist", "build", ".vscode", "out"]);

/// Base name of a path, falling back to the path itself for roots like `/`
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
