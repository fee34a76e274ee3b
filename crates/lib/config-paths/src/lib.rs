//! Opinionated default configuration file paths for icongen.

use std::path::{Path, PathBuf};

use either::Either;

/// Returns an iterator over default configuration file paths.
///
/// The paths are yielded in order of preference:
/// 1. Project root - visible and hidden variants
/// 2. The desktop shell directory inside the project
/// 3. User-specific config directory (XDG standard)
pub fn defaults(project_root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    let project_paths = [
        project_root.join("icongen.yaml"),
        project_root.join(".icongen.yaml"),
        project_root.join("src-tauri/icongen.yaml"),
    ];
    let user_path = dirs::config_dir()
        .into_iter()
        .map(|d| d.join("icongen/config.yaml"));

    project_paths.into_iter().chain(user_path)
}

/// Resolves configuration paths based on environment override or defaults.
///
/// If an environment path is provided, returns an iterator containing only that path,
/// resolved against the project root when relative.
/// Otherwise, returns the default configuration paths.
pub fn resolve(
    env_path: Option<PathBuf>,
    project_root: &Path,
) -> impl Iterator<Item = PathBuf> + use<> {
    match env_path {
        Some(val) => Either::Left(std::iter::once(project_root.join(val))),
        None => Either::Right(defaults(project_root)),
    }
}
