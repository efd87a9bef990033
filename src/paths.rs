use std::path::{Path, PathBuf};

/// Resolve the base directory used to relativize absolute violation paths.
///
/// Precedence: CLI flag, then config file, then the current working
/// directory. A relative base is anchored at the current directory. `None`
/// means no base could be established and normalization is skipped.
pub fn resolve_base(cli: Option<&Path>, config: Option<&Path>) -> Option<PathBuf> {
    match cli.or(config) {
        Some(base) if base.is_absolute() => Some(base.to_path_buf()),
        Some(base) => std::env::current_dir().ok().map(|cwd| cwd.join(base)),
        None => std::env::current_dir().ok(),
    }
}

/// Rewrite `name` relative to `base` when it is absolute.
///
/// Relative paths pass through unchanged. When the relative computation
/// fails (e.g. the base itself is relative), the path is left unchanged —
/// normalization never fails the run.
pub fn relative_to(name: &str, base: &Path) -> String {
    let path = Path::new(name);
    if !path.is_absolute() {
        return name.to_string();
    }

    match pathdiff::diff_paths(path, base) {
        Some(rel) => rel.to_string_lossy().into_owned(),
        None => name.to_string(),
    }
}
