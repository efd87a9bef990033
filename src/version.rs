use semver::Version;

/// Version stamped on the output when no input declares a parseable one.
pub fn default_version() -> Version {
    Version::new(3, 0, 0)
}

/// Parse a declared version string into a candidate.
///
/// Absent or malformed versions are an expected case, not an error; they
/// simply yield no candidate and are excluded from selection.
pub fn candidate(raw: &str) -> Option<Version> {
    Version::parse(raw.trim()).ok()
}

/// Outcome of version selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Semantically greatest version among the candidates
    Greatest(Version),
    /// No candidate parsed; the default is used and a warning is due
    Fallback(Version),
}

impl Selection {
    pub fn into_version(self) -> Version {
        match self {
            Selection::Greatest(v) | Selection::Fallback(v) => v,
        }
    }
}

/// Pick the version to stamp on the merged document.
///
/// The greatest candidate wins: a consumer of the newer schema accepts
/// content from older-versioned producers, so the merged report claims the
/// newest version among its sources.
pub fn select(candidates: Vec<Version>) -> Selection {
    match candidates.into_iter().max() {
        Some(v) => Selection::Greatest(v),
        None => Selection::Fallback(default_version()),
    }
}
