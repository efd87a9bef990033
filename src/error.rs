use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Any of these aborts the whole run; there is no
/// partial-output mode in which a bad input is skipped.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read input {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid checkstyle document", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("failed to write output {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
