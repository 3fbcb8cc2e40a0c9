use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// LoadError – everything that can go wrong between a path and a PointCloud
// ---------------------------------------------------------------------------

/// Failure while reading a point file or extracting its coordinates.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: not valid UTF-8 text")]
    Encoding { line: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} values but found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("need at least {required} columns but the table has {found}")]
    Shape { required: usize, found: usize },
}

/// Coarse error class, independent of the details carried by [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    FileAccess,
    Parse,
    Shape,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Io { .. } => LoadErrorKind::FileAccess,
            LoadError::Encoding { .. } | LoadError::Parse { .. } | LoadError::Ragged { .. } => {
                LoadErrorKind::Parse
            }
            LoadError::Shape { .. } => LoadErrorKind::Shape,
        }
    }
}
