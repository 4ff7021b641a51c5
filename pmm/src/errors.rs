//! Error taxonomy for the plate-motion core.
//!
//! Every error here is terminal for the request that raised it; there is no
//! partial-result mode (a malformed boundary file yields no outline at all).

/// Errors raised by the catalog, parser, polygon, sampler, and corrector.
///
/// `Display` and `Error` are implemented by hand because `UnknownAbbrev`
/// carries a field named `source` (the boundary file path, per the spec)
/// that `thiserror` would otherwise mistake for an error-chain source.
#[derive(Debug)]
pub enum PmmError {
    /// Wrapper for standard I/O errors while reading a boundary file.
    Io(std::io::Error),
    /// Requested plate motion model is not one of the supported tables.
    UnknownModel {
        /// Model name as requested by the caller.
        name: String,
    },
    /// Boundary file extension does not declare a recognized coordinate order.
    UnknownCoordOrder {
        /// Extension found on the boundary file path.
        extension: String,
    },
    /// A data line did not hold exactly two numeric tokens.
    MalformedLine {
        /// 1-based line number in the source file.
        line_no: usize,
        /// Offending line content, verbatim.
        content: String,
    },
    /// A record header named an abbreviation absent from the catalog.
    UnknownAbbrev {
        /// Abbreviation as it appeared in the file header.
        abbrev: String,
        /// Boundary file (or other source) the header came from.
        source: String,
    },
    /// A requested plate has no parsed outline.
    PlateNotFound {
        /// Plate name as requested by the caller.
        name: String,
    },
    /// An outline ring has too few vertices to form a polygon.
    DegenerateRing {
        /// Number of vertices supplied.
        n_vertices: usize,
    },
    /// The polygon has no well-defined centroid (degenerate geometry).
    NoCentroid,
    /// Parallel input arrays disagree in length.
    LengthMismatch {
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },
    /// Sampler called with a zero-sized grid axis.
    EmptyGrid,
}

impl std::fmt::Display for PmmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PmmError::Io(err) => write!(f, "io error: {err}"),
            PmmError::UnknownModel { name } => write!(
                f,
                "unrecognized plate motion model: {name}; available models: GSRM, MORVEL"
            ),
            PmmError::UnknownCoordOrder { extension } => write!(
                f,
                "cannot recognize the lat/lon order from the file extension: .{extension}"
            ),
            PmmError::MalformedLine { line_no, content } => {
                write!(f, "malformed coordinate line {line_no}: {content:?}")
            }
            PmmError::UnknownAbbrev { abbrev, source } => {
                write!(f, "unknown plate abbreviation {abbrev:?} in {source}")
            }
            PmmError::PlateNotFound { name } => {
                write!(f, "no outline found for plate {name:?}")
            }
            PmmError::DegenerateRing { n_vertices } => write!(
                f,
                "degenerate outline ring: {n_vertices} vertices (need at least 3)"
            ),
            PmmError::NoCentroid => write!(f, "polygon centroid is undefined"),
            PmmError::LengthMismatch { left, right } => {
                write!(f, "parallel array length mismatch: {left} vs {right}")
            }
            PmmError::EmptyGrid => {
                write!(f, "sample grid must have at least one point per axis")
            }
        }
    }
}

impl std::error::Error for PmmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PmmError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PmmError {
    fn from(err: std::io::Error) -> Self {
        PmmError::Io(err)
    }
}
