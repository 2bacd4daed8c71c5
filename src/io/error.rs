//! Error types for generation, construction, and collapse

use crate::lattice::coord::Coord;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A node's domain emptied: no consistent assignment is reachable
    ///
    /// A legitimate terminal outcome, not a bug. The engine performs no
    /// backtracking or restart; the caller decides whether to retry with a
    /// new seed, relax constraints, or abort.
    Contradiction {
        /// Coordinate of the first impossible node
        coordinate: Coord,
        /// Observation steps performed when the contradiction surfaced
        observations: usize,
    },

    /// The observation cap was hit before the lattice collapsed
    StepBudgetExhausted {
        /// The configured cap
        budget: usize,
    },

    /// The generator was frozen without producing any variants
    NothingIngested,

    /// A lattice was requested over an empty prototype library
    EmptyPrototypeSet,

    /// A coordinate names no node in the lattice
    UnknownCoordinate {
        /// The unresolvable coordinate
        coordinate: Coord,
    },

    /// Resolved output was requested before the lattice fully collapsed
    NotCollapsed {
        /// First coordinate whose domain is not a singleton
        coordinate: Coord,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction {
                coordinate,
                observations,
            } => {
                write!(
                    f,
                    "Contradiction at {coordinate} after {observations} observations"
                )
            }
            Self::StepBudgetExhausted { budget } => {
                write!(f, "Step budget of {budget} observations exhausted")
            }
            Self::NothingIngested => {
                write!(f, "Prototype generator frozen before any tile was ingested")
            }
            Self::EmptyPrototypeSet => {
                write!(f, "Cannot build a lattice over an empty prototype set")
            }
            Self::UnknownCoordinate { coordinate } => {
                write!(f, "No node exists at coordinate {coordinate}")
            }
            Self::NotCollapsed { coordinate } => {
                write!(f, "Node at {coordinate} has not collapsed to a single prototype")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
