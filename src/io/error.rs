//! Error types for seeding, generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A font or glyph needed for seeding could not be obtained
    ///
    /// Seeding never falls back to an unseeded grid, because the grid size
    /// is derived from the rasterized content.
    ResourceUnavailable {
        /// Font path or glyph description
        resource: String,
        /// Why the resource is unusable
        reason: String,
    },

    /// A coordinate falls outside the carve-able interior
    OutOfBounds {
        /// Offending coordinate as `[x, y]`
        position: [i32; 2],
        /// Interior dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Generation cannot start from the requested cell
    InvalidStart {
        /// Requested start coordinate as `[x, y]`
        position: [i32; 2],
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

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { resource, reason } => {
                write!(f, "Resource '{resource}' is unavailable: {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} maze interior",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidStart { position } => {
                write!(
                    f,
                    "Cannot start generation at ({}, {}): cell is solid or out of bounds",
                    position[0], position[1]
                )
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

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a resource unavailable error
pub fn resource_unavailable(resource: &impl ToString, reason: &impl ToString) -> MazeError {
    MazeError::ResourceUnavailable {
        resource: resource.to_string(),
        reason: reason.to_string(),
    }
}
