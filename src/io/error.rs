//! Error types for pattern synthesis and the command-line front end

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Explicit generator name is not in the registry
    InvalidGenerator {
        /// The rejected generator name
        name: String,
    },

    /// A hexadecimal color option could not be parsed
    InvalidColor {
        /// Option that carried the color (`color` or `base_color`)
        option: &'static str,
        /// Provided value that failed to parse
        value: String,
    },

    /// A pre-supplied fingerprint is malformed
    InvalidHash {
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGenerator { name } => {
                write!(f, "The generator {name} does not exist.")
            }
            Self::InvalidColor { option, value } => {
                write!(f, "Invalid color for '{option}': '{value}' is not a hex color")
            }
            Self::InvalidHash { value, reason } => {
                write!(f, "Invalid hash '{value}': {reason}")
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

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid generator error
pub fn invalid_generator(name: &impl ToString) -> PatternError {
    PatternError::InvalidGenerator {
        name: name.to_string(),
    }
}

/// Create an invalid color error
pub fn invalid_color(option: &'static str, value: &impl ToString) -> PatternError {
    PatternError::InvalidColor {
        option,
        value: value.to_string(),
    }
}

/// Create an invalid hash error
pub fn invalid_hash(value: &impl ToString, reason: &impl ToString) -> PatternError {
    PatternError::InvalidHash {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O failure
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
