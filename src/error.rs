//! Configuration errors
//!
//! Navigation itself never fails: labels fall back to `"Page"` and an
//! impossible back/forward is a no-op. The only checked surface is the static
//! configuration a host hands to the controller, validated by
//! [`NavigationConfig::validate`](crate::NavigationConfig::validate).

use std::fmt;

/// Result alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Problems found in a [`NavigationConfig`](crate::NavigationConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configured path is not a canonical location path
    InvalidPath { path: String, reason: &'static str },

    /// The same concrete path is registered twice in one sub-menu table
    DuplicatePath { path: String },

    /// Two entries of one sub-menu table share an anchor id
    DuplicateId { section: String, id: String },

    /// A menu or sub-menu entry has a blank label
    EmptyLabel { path: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPath { path, reason } => {
                write!(f, "Invalid path '{}': {}", path, reason)
            }
            ConfigError::DuplicatePath { path } => {
                write!(f, "Duplicate sub-menu path: {}", path)
            }
            ConfigError::DuplicateId { section, id } => {
                write!(f, "Duplicate sub-menu id '{}' in {}", id, section)
            }
            ConfigError::EmptyLabel { path } => {
                write!(f, "Empty label for {}", path)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check that `path` is a canonical location path.
///
/// Canonical paths start with `/`, have no empty segments, and carry neither a
/// query string nor a hash.
pub fn validate_location_path(path: &str) -> ConfigResult<()> {
    let invalid = |reason| ConfigError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("path cannot be empty"));
    }
    if !path.starts_with('/') {
        return Err(invalid("path must start with '/'"));
    }
    if path.contains("//") {
        return Err(invalid("path cannot contain consecutive slashes"));
    }
    if path.contains('?') || path.contains('#') {
        return Err(invalid("path cannot carry a query string or hash"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(validate_location_path("/").is_ok());
        assert!(validate_location_path("/admissions").is_ok());
        assert!(validate_location_path("/programs/master-degree/ai").is_ok());
    }

    #[test]
    fn test_invalid_paths() {
        assert!(validate_location_path("").is_err());
        assert!(validate_location_path("admissions").is_err());
        assert!(validate_location_path("/schools//cs").is_err());
        assert!(validate_location_path("/admissions#fees").is_err());
        assert!(validate_location_path("/search?q=law").is_err());
    }

    #[test]
    fn test_error_display() {
        let error = ConfigError::DuplicateId {
            section: "Admissions".to_string(),
            id: "fees".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate sub-menu id 'fees' in Admissions");

        let error = ConfigError::InvalidPath {
            path: "schools".to_string(),
            reason: "path must start with '/'",
        };
        assert_eq!(
            error.to_string(),
            "Invalid path 'schools': path must start with '/'"
        );
    }
}
