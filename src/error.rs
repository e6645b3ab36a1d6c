//! Error handling for the navigation service.
//!
//! Every fallible operation in the crate returns [`Result<T>`], whose error
//! type is [`NavigationError`]. The variants fall into five groups:
//!
//! | Group         | Variants                                                 |
//! |---------------|----------------------------------------------------------|
//! | Page specs    | [`InvalidPageSpec`](NavigationError::InvalidPageSpec)    |
//! | Registry      | [`DuplicateContainer`](NavigationError::DuplicateContainer), [`ContainerNotFound`](NavigationError::ContainerNotFound) |
//! | Hrefs         | [`HrefResolution`](NavigationError::HrefResolution)      |
//! | Route table   | [`RouteNotFound`](NavigationError::RouteNotFound), [`MissingParameter`](NavigationError::MissingParameter), [`InvalidRoute`](NavigationError::InvalidRoute) |
//! | Configuration | [`Config`](NavigationError::Config)                      |
//!
//! Errors are returned at the point of detection. Nothing in the crate
//! retries; the host application decides how to degrade.
//!
//! # Examples
//!
//! ```
//! use site_navigator::NavigationError;
//!
//! let err = NavigationError::ContainerNotFound { name: "footer".into() };
//! assert_eq!(err.to_string(), "Container not found: footer");
//! assert!(err.is_registry_error());
//! ```

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Detailed error variants produced by the navigation service.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display) for
/// idiomatic error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A page specification is malformed.
    ///
    /// `location` points at the offending spec, e.g. `root.pages[1]`.
    InvalidPageSpec { location: String, message: String },

    /// A container is already registered under this name.
    DuplicateContainer { name: String },

    /// No container is registered under this name.
    ContainerNotFound { name: String },

    /// No `get.href` listener produced a usable href for the page.
    HrefResolution { page: String },

    /// The route table has no route with this name.
    RouteNotFound { name: String },

    /// URL assembly needed a parameter that was not supplied.
    MissingParameter { route: String, param: String },

    /// A route pattern could not be registered.
    InvalidRoute { pattern: String, message: String },

    /// Configuration could not be parsed.
    Config { message: String },
}

impl NavigationError {
    pub(crate) fn invalid_spec(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPageSpec {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Check if this error comes from page specification validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidPageSpec { .. })
    }

    /// Check if this error comes from container registry misuse.
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateContainer { .. } | Self::ContainerNotFound { .. }
        )
    }

    /// Check if this error is an href resolution failure.
    pub fn is_href_error(&self) -> bool {
        matches!(self, Self::HrefResolution { .. })
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidPageSpec { location, message } => {
                write!(f, "Invalid page spec at {}: {}", location, message)
            }
            NavigationError::DuplicateContainer { name } => {
                write!(f, "Container already registered: {}", name)
            }
            NavigationError::ContainerNotFound { name } => {
                write!(f, "Container not found: {}", name)
            }
            NavigationError::HrefResolution { page } => {
                write!(f, "Unable to resolve href for page: {}", page)
            }
            NavigationError::RouteNotFound { name } => {
                write!(f, "Route not found: {}", name)
            }
            NavigationError::MissingParameter { route, param } => {
                write!(f, "Missing parameter '{}' for route '{}'", param, route)
            }
            NavigationError::InvalidRoute { pattern, message } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, message)
            }
            NavigationError::Config { message } => {
                write!(f, "Invalid navigation config: {}", message)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl From<serde_json::Error> for NavigationError {
    fn from(err: serde_json::Error) -> Self {
        NavigationError::Config {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NavigationError {
    fn from(err: toml::de::Error) -> Self {
        NavigationError::Config {
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spec_display() {
        let error = NavigationError::invalid_spec("root.pages[0]", "missing 'name'");
        assert_eq!(
            error.to_string(),
            "Invalid page spec at root.pages[0]: missing 'name'"
        );
        assert!(error.is_validation_error());
        assert!(!error.is_registry_error());
    }

    #[test]
    fn test_registry_errors() {
        let duplicate = NavigationError::DuplicateContainer {
            name: "main".to_string(),
        };
        assert_eq!(duplicate.to_string(), "Container already registered: main");
        assert!(duplicate.is_registry_error());

        let missing = NavigationError::ContainerNotFound {
            name: "missing".to_string(),
        };
        assert!(missing.is_registry_error());
        assert!(!missing.is_href_error());
    }

    #[test]
    fn test_missing_parameter_display() {
        let error = NavigationError::MissingParameter {
            route: "user".to_string(),
            param: "id".to_string(),
        };
        assert_eq!(error.to_string(), "Missing parameter 'id' for route 'user'");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = NavigationError::from(err);
        assert!(matches!(error, NavigationError::Config { .. }));
    }
}
