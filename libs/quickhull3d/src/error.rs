//! # Error Types
//!
//! Error types for hull construction. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO partial hull is exposed when a build fails
//! - Bad input and algorithm defects are distinct variants
//! - Errors include context for debugging

use config::constants::ConfigError;
use std::fmt;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// The kind of degeneracy detected while building the initial simplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// All points lie within the tolerance of a single point.
    Coincident,
    /// All points lie within the tolerance of a single line.
    Collinear,
    /// All points lie within the tolerance of a single plane.
    Coplanar,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Degeneracy::Coincident => "coincident",
            Degeneracy::Collinear => "collinear",
            Degeneracy::Coplanar => "coplanar",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building or validating a hull.
///
/// ## Example
///
/// ```rust
/// use quickhull3d::{Degeneracy, HullError, QuickHull3d, Vec3};
///
/// let points = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
/// ];
/// let mut hull = QuickHull3d::new();
/// match hull.build(&points) {
///     Err(HullError::DegenerateInput(Degeneracy::Coplanar)) => {}
///     other => panic!("expected coplanar rejection, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// The input was rejected before any geometry ran.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        message: String,
    },

    /// The points do not span a volume.
    #[error("Degenerate input: points appear to be {0}")]
    DegenerateInput(Degeneracy),

    /// A mesh invariant was violated. This is an algorithm defect, not bad
    /// input.
    #[error("Internal inconsistency: {message}")]
    InternalInconsistency {
        /// Description of the violated invariant.
        message: String,
    },

    /// The finished hull failed a convexity or containment check.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the failed check.
        message: String,
    },

    /// Invalid tolerance configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an internal inconsistency error.
    pub fn inconsistency(message: impl Into<String>) -> Self {
        Self::InternalInconsistency {
            message: message.into(),
        }
    }

    /// Creates a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = HullError::DegenerateInput(Degeneracy::Collinear);
        assert_eq!(err.to_string(), "Degenerate input: points appear to be collinear");

        let err = HullError::invalid_input("3 points given");
        assert!(err.to_string().contains("3 points given"));

        let err = HullError::inconsistency("unreflected half edge 3-4");
        assert!(err.to_string().contains("Internal inconsistency"));
        assert!(err.to_string().contains("3-4"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: HullError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, HullError::Config(ConfigError::InvalidTolerance(_))));
    }

    /// Test error types are Send + Sync for use across rayon workers.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
