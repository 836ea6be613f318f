//! Centralized numeric values shared by the hull engine.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Precision of an `f64` (machine epsilon).
///
/// # Examples
/// ```
/// use config::constants::DOUBLE_PREC;
/// assert_eq!(DOUBLE_PREC, f64::EPSILON);
/// ```
pub const DOUBLE_PREC: f64 = 2.2204460492503131e-16;

/// Multiplier applied to `DOUBLE_PREC` times the summed coordinate magnitudes
/// when the distance tolerance is computed automatically.
///
/// # Examples
/// ```
/// use config::constants::{AUTOMATIC_TOLERANCE_SCALE, DOUBLE_PREC};
/// let tol = AUTOMATIC_TOLERANCE_SCALE * DOUBLE_PREC * (1.0 + 1.0 + 1.0);
/// assert!(tol > 0.0);
/// ```
pub const AUTOMATIC_TOLERANCE_SCALE: f64 = 3.0;

// =============================================================================
// TOLERANCE MULTIPLES
// =============================================================================

/// Multiple of the tolerance below which the third and fourth simplex points
/// are considered collinear or coplanar with the first ones.
///
/// # Examples
/// ```
/// use config::constants::DEGENERACY_SCALE;
/// let tol = 1e-12;
/// let off_line_distance = 5e-11;
/// assert!(off_line_distance <= DEGENERACY_SCALE * tol);
/// ```
pub const DEGENERACY_SCALE: f64 = 100.0;

/// Multiple of the tolerance past which an unclaimed point is assigned to the
/// first new face it clears, without scanning the remaining new faces.
///
/// # Examples
/// ```
/// use config::constants::CLAIM_EARLY_EXIT_SCALE;
/// assert!(CLAIM_EARLY_EXIT_SCALE > 1.0);
/// ```
pub const CLAIM_EARLY_EXIT_SCALE: f64 = 1000.0;

/// Multiple of `characteristic_length * DOUBLE_PREC` below which a face's raw
/// area is too small to trust its normal during triangulation.
///
/// # Examples
/// ```
/// use config::constants::{DOUBLE_PREC, MIN_AREA_SCALE};
/// let min_area = MIN_AREA_SCALE * 2.0 * DOUBLE_PREC;
/// assert!(min_area < 1e-11);
/// ```
pub const MIN_AREA_SCALE: f64 = 1000.0;

/// Multiple of the tolerance an input point may lie above a face before
/// hull validation reports it as not contained.
///
/// # Examples
/// ```
/// use config::constants::POINT_CHECK_SCALE;
/// assert_eq!(POINT_CHECK_SCALE, 10.0);
/// ```
pub const POINT_CHECK_SCALE: f64 = 10.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of input points needed to span a volume.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

// =============================================================================
// TOLERANCE CONFIGURATION
// =============================================================================

/// How the distance tolerance of a hull build is obtained.
///
/// # Examples
/// ```
/// use config::constants::ToleranceMode;
/// assert_eq!(ToleranceMode::default(), ToleranceMode::Automatic);
/// let mode = ToleranceMode::explicit(1.0e-6).expect("valid tolerance");
/// assert_eq!(mode.explicit_value(), Some(1.0e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToleranceMode {
    /// Derive the tolerance from the magnitude of the input coordinates.
    #[default]
    Automatic,
    /// Use the given tolerance for every build.
    Explicit(f64),
}

impl ToleranceMode {
    /// Builds an explicit tolerance, rejecting zero, negative and non-finite
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ToleranceMode};
    /// assert_eq!(
    ///     ToleranceMode::explicit(0.0).unwrap_err(),
    ///     ConfigError::InvalidTolerance(0.0)
    /// );
    /// ```
    pub fn explicit(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self::Explicit(tolerance))
    }

    /// Returns the explicit tolerance, if one was configured.
    pub fn explicit_value(self) -> Option<f64> {
        match self {
            Self::Automatic => None,
            Self::Explicit(tolerance) => Some(tolerance),
        }
    }

    /// Resolves the tolerance for a point set whose per-axis maximum absolute
    /// coordinates sum to `coordinate_magnitude`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ToleranceMode, DOUBLE_PREC};
    /// let tol = ToleranceMode::Automatic.resolve(2.0);
    /// assert_eq!(tol, 3.0 * DOUBLE_PREC * 2.0);
    /// assert_eq!(ToleranceMode::Explicit(0.5).resolve(2.0), 0.5);
    /// ```
    pub fn resolve(self, coordinate_magnitude: f64) -> f64 {
        match self {
            Self::Automatic => AUTOMATIC_TOLERANCE_SCALE * DOUBLE_PREC * coordinate_magnitude,
            Self::Explicit(tolerance) => tolerance,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when an explicit tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
