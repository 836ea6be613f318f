//! Build-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace tolerance model so the hull builder
//! can stay decoupled from literal constants.

pub use config::constants::{ConfigError, ToleranceMode};

/// Hull build configuration.
///
/// # Examples
/// ```
/// use quickhull3d::{BuildConfig, ToleranceMode};
/// let cfg = BuildConfig::default();
/// assert_eq!(cfg.tolerance, ToleranceMode::Automatic);
/// assert_eq!(cfg.check_consistency, cfg!(debug_assertions));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    /// Where the distance tolerance comes from.
    pub tolerance: ToleranceMode,
    /// Re-check half-edge invariants after every merge and triangulation.
    pub check_consistency: bool,
}

impl BuildConfig {
    /// Configuration with a fixed distance tolerance.
    ///
    /// # Examples
    /// ```
    /// use quickhull3d::BuildConfig;
    /// let cfg = BuildConfig::with_explicit_tolerance(1.0e-9).unwrap();
    /// assert_eq!(cfg.tolerance.explicit_value(), Some(1.0e-9));
    /// assert!(BuildConfig::with_explicit_tolerance(-1.0).is_err());
    /// ```
    pub fn with_explicit_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: ToleranceMode::explicit(tolerance)?,
            ..Self::default()
        })
    }

    /// Returns a copy with consistency checks switched on or off.
    pub fn with_consistency_checks(mut self, enabled: bool) -> Self {
        self.check_consistency = enabled;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tolerance: ToleranceMode::Automatic,
            check_consistency: cfg!(debug_assertions),
        }
    }
}
