//! # Config Crate
//!
//! Centralized configuration constants for the convex hull engine.
//! All magic numbers used by the robustness tests (machine precision and the
//! multiples of the distance tolerance) are defined here so the geometry
//! code never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ToleranceMode, AUTOMATIC_TOLERANCE_SCALE, DOUBLE_PREC};
//!
//! // Automatic tolerance for points whose largest coordinates sum to 3.0
//! let tolerance = AUTOMATIC_TOLERANCE_SCALE * DOUBLE_PREC * 3.0;
//! assert!(tolerance < 1e-14);
//!
//! // Explicit overrides are validated up front
//! assert!(ToleranceMode::explicit(1e-9).is_ok());
//! assert!(ToleranceMode::explicit(-1.0).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Scale Aware**: Tolerances are multiples of a data-derived base value
//! - **Validated**: Explicit overrides are rejected before any geometry runs

pub mod constants;

#[cfg(test)]
mod tests;
