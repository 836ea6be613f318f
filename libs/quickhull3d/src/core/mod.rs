//! Core geometric types for the hull engine.
//!
//! Includes the vector alias (`Vec3`) and the robust vector helpers the
//! QuickHull predicates rely on.

pub mod vec3;
