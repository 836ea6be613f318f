//! Independent hull builds spread over the rayon thread pool.

use super::QuickHull3d;
use crate::config::BuildConfig;
use crate::core::vec3::Vec3;
use crate::error::HullResult;
use rayon::prelude::*;

/// Builds one hull per point set in parallel with the default configuration.
///
/// Results come back in input order; a failing set yields its error in
/// place without affecting the others.
///
/// # Example
///
/// ```rust
/// use quickhull3d::{build_many, Vec3};
///
/// let tetra = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
/// let flat = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
/// let results = build_many(&[tetra, flat]);
/// assert_eq!(results.len(), 2);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn build_many<P>(point_sets: &[P]) -> Vec<HullResult<QuickHull3d>>
where
    P: AsRef<[Vec3]> + Sync,
{
    build_many_with_config(point_sets, BuildConfig::default())
}

/// As [`build_many`], with every build using `config`.
pub fn build_many_with_config<P>(point_sets: &[P], config: BuildConfig) -> Vec<HullResult<QuickHull3d>>
where
    P: AsRef<[Vec3]> + Sync,
{
    point_sets
        .par_iter()
        .map(|points| {
            let mut hull = QuickHull3d::with_config(config);
            hull.build(points.as_ref())?;
            Ok(hull)
        })
        .collect()
}
