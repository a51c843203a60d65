//! Triangle geometry primitives
//!
//! Pure, deterministic functions computing the normal, area, and centroid of
//! a triangle from three world-space points. These are the building blocks of
//! the per-triangle drag loop and are recomputed every step; nothing here is
//! cached.
//!
//! # Winding
//!
//! The normal direction follows the vertex winding order of the mesh: for a
//! counter-clockwise triangle (viewed from outside) the normal points out of
//! the surface. A degenerate triangle (colinear or coincident points) has a
//! zero-length cross product and yields a zero normal and zero area, which
//! downstream code treats as "contributes no force".

use glam::Vec3;

/// Unit normal of the triangle `(p0, p1, p2)`, derived from the winding order.
///
/// Returns `Vec3::ZERO` when the points are colinear or coincident.
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}

/// Area of the triangle `(p0, p1, p2)` in square meters.
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}

/// Centroid (arithmetic mean) of the triangle `(p0, p1, p2)`.
pub fn triangle_centroid(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p0 + p1 + p2) / 3.0
}

/// Normal, area, and centroid of one triangle, computed together.
///
/// The drag loop needs all three per triangle; this computes them from a
/// single cross product instead of three separate passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    /// Unit outward normal (zero for degenerate triangles)
    pub normal: Vec3,
    /// Surface area (m²)
    pub area: f32,
    /// World-space centroid
    pub centroid: Vec3,
}

impl TriangleGeometry {
    /// Compute the geometry of the triangle spanned by three world-space points.
    pub fn from_points([p0, p1, p2]: [Vec3; 3]) -> Self {
        let cross = (p1 - p0).cross(p2 - p0);
        Self {
            normal: cross.normalize_or_zero(),
            area: 0.5 * cross.length(),
            centroid: (p0 + p1 + p2) / 3.0,
        }
    }

    /// True when the triangle spans no area (colinear or coincident points).
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}
