//! Physics module for the drag engine
//!
//! Custom aerodynamic force computation built directly on glam, with no
//! external physics library dependencies (no Rapier).
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Forces in newtons
//! - Fluid density in kg/m³
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat, Mat4) re-exported from glam
//! - [`geometry`] - Triangle normal, area, and centroid computation
//! - [`flow`] - Ambient wind models and relative flow resolution
//! - [`rigid_body`] - Rigid-body seam and force accumulation
//! - [`drag`] - The per-triangle drag accumulator run once per fixed step

pub mod drag;
pub mod flow;
pub mod geometry;
pub mod rigid_body;
pub mod types;

// Re-export commonly used types at the physics module level
pub use drag::{AirResistance, DragConfig, ForceContribution};
pub use flow::{AmbientWind, PowerLawWind, SampledWind, UniformWind, WindField, relative_flow};
pub use geometry::{TriangleGeometry, triangle_area, triangle_centroid, triangle_normal};
pub use rigid_body::{RigidBodyLink, RigidBodyState};
pub use types::{Mat4, Quat, Vec3};
