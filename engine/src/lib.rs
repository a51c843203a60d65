//! Aerodrag Engine Library
//!
//! Per-triangle aerodynamic drag for rigid-body surface meshes. Given a
//! triangulated surface, the body's pose and velocities, and an ambient wind
//! (uniform or field-sampled), the engine computes the quadratic pressure
//! drag on every triangle exposed to the oncoming flow and submits the
//! resulting forces to the rigid body, once per fixed simulation step.
//!
//! # Modules
//!
//! - [`physics`] - Triangle geometry, flow resolution, and the drag accumulator
//! - [`mesh`] - Surface mesh types and the model-to-world transform resolver
//! - [`asset`] - `.aeromesh` surface persistence (binary geometry + JSON metadata)
//!
//! # Example
//!
//! ```ignore
//! use aerodrag_engine::{AirResistance, DragConfig, RigidBodyState, SurfaceMesh};
//! use glam::Vec3;
//!
//! let mesh = SurfaceMesh::quad_plate(2.0);
//! let mut body = RigidBodyState::new(Vec3::new(0.0, 50.0, 0.0));
//! let drag = AirResistance::new(DragConfig {
//!     wind_velocity: Vec3::new(6.0, 0.0, 0.0),
//!     ..DragConfig::default()
//! });
//!
//! // Host fixed-timestep loop: drag step, then integrate with the drained
//! // force/torque pair.
//! drag.step(&mesh, &mut body);
//! let (force, torque) = body.take_accumulated();
//! ```

pub mod asset;
pub mod mesh;
pub mod physics;

// Re-export the working set at crate level for convenience
pub use asset::{AeromeshMetadata, AssetError, load_aeromesh, save_aeromesh};
pub use mesh::{MeshSource, MeshVertex, SurfaceMesh, world_triangle};
pub use physics::drag::{AirResistance, DragConfig, ForceContribution};
pub use physics::flow::{AmbientWind, PowerLawWind, SampledWind, UniformWind, WindField};
pub use physics::geometry::{TriangleGeometry, triangle_area, triangle_centroid, triangle_normal};
pub use physics::rigid_body::{RigidBodyLink, RigidBodyState};
