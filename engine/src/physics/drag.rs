//! Per-triangle aerodynamic drag accumulation
//!
//! The core loop of the crate: every fixed step, walk the body's surface
//! mesh, and for each triangle facing the oncoming flow compute a quadratic
//! pressure-drag force and submit it at the triangle centroid to the rigid
//! body. Leeward and edge-on triangles contribute nothing.
//!
//! The loop is a map-then-reduce: contributions are gathered independently
//! per triangle (optionally on a rayon pool behind the `parallel` feature)
//! and then submitted sequentially, so no shared mutable state exists
//! between triangles.
//!
//! # Example
//!
//! ```ignore
//! use aerodrag_engine::{AirResistance, DragConfig, RigidBodyState, SurfaceMesh};
//! use glam::Vec3;
//!
//! let mesh = SurfaceMesh::cuboid(Vec3::splat(0.5));
//! let mut body = RigidBodyState::new(Vec3::new(0.0, 30.0, 0.0));
//! let drag = AirResistance::new(DragConfig {
//!     wind_velocity: Vec3::new(4.0, 0.0, 0.0),
//!     ..DragConfig::default()
//! });
//!
//! // Once per fixed step:
//! drag.step(&mesh, &mut body);
//! let (force, torque) = body.take_accumulated();
//! ```

use glam::{Mat4, Vec3};

use crate::mesh::{MeshSource, world_triangle};
use crate::physics::flow::{AmbientWind, WindField, relative_flow};
use crate::physics::geometry::TriangleGeometry;
use crate::physics::rigid_body::RigidBodyLink;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for the drag computation.
///
/// Set once at construction and static for the lifetime of the system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Fluid density ρ (kg/m³).
    /// Air at roughly 20 °C: 1.2
    pub fluid_density: f32,
    /// Drag coefficient Cd (dimensionless).
    /// Flat-plate regime default: 1.5
    pub drag_coefficient: f32,
    /// Uniform ambient wind used while `wind_field` is disabled (m/s)
    pub wind_velocity: Vec3,
    /// When true, [`AirResistance::step_in_field`] samples its wind-field
    /// argument per triangle instead of using `wind_velocity`
    pub wind_field: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            fluid_density: 1.2,
            drag_coefficient: 1.5,
            wind_velocity: Vec3::ZERO,
            wind_field: false,
        }
    }
}

impl DragConfig {
    /// The combined constant ρ·Cd used by the force law.
    pub fn combined_coefficient(&self) -> f32 {
        self.fluid_density * self.drag_coefficient
    }
}

// ============================================================================
// FORCE CONTRIBUTION
// ============================================================================

/// One triangle's force, applied at its centroid.
///
/// Transient: produced during the gather phase of a step and consumed by the
/// rigid body in the same step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceContribution {
    /// Force vector (N)
    pub force: Vec3,
    /// World-space application point
    pub position: Vec3,
}

// ============================================================================
// DRAG SYSTEM
// ============================================================================

/// Accumulates per-triangle drag forces onto a rigid body, once per fixed
/// simulation step.
///
/// Holds only configuration; all geometry and flow state is recomputed from
/// the mesh and body every step, so pose changes between steps are always
/// picked up.
pub struct AirResistance {
    config: DragConfig,
}

impl Default for AirResistance {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl AirResistance {
    /// Create a drag system with the given configuration.
    pub fn new(config: DragConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Run one fixed step using the configured uniform ambient wind.
    pub fn step<M, B>(&self, mesh: &M, body: &mut B)
    where
        M: MeshSource + ?Sized,
        B: RigidBodyLink + ?Sized,
    {
        let wind = AmbientWind::Uniform(self.config.wind_velocity);
        self.run(mesh, body, &wind);
    }

    /// Run one fixed step, sampling `field` for the ambient wind when
    /// wind-field mode is enabled in the config, falling back to the uniform
    /// wind vector otherwise.
    pub fn step_in_field<M, B, W>(&self, mesh: &M, body: &mut B, field: &W)
    where
        M: MeshSource + ?Sized,
        B: RigidBodyLink + ?Sized,
        W: WindField,
    {
        let wind = if self.config.wind_field {
            AmbientWind::Field(field)
        } else {
            AmbientWind::Uniform(self.config.wind_velocity)
        };
        self.run(mesh, body, &wind);
    }

    fn run<M, B>(&self, mesh: &M, body: &mut B, wind: &AmbientWind<'_>)
    where
        M: MeshSource + ?Sized,
        B: RigidBodyLink + ?Sized,
    {
        let contributions = self.contributions(mesh, body, wind);
        for contribution in contributions {
            body.apply_force_at_position(contribution.force, contribution.position);
        }
    }

    /// Gather the per-triangle force contributions for one step without
    /// submitting them — the map phase of the loop, exposed for hosts that
    /// reduce forces themselves and for inspection in tests.
    ///
    /// Triangle order does not affect the result set; only the floating-point
    /// summation order downstream depends on it.
    pub fn contributions<M, B>(
        &self,
        mesh: &M,
        body: &B,
        wind: &AmbientWind<'_>,
    ) -> Vec<ForceContribution>
    where
        M: MeshSource + ?Sized,
        B: RigidBodyLink + ?Sized,
    {
        let drag_coefficient = self.config.combined_coefficient();
        // Pose is read once per step; it cannot change mid-step.
        let local_to_world = body.local_to_world();

        #[cfg(feature = "parallel")]
        let contributions = {
            use rayon::prelude::*;
            (0..mesh.triangle_count())
                .into_par_iter()
                .filter_map(|tri| {
                    triangle_contribution(drag_coefficient, mesh, local_to_world, body, wind, tri)
                })
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let contributions = (0..mesh.triangle_count())
            .filter_map(|tri| {
                triangle_contribution(drag_coefficient, mesh, local_to_world, body, wind, tri)
            })
            .collect();

        contributions
    }
}

/// Drag force of a single triangle, `None` when the triangle is leeward,
/// edge-on, degenerate, or sees no relative flow.
///
/// For an exposed triangle the force is
/// `0.5 · ρCd · |v|² · projected_area · v̂`, projected onto the inward
/// normal so only the pressure component normal to the surface remains.
/// The projected area multiplies the raw (non-unit) relative velocity into
/// the facing term, so flow speed enters the force both here and through
/// the squared-speed factor; this speed coupling is retained as observed
/// behavior rather than normalized away.
fn triangle_contribution<M, B>(
    drag_coefficient: f32,
    mesh: &M,
    local_to_world: Mat4,
    body: &B,
    wind: &AmbientWind<'_>,
    tri: usize,
) -> Option<ForceContribution>
where
    M: MeshSource + ?Sized,
    B: RigidBodyLink + ?Sized,
{
    let geom = TriangleGeometry::from_points(world_triangle(mesh, local_to_world, tri));
    let relative_velocity = relative_flow(wind, body, geom.centroid);

    // Exposure test: only triangles facing the oncoming flow contribute.
    // Degenerate triangles (zero normal) and zero relative flow both land on
    // the >= 0 side and are skipped.
    let facing = geom.normal.dot(relative_velocity);
    if facing >= 0.0 {
        return None;
    }

    let projected_area = geom.area * -facing;
    let speed_squared = relative_velocity.length_squared();
    let drag_force = 0.5
        * drag_coefficient
        * speed_squared
        * projected_area
        * relative_velocity.normalize_or_zero();

    // Keep only the component pressing into the surface; in-plane shear is
    // not modeled.
    let effective_force = drag_force.project_onto_normalized(-geom.normal);

    Some(ForceContribution {
        force: effective_force,
        position: geom.centroid,
    })
}
