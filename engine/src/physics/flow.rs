//! Ambient wind models and relative flow resolution
//!
//! The drag force acts on the velocity of the air *relative to the surface*:
//! `relative = ambient_wind(point) - surface_velocity(point)`. Ambient wind
//! comes from one of three sources — still air, a uniform vector, or a
//! spatially varying field sampled per point — and the surface velocity from
//! the rigid body's point-velocity query. Resolution happens once per
//! triangle per step at the triangle centroid; nothing is cached.

use glam::Vec3;

use crate::physics::rigid_body::RigidBodyLink;

// ============================================================================
// WIND FIELD SEAM
// ============================================================================

/// A spatially varying wind field, sampled at world-space points.
///
/// Samplers are read-only and shared across worker threads when the
/// `parallel` feature is enabled, hence the `Send + Sync` bound.
pub trait WindField: Send + Sync {
    /// Wind velocity at a world-space point (m/s).
    fn sample(&self, world_point: Vec3) -> Vec3;
}

/// Adapter turning a closure into a [`WindField`].
pub struct SampledWind<F>(pub F);

impl<F> WindField for SampledWind<F>
where
    F: Fn(Vec3) -> Vec3 + Send + Sync,
{
    fn sample(&self, world_point: Vec3) -> Vec3 {
        (self.0)(world_point)
    }
}

/// The same wind velocity everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformWind(pub Vec3);

impl WindField for UniformWind {
    fn sample(&self, _world_point: Vec3) -> Vec3 {
        self.0
    }
}

/// Atmospheric boundary-layer profile: wind speed grows with height as a
/// power law, `w(y) = w_ref * (y / y_ref)^alpha`, zero at and below ground.
///
/// The 1/7th-power exponent is the usual neutral-atmosphere default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawWind {
    /// Wind velocity at the reference height (m/s)
    pub reference_wind: Vec3,
    /// Height at which `reference_wind` applies (m)
    pub reference_height: f32,
    /// Power-law exponent (dimensionless)
    pub exponent: f32,
}

impl Default for PowerLawWind {
    fn default() -> Self {
        Self {
            reference_wind: Vec3::ZERO,
            reference_height: 10.0,
            exponent: 1.0 / 7.0,
        }
    }
}

impl WindField for PowerLawWind {
    fn sample(&self, world_point: Vec3) -> Vec3 {
        if world_point.y <= 0.0 || self.reference_height <= 0.0 {
            return Vec3::ZERO;
        }
        self.reference_wind * (world_point.y / self.reference_height).powf(self.exponent)
    }
}

// ============================================================================
// AMBIENT WIND RESOLUTION
// ============================================================================

/// The ambient wind source in effect for one step.
#[derive(Clone, Copy)]
pub enum AmbientWind<'a> {
    /// No air movement
    Still,
    /// One vector everywhere
    Uniform(Vec3),
    /// Sampled per point from an external field
    Field(&'a dyn WindField),
}

impl AmbientWind<'_> {
    /// Ambient wind velocity at a world-space point.
    pub fn velocity_at(&self, world_point: Vec3) -> Vec3 {
        match self {
            AmbientWind::Still => Vec3::ZERO,
            AmbientWind::Uniform(wind) => *wind,
            AmbientWind::Field(field) => field.sample(world_point),
        }
    }
}

/// Velocity of the air relative to the body surface at `world_point`.
pub fn relative_flow<B: RigidBodyLink + ?Sized>(
    wind: &AmbientWind<'_>,
    body: &B,
    world_point: Vec3,
) -> Vec3 {
    wind.velocity_at(world_point) - body.point_velocity(world_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::rigid_body::RigidBodyState;

    #[test]
    fn test_uniform_wind_ignores_position() {
        let wind = UniformWind(Vec3::new(3.0, 0.0, 1.0));
        assert_eq!(wind.sample(Vec3::ZERO), Vec3::new(3.0, 0.0, 1.0));
        assert_eq!(wind.sample(Vec3::new(100.0, -5.0, 2.0)), Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_power_law_matches_reference_height() {
        let wind = PowerLawWind {
            reference_wind: Vec3::new(8.0, 0.0, 0.0),
            reference_height: 10.0,
            exponent: 1.0 / 7.0,
        };
        let at_ref = wind.sample(Vec3::new(0.0, 10.0, 0.0));
        assert!((at_ref - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);

        // Stronger above, weaker below, zero at ground
        assert!(wind.sample(Vec3::new(0.0, 80.0, 0.0)).length() > 8.0);
        assert!(wind.sample(Vec3::new(0.0, 1.0, 0.0)).length() < 8.0);
        assert_eq!(wind.sample(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_relative_flow_subtracts_surface_velocity() {
        let mut body = RigidBodyState::new(Vec3::ZERO);
        body.velocity = Vec3::new(5.0, 0.0, 0.0);

        let wind = AmbientWind::Uniform(Vec3::new(2.0, 0.0, 0.0));
        let rel = relative_flow(&wind, &body, Vec3::ZERO);
        assert_eq!(rel, Vec3::new(-3.0, 0.0, 0.0));

        // Still air: relative flow is the negated surface velocity
        let rel = relative_flow(&AmbientWind::Still, &body, Vec3::ZERO);
        assert_eq!(rel, Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_closure_as_wind_field() {
        let shear = SampledWind(|p: Vec3| Vec3::new(p.y, 0.0, 0.0));
        let wind = AmbientWind::Field(&shear);
        assert_eq!(wind.velocity_at(Vec3::new(0.0, 4.0, 0.0)), Vec3::new(4.0, 0.0, 0.0));
    }
}
