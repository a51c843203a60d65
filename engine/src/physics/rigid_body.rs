//! Rigid-body seam and force accumulation
//!
//! The drag system never integrates motion itself; it talks to whatever owns
//! the body through [`RigidBodyLink`]: read the pose, read the velocity of a
//! surface point, submit a force at a position. Hosts with a physics engine
//! implement the trait on their body handle.
//!
//! [`RigidBodyState`] is the bundled implementation for hosts without one:
//! it carries pose and velocities and accumulates submitted forces into a
//! net force/torque pair that the host's integrator drains once per step.

use glam::{Mat4, Quat, Vec3};

/// Interface to the externally owned rigid body.
///
/// Queried fresh every step; the drag system holds no pose or velocity state
/// between steps. Force submission is additive and may happen zero or many
/// times per step.
pub trait RigidBodyLink: Send + Sync {
    /// Current model-to-world transform (rotation + translation + scale).
    fn local_to_world(&self) -> Mat4;

    /// Velocity of the body surface at a world-space point, including the
    /// rotational contribution.
    fn point_velocity(&self, world_point: Vec3) -> Vec3;

    /// Apply a force at a world-space position. Contributions accumulate
    /// within the step.
    fn apply_force_at_position(&mut self, force: Vec3, world_point: Vec3);
}

/// Pose, velocity, and force accumulators for a single rigid body.
///
/// Implements [`RigidBodyLink`] so it can stand in for a full physics engine
/// in hosts and tests. Integration stays with the caller: after each step,
/// drain [`take_accumulated`](Self::take_accumulated) and advance position,
/// rotation, and velocities however the host integrates.
#[derive(Debug, Clone, Copy)]
pub struct RigidBodyState {
    /// World-space position of the body origin
    pub position: Vec3,
    /// World-space orientation
    pub rotation: Quat,
    /// Model-space scale (non-uniform allowed)
    pub scale: Vec3,
    /// Linear velocity (m/s)
    pub velocity: Vec3,
    /// Angular velocity (rad/s, world space)
    pub angular_velocity: Vec3,
    force_accum: Vec3,
    torque_accum: Vec3,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl RigidBodyState {
    /// A body at rest at `position`, identity rotation, unit scale.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            force_accum: Vec3::ZERO,
            torque_accum: Vec3::ZERO,
        }
    }

    /// Net force accumulated since the last drain.
    pub fn accumulated_force(&self) -> Vec3 {
        self.force_accum
    }

    /// Net torque about the body origin accumulated since the last drain.
    pub fn accumulated_torque(&self) -> Vec3 {
        self.torque_accum
    }

    /// Return `(net force, net torque)` and reset both accumulators.
    ///
    /// Called once per step by the host's integrator.
    pub fn take_accumulated(&mut self) -> (Vec3, Vec3) {
        let drained = (self.force_accum, self.torque_accum);
        self.force_accum = Vec3::ZERO;
        self.torque_accum = Vec3::ZERO;
        drained
    }
}

impl RigidBodyLink for RigidBodyState {
    fn local_to_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    fn point_velocity(&self, world_point: Vec3) -> Vec3 {
        self.velocity + self.angular_velocity.cross(world_point - self.position)
    }

    fn apply_force_at_position(&mut self, force: Vec3, world_point: Vec3) {
        self.force_accum += force;
        self.torque_accum += (world_point - self.position).cross(force);
    }
}
