//! Drag demo: a slab falling through a crosswind.
//!
//! Console host for the drag engine. Drops a tilted flat slab from 40 m
//! into a boundary-layer wind field and runs a fixed 60 Hz loop: drag step,
//! drain the accumulated force/torque, then a host-side semi-implicit Euler
//! integration. Prints one state line per simulated second.

use aerodrag_engine::{AirResistance, DragConfig, PowerLawWind, RigidBodyState, SurfaceMesh};
use glam::{Quat, Vec3};

/// Fixed simulation step (60 Hz)
const DT: f32 = 1.0 / 60.0;

/// Gravity acceleration (m/s²)
const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Slab mass (kg) and scalar moment of inertia (kg·m²), owned by the host
const MASS: f32 = 2.0;
const INERTIA: f32 = 0.4;

fn main() {
    // Closed surface: 2 m x 0.2 m x 2 m slab, so both the fall and the
    // crosswind always meet windward faces.
    let mesh = SurfaceMesh::cuboid(Vec3::new(1.0, 0.1, 1.0));

    let mut body = RigidBodyState::new(Vec3::new(0.0, 40.0, 0.0));
    // Slight tilt so the crosswind produces torque as well as force.
    body.rotation = Quat::from_rotation_z(0.25);

    let wind = PowerLawWind {
        reference_wind: Vec3::new(6.0, 0.0, 0.0),
        reference_height: 10.0,
        ..PowerLawWind::default()
    };

    let drag = AirResistance::new(DragConfig {
        wind_field: true,
        ..DragConfig::default()
    });

    println!("drag-demo: 2x0.2x2 m slab, {MASS} kg, 6 m/s crosswind at 10 m reference height");
    println!("{:>6} {:>24} {:>24} {:>8}", "t (s)", "position", "velocity", "|v|");

    let mut elapsed = 0.0f32;
    for step in 0..(60 * 30) {
        drag.step_in_field(&mesh, &mut body, &wind);
        let (force, torque) = body.take_accumulated();

        // Host-side semi-implicit Euler: velocities first, then pose.
        body.velocity += (GRAVITY + force / MASS) * DT;
        body.angular_velocity += torque / INERTIA * DT;

        body.position += body.velocity * DT;
        let spin = Quat::from_xyzw(
            body.angular_velocity.x,
            body.angular_velocity.y,
            body.angular_velocity.z,
            0.0,
        ) * body.rotation;
        body.rotation = (body.rotation + spin * (0.5 * DT)).normalize();

        elapsed += DT;
        if step % 60 == 59 {
            println!(
                "{:>6.1} {:>24} {:>24} {:>8.2}",
                elapsed,
                format!("{:.2?}", body.position),
                format!("{:.2?}", body.velocity),
                body.velocity.length(),
            );
        }

        if body.position.y <= 0.0 {
            println!("touchdown at t = {elapsed:.2} s, position {:.2?}", body.position);
            return;
        }
    }

    println!("still airborne after 30 s");
}
