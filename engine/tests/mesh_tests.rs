//! Mesh Tests - Pose Resolution, Scale, and Asset Round-Trip
//!
//! End-to-end checks that the transform resolver feeds world-space geometry
//! into the drag loop correctly, and that surfaces survive the .aeromesh
//! disk format.

use aerodrag_engine::{
    AeromeshMetadata, AirResistance, RigidBodyState, SurfaceMesh, load_aeromesh, save_aeromesh,
};
use glam::Vec3;

#[test]
fn test_non_uniform_scale_scales_force_with_area() {
    let plate = SurfaceMesh::quad_plate(2.0);
    let drag = AirResistance::default();

    let mut unit = RigidBodyState::new(Vec3::ZERO);
    unit.velocity = Vec3::new(0.0, 2.0, 0.0);
    drag.step(&plate, &mut unit);
    let (unit_force, _) = unit.take_accumulated();

    // Scaling the XZ plate by (2, 1, 3) multiplies every triangle area by 6
    // while leaving normals and the flow unchanged.
    let mut scaled = RigidBodyState::new(Vec3::ZERO);
    scaled.scale = Vec3::new(2.0, 1.0, 3.0);
    scaled.velocity = Vec3::new(0.0, 2.0, 0.0);
    drag.step(&plate, &mut scaled);
    let (scaled_force, _) = scaled.take_accumulated();

    let ratio = scaled_force.y / unit_force.y;
    assert!((ratio - 6.0).abs() < 1e-4, "expected 6x force, got {ratio}x");
}

#[test]
fn test_translation_moves_application_points_only() {
    let plate = SurfaceMesh::quad_plate(2.0);
    let drag = AirResistance::default();

    let mut here = RigidBodyState::new(Vec3::ZERO);
    here.velocity = Vec3::new(0.0, 3.0, 0.0);
    drag.step(&plate, &mut here);
    let (force_here, torque_here) = here.take_accumulated();

    let mut there = RigidBodyState::new(Vec3::new(50.0, 20.0, -10.0));
    there.velocity = Vec3::new(0.0, 3.0, 0.0);
    drag.step(&plate, &mut there);
    let (force_there, torque_there) = there.take_accumulated();

    // Same net force wherever the body sits; torque about the body origin
    // stays balanced because application points translate with it.
    assert!((force_here - force_there).length() < 1e-5);
    assert!(torque_here.length() < 1e-4 && torque_there.length() < 1e-4);
}

#[test]
fn test_loaded_asset_drives_drag() {
    let mesh = SurfaceMesh::cuboid(Vec3::new(0.5, 0.5, 0.5));
    let metadata = AeromeshMetadata {
        name: "Crate".to_string(),
        fluid_density: 1.2,
        drag_coefficient: 1.05,
        wind_velocity: Vec3::new(7.0, 0.0, 0.0),
        vertex_count: mesh.vertices().len() as u32,
        index_count: mesh.indices().len() as u32,
    };

    let path = std::env::temp_dir().join(format!("aeromesh_it_{}.aeromesh", std::process::id()));
    save_aeromesh(&path, &mesh, &metadata).expect("save failed");
    let (loaded, loaded_metadata) = load_aeromesh(&path).expect("load failed");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, mesh);

    // The authored wind pushes the resting cuboid along +X.
    let drag = AirResistance::new(loaded_metadata.drag_config());
    let mut body = RigidBodyState::new(Vec3::ZERO);
    drag.step(&loaded, &mut body);
    let (force, _) = body.take_accumulated();
    assert!(force.x > 0.0, "expected downwind force, got {force:?}");
    assert!(force.y.abs() < 1e-4 && force.z.abs() < 1e-4, "force {force:?}");
}
