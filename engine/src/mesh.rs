//! Surface mesh types and the model-to-world transform resolver
//!
//! A drag surface is an indexed triangle mesh in model space: a vertex list
//! plus a flat `u32` index list, three indices per triangle. The mesh is
//! immutable as far as the drag system is concerned; the pose that carries it
//! into world space is owned by the rigid body and re-read every step.
//!
//! [`MeshSource`] is the seam to the host's mesh storage. Hosts that already
//! keep geometry in their own buffers implement the trait directly;
//! [`SurfaceMesh`] is the owned implementation used by tests, the demo, and
//! the `.aeromesh` loader.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

// ============================================================================
// RAW VERTEX TYPE
// ============================================================================

/// Raw model-space vertex as stored in `.aeromesh` files and host vertex
/// buffers. Position only; drag needs no normals or UVs from the source data.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 12]);

// ============================================================================
// MESH SOURCE SEAM
// ============================================================================

/// Read-only view of a triangulated surface in model space.
///
/// Contract: every index returned by [`triangle_indices`](Self::triangle_indices)
/// is within `0..vertex_count()`. A provider that violates this has broken
/// its contract and the access will panic rather than proceed with bogus
/// geometry.
pub trait MeshSource: Send + Sync {
    /// Number of vertices in the mesh.
    fn vertex_count(&self) -> usize;

    /// Model-space position of one vertex.
    fn vertex_position(&self, index: usize) -> Vec3;

    /// Number of triangles in the mesh.
    fn triangle_count(&self) -> usize;

    /// The three vertex indices of one triangle, in winding order.
    fn triangle_indices(&self, tri: usize) -> [u32; 3];
}

/// Resolve one triangle of `mesh` into world space under the given pose.
///
/// Applies the full affine point transform, so rotation, translation, and
/// non-uniform scale are all honored.
pub fn world_triangle<M: MeshSource + ?Sized>(
    mesh: &M,
    local_to_world: Mat4,
    tri: usize,
) -> [Vec3; 3] {
    let [i0, i1, i2] = mesh.triangle_indices(tri);
    [
        local_to_world.transform_point3(mesh.vertex_position(i0 as usize)),
        local_to_world.transform_point3(mesh.vertex_position(i1 as usize)),
        local_to_world.transform_point3(mesh.vertex_position(i2 as usize)),
    ]
}

// ============================================================================
// OWNED MESH
// ============================================================================

/// An owned indexed triangle mesh in model space.
///
/// Index bounds are validated once at construction; after that, triangle
/// lookups are plain slice indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Build a mesh from model-space vertices and a flat triangle index list.
    ///
    /// # Panics
    ///
    /// Panics when the index list length is not a multiple of 3 or any index
    /// is out of vertex range. Both are provider contract violations, not
    /// recoverable runtime conditions.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        assert!(
            indices.len() % 3 == 0,
            "index list length {} is not a multiple of 3",
            indices.len()
        );
        let vertex_count = vertices.len() as u32;
        for &index in &indices {
            assert!(
                index < vertex_count,
                "triangle index {index} out of range for {vertex_count} vertices"
            );
        }
        Self { vertices, indices }
    }

    /// Build a mesh from raw `.aeromesh` / vertex-buffer data.
    pub fn from_raw(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        let vertices = vertices.into_iter().map(|v| Vec3::from(v.position)).collect();
        Self::new(vertices, indices)
    }

    /// Model-space vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Flat triangle index list (length = 3 × triangle count).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertices converted to the raw [`MeshVertex`] representation.
    pub fn raw_vertices(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .map(|v| MeshVertex { position: v.to_array() })
            .collect()
    }

    /// A square plate of side length `size` in the XZ plane, centered at the
    /// origin, normals facing +Y. Two triangles.
    pub fn quad_plate(size: f32) -> Self {
        let h = size * 0.5;
        let vertices = vec![
            Vec3::new(-h, 0.0, -h),
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
            Vec3::new(h, 0.0, -h),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Self::new(vertices, indices)
    }

    /// An axis-aligned box with the given half extents, centered at the
    /// origin, outward-facing winding. Twelve triangles.
    pub fn cuboid(half_extents: Vec3) -> Self {
        let Vec3 { x, y, z } = half_extents;
        let vertices = vec![
            Vec3::new(-x, -y, -z), // 0
            Vec3::new(x, -y, -z),  // 1
            Vec3::new(x, y, -z),   // 2
            Vec3::new(-x, y, -z),  // 3
            Vec3::new(-x, -y, z),  // 4
            Vec3::new(x, -y, z),   // 5
            Vec3::new(x, y, z),    // 6
            Vec3::new(-x, y, z),   // 7
        ];
        #[rustfmt::skip]
        let indices = vec![
            4, 5, 6, 4, 6, 7, // +Z
            1, 0, 3, 1, 3, 2, // -Z
            5, 1, 2, 5, 2, 6, // +X
            4, 7, 3, 4, 3, 0, // -X
            3, 7, 6, 3, 6, 2, // +Y
            0, 1, 5, 0, 5, 4, // -Y
        ];
        Self::new(vertices, indices)
    }
}

impl MeshSource for SurfaceMesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_position(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn triangle_indices(&self, tri: usize) -> [u32; 3] {
        [
            self.indices[tri * 3],
            self.indices[tri * 3 + 1],
            self.indices[tri * 3 + 2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::geometry::{triangle_centroid, triangle_normal};
    use glam::Quat;

    #[test]
    fn test_quad_plate_counts_and_normals() {
        let plate = SurfaceMesh::quad_plate(2.0);
        assert_eq!(plate.vertex_count(), 4);
        assert_eq!(plate.triangle_count(), 2);

        for tri in 0..plate.triangle_count() {
            let [p0, p1, p2] = world_triangle(&plate, Mat4::IDENTITY, tri);
            let normal = triangle_normal(p0, p1, p2);
            assert!((normal - Vec3::Y).length() < 1e-6, "plate normal must face +Y");
        }
    }

    #[test]
    fn test_cuboid_normals_face_outward() {
        let cuboid = SurfaceMesh::cuboid(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cuboid.triangle_count(), 12);

        for tri in 0..cuboid.triangle_count() {
            let [p0, p1, p2] = world_triangle(&cuboid, Mat4::IDENTITY, tri);
            let normal = triangle_normal(p0, p1, p2);
            let centroid = triangle_centroid(p0, p1, p2);
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {tri} normal {normal:?} points inward"
            );
        }
    }

    #[test]
    fn test_world_triangle_applies_full_affine_transform() {
        let plate = SurfaceMesh::quad_plate(2.0);
        let pose = Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 1.0, 3.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(10.0, 5.0, -4.0),
        );

        // Model-space (-1, 0, -1): scale -> (-2, 0, -3), rotate 90° about Y
        // -> (-3, 0, 2), translate -> (7, 5, -2).
        let [p0, _, _] = world_triangle(&plate, pose, 0);
        assert!((p0 - Vec3::new(7.0, 5.0, -2.0)).length() < 1e-5, "got {p0:?}");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        SurfaceMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 3]);
    }

    #[test]
    #[should_panic(expected = "multiple of 3")]
    fn test_partial_triangle_panics() {
        SurfaceMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1]);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let mesh = SurfaceMesh::quad_plate(1.0);
        let rebuilt = SurfaceMesh::from_raw(mesh.raw_vertices(), mesh.indices().to_vec());
        assert_eq!(rebuilt, mesh);
    }
}
