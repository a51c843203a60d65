//! Mesh Asset Save/Load (.aeromesh)
//!
//! Binary file format for persisting drag surfaces to disk.
//! Layout: fixed 32-byte header | raw vertex data | raw index data | metadata JSON.
//!
//! The header contains magic bytes, version, counts, and the metadata offset
//! so each section can be read independently. Geometry is written as raw
//! bytes for zero-overhead round-trip fidelity; the metadata (display name
//! and per-object drag parameters) is JSON for human-inspectability.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::mesh::{MeshVertex, SurfaceMesh};
use crate::physics::drag::DragConfig;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes identifying a .aeromesh file.
pub const AEROMESH_MAGIC: [u8; 4] = *b"AERO";

/// Current file format version.
const AEROMESH_VERSION: u32 = 1;

/// Size of the header in bytes. Must always be 32.
const HEADER_SIZE: u32 = 32;

// ============================================================================
// HEADER
// ============================================================================

/// Fixed-size binary header for the .aeromesh format.
///
/// Total size: exactly 32 bytes.
/// - `magic` (4) + `version` (4) + `vertex_count` (4) + `index_count` (4)
///   + `metadata_offset` (4) + `_reserved` (12) = 32.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct AeromeshHeader {
    /// Magic bytes: always `b"AERO"`.
    pub magic: [u8; 4],
    /// File format version (currently 1).
    pub version: u32,
    /// Number of vertices in the mesh.
    pub vertex_count: u32,
    /// Number of triangle indices in the mesh.
    pub index_count: u32,
    /// Byte offset from the start of the file to the metadata JSON section.
    pub metadata_offset: u32,
    /// Reserved for future use; must be zeroed.
    pub _reserved: [u8; 12],
}

static_assertions::assert_eq_size!(AeromeshHeader, [u8; 32]);

// ============================================================================
// METADATA
// ============================================================================

/// Human-readable metadata stored as JSON inside the .aeromesh file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AeromeshMetadata {
    /// Display name of the surface (e.g. "Glider Wing").
    pub name: String,
    /// Fluid density ρ the surface was authored for (kg/m³).
    pub fluid_density: f32,
    /// Drag coefficient Cd of the surface.
    pub drag_coefficient: f32,
    /// Default ambient wind for scenes using this surface (m/s).
    pub wind_velocity: Vec3,
    /// Cached vertex count (matches header).
    pub vertex_count: u32,
    /// Cached index count (matches header).
    pub index_count: u32,
}

impl AeromeshMetadata {
    /// Drag configuration seeded from the authored parameters.
    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            fluid_density: self.fluid_density,
            drag_coefficient: self.drag_coefficient,
            wind_velocity: self.wind_velocity,
            wind_field: false,
        }
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur during .aeromesh save/load.
#[derive(Debug)]
pub enum AssetError {
    /// File is smaller than its declared sections require.
    FileTooShort,
    /// Magic bytes do not match `b"AERO"`.
    InvalidMagic,
    /// File version is not supported.
    UnsupportedVersion(u32),
    /// Header counts disagree with the cached metadata counts.
    CountMismatch,
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::FileTooShort => write!(f, "file too short for aeromesh sections"),
            AssetError::InvalidMagic => write!(f, "invalid magic bytes (expected AERO)"),
            AssetError::UnsupportedVersion(v) => {
                write!(f, "unsupported aeromesh version: {v}")
            }
            AssetError::CountMismatch => {
                write!(f, "metadata counts disagree with header counts")
            }
            AssetError::IoError(e) => write!(f, "IO error: {e}"),
            AssetError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::IoError(e)
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(e: serde_json::Error) -> Self {
        AssetError::JsonError(e)
    }
}

// ============================================================================
// SAVE
// ============================================================================

/// Write a .aeromesh file to disk.
///
/// File layout:
/// ```text
/// [AeromeshHeader 32 bytes]
/// [vertex data: vertex_count * 12 bytes]
/// [index data:  index_count  *  4 bytes]
/// [metadata JSON bytes]
/// ```
pub fn save_aeromesh(
    path: &Path,
    mesh: &SurfaceMesh,
    metadata: &AeromeshMetadata,
) -> Result<(), AssetError> {
    use std::io::Write;

    let vertices = mesh.raw_vertices();
    let vertex_bytes = bytemuck::cast_slice::<MeshVertex, u8>(&vertices);
    let index_bytes = bytemuck::cast_slice::<u32, u8>(mesh.indices());
    let metadata_json = serde_json::to_vec(metadata)?;

    let metadata_offset = HEADER_SIZE + vertex_bytes.len() as u32 + index_bytes.len() as u32;

    let header = AeromeshHeader {
        magic: AEROMESH_MAGIC,
        version: AEROMESH_VERSION,
        vertex_count: vertices.len() as u32,
        index_count: mesh.indices().len() as u32,
        metadata_offset,
        _reserved: [0u8; 12],
    };

    // Ensure parent directories exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(bytemuck::bytes_of(&header))?;
    file.write_all(vertex_bytes)?;
    file.write_all(index_bytes)?;
    file.write_all(&metadata_json)?;
    Ok(())
}

// ============================================================================
// LOAD
// ============================================================================

/// Read a .aeromesh file from disk and reconstruct the mesh and metadata.
pub fn load_aeromesh(path: &Path) -> Result<(SurfaceMesh, AeromeshMetadata), AssetError> {
    let data = std::fs::read(path)?;

    if data.len() < HEADER_SIZE as usize {
        return Err(AssetError::FileTooShort);
    }

    let header: AeromeshHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE as usize]);

    if header.magic != AEROMESH_MAGIC {
        return Err(AssetError::InvalidMagic);
    }
    if header.version != AEROMESH_VERSION {
        return Err(AssetError::UnsupportedVersion(header.version));
    }

    // Vertex data starts right after the header.
    let vertex_byte_count = header.vertex_count as usize * std::mem::size_of::<MeshVertex>();
    let vertex_start = HEADER_SIZE as usize;
    let vertex_end = vertex_start + vertex_byte_count;

    // Index data follows vertices.
    let index_byte_count = header.index_count as usize * std::mem::size_of::<u32>();
    let index_start = vertex_end;
    let index_end = index_start + index_byte_count;

    if data.len() < index_end {
        return Err(AssetError::FileTooShort);
    }

    let vertices: Vec<MeshVertex> = bytemuck::pod_collect_to_vec(&data[vertex_start..vertex_end]);
    let indices: Vec<u32> = bytemuck::pod_collect_to_vec(&data[index_start..index_end]);

    // Metadata JSON: from metadata_offset to end of file.
    let meta_start = header.metadata_offset as usize;
    if data.len() < meta_start {
        return Err(AssetError::FileTooShort);
    }
    let metadata: AeromeshMetadata = serde_json::from_slice(&data[meta_start..])?;

    if metadata.vertex_count != header.vertex_count || metadata.index_count != header.index_count {
        return Err(AssetError::CountMismatch);
    }

    Ok((SurfaceMesh::from_raw(vertices, indices), metadata))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_metadata(mesh: &SurfaceMesh) -> AeromeshMetadata {
        AeromeshMetadata {
            name: "Test Plate".to_string(),
            fluid_density: 1.2,
            drag_coefficient: 1.5,
            wind_velocity: Vec3::new(4.0, 0.0, 0.0),
            vertex_count: mesh.vertices().len() as u32,
            index_count: mesh.indices().len() as u32,
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("aeromesh_test_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_header_size() {
        assert_eq!(std::mem::size_of::<AeromeshHeader>(), 32);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mesh = SurfaceMesh::quad_plate(2.0);
        let metadata = make_test_metadata(&mesh);
        let path = temp_path("round_trip.aeromesh");

        save_aeromesh(&path, &mesh, &metadata).expect("save failed");
        let (loaded_mesh, loaded_metadata) = load_aeromesh(&path).expect("load failed");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded_mesh, mesh);
        assert_eq!(loaded_metadata, metadata);
        assert_eq!(loaded_metadata.drag_config().combined_coefficient(), 1.8);
    }

    #[test]
    fn test_invalid_magic_rejected() {
        let path = temp_path("bad_magic.aeromesh");
        std::fs::write(&path, [0u8; 64]).expect("write failed");

        let result = load_aeromesh(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::InvalidMagic)));
    }

    #[test]
    fn test_truncated_file_rejected() {
        let path = temp_path("truncated.aeromesh");
        std::fs::write(&path, AEROMESH_MAGIC).expect("write failed");

        let result = load_aeromesh(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::FileTooShort)));
    }
}
