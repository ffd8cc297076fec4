//! Resources shared between multiple game objects
//!
//! Geometry and texture descriptions live in a [`RenderResources`] table
//! owned by the rendering side. Game objects keep a [`ResourceKey`] into it,
//! so several pickups can draw from one entry without sharing any transform
//! state. Entries are written during load and only read afterwards.

use crate::foundation::math::{Vec2, Vec3};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to an entry in [`RenderResources`]
    pub struct ResourceKey;
}

/// CPU-side geometry: triangle-list vertices with matching texture coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct QuadGeometry {
    /// Vertex positions in object space
    pub verts: Vec<Vec3>,
    /// Texture coordinates, one per vertex
    pub tex_coords: Vec<Vec2>,
}

impl QuadGeometry {
    /// Two triangles covering `[-1, 1]²`, textured corner to corner
    pub fn unit_quad() -> Self {
        let verts = vec![
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let tex_coords = vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ];
        Self { verts, tex_coords }
    }

    /// Number of vertices handed to the draw call
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }
}

/// Texture sampling filter requested from the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TextureFilter {
    /// Nearest-neighbour; suits low-res pixel art
    #[default]
    Nearest,
    /// Bilinear
    Linear,
}

/// Texture to be loaded by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDesc {
    /// Image path as configured
    pub path: String,
    /// Sampling filter
    pub filter: TextureFilter,
}

/// Geometry plus texture used to draw one kind of object
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResource {
    /// Shape to draw
    pub geometry: QuadGeometry,
    /// Texture applied to the shape
    pub texture: TextureDesc,
}

impl RenderResource {
    /// Unit quad with the given texture and nearest filtering
    pub fn textured_quad(path: impl Into<String>) -> Self {
        Self::textured_quad_with_filter(path, TextureFilter::Nearest)
    }

    /// Unit quad with the given texture and filter
    pub fn textured_quad_with_filter(path: impl Into<String>, filter: TextureFilter) -> Self {
        Self {
            geometry: QuadGeometry::unit_quad(),
            texture: TextureDesc {
                path: path.into(),
                filter,
            },
        }
    }
}

/// Table of shared render resources addressed by [`ResourceKey`]
#[derive(Debug, Default)]
pub struct RenderResources {
    entries: SlotMap<ResourceKey, RenderResource>,
}

impl RenderResources {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource and return its handle
    pub fn insert(&mut self, resource: RenderResource) -> ResourceKey {
        let key = self.entries.insert(resource);
        log::debug!("Registered render resource {:?}", key);
        key
    }

    /// Look up a resource
    pub fn get(&self, key: ResourceKey) -> Option<&RenderResource> {
        self.entries.get(key)
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
