//! Rendering collaborator interface
//!
//! The core never touches GPU state. Each frame it hands every active object's
//! composite matrix and resource to a [`RenderBackend`], which is expected to
//! bind the geometry and texture, upload the matrix and issue the draw call.

use crate::foundation::math::Mat4;
use crate::render::{RenderError, RenderResource, RenderResources, RenderResult, ResourceKey};
use crate::scene::GameObject;

/// Draw-call sink implemented by the windowing/graphics layer
pub trait RenderBackend {
    /// Draw one object with the given object-to-world matrix
    fn draw(&mut self, transform: &Mat4, key: ResourceKey, resource: &RenderResource) -> RenderResult<()>;
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Resource that was drawn
    pub resource: ResourceKey,
    /// Matrix uploaded for the draw
    pub transform: Mat4,
    /// Vertices submitted
    pub vertex_count: usize,
}

/// Backend that records draw calls instead of issuing them
///
/// Used by headless runs and tests to inspect what a frame submitted.
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderBackend for DrawQueue {
    fn draw(&mut self, transform: &Mat4, key: ResourceKey, resource: &RenderResource) -> RenderResult<()> {
        self.commands.push(DrawCommand {
            resource: key,
            transform: *transform,
            vertex_count: resource.geometry.vertex_count(),
        });
        Ok(())
    }
}

/// Submit every active object to the backend in the order given
///
/// Inactive objects are skipped. Returns the number of draw calls issued.
pub fn submit_objects<'a, B, I>(backend: &mut B, resources: &RenderResources, objects: I) -> RenderResult<usize>
where
    B: RenderBackend + ?Sized,
    I: IntoIterator<Item = &'a GameObject>,
{
    let mut submitted = 0;
    for object in objects.into_iter().filter(|object| object.is_active()) {
        let key = object.resource();
        let resource = resources.get(key).ok_or(RenderError::MissingResource(key))?;
        let matrix = object.transformation_matrix();
        log::trace!("Drawing {:?} at ({}, {})", key, object.position().x, object.position().y);
        backend.draw(&matrix, key, resource)?;
        submitted += 1;
    }
    Ok(submitted)
}
