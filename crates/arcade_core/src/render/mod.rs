//! Rendering interface
//!
//! Shared geometry/texture resources and the narrow backend trait through
//! which the core hands finished transforms to the graphics layer.

pub mod backend;
pub mod shared_resources;

pub use backend::{submit_objects, DrawCommand, DrawQueue, RenderBackend};
pub use shared_resources::{
    QuadGeometry, RenderResource, RenderResources, ResourceKey, TextureDesc, TextureFilter,
};

use thiserror::Error;

/// Rendering system errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// An object referenced a resource that is not in the table
    #[error("Render resource {0:?} is not registered")]
    MissingResource(ResourceKey),

    /// The backend failed to issue a draw call
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Convenience type alias for Results with RenderError
pub type RenderResult<T> = Result<T, RenderError>;
