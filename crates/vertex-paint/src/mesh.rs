//! Host adapter interface
//!
//! The engine never owns geometry. Hosts expose their meshes through two
//! traits:
//!
//! - [`MeshGeometry`]: read-only vertex positions and the local-to-world transform
//! - [`VertexColorStorage`]: the per-vertex color buffer attached to the mesh
//!
//! [`VertexMesh`] is a plain in-memory implementation for hosts that keep
//! their own vertex arrays.

use glam::{Affine3A, Vec3};

use crate::types::VertexColor;

/// Read-only geometry of a paintable mesh
pub trait MeshGeometry {
    /// Number of vertices in the mesh
    fn vertex_count(&self) -> usize;

    /// Position of vertex `index` in mesh-local space
    ///
    /// Callers only pass indices below [`MeshGeometry::vertex_count`].
    fn local_vertex(&self, index: usize) -> Vec3;

    /// Transform a local-space point to world space
    fn to_world(&self, local: Vec3) -> Vec3;
}

/// Color buffer attached to a mesh
pub trait VertexColorStorage: MeshGeometry {
    /// The mesh's current colors, if it has any
    ///
    /// May return a buffer whose length differs from the vertex count; the
    /// engine repairs it on access.
    fn vertex_colors(&self) -> Option<&[VertexColor]>;

    /// Attach `colors` to the mesh, replacing any previous buffer
    fn set_vertex_colors(&mut self, colors: Vec<VertexColor>);
}

impl<T: MeshGeometry + ?Sized> MeshGeometry for &mut T {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn local_vertex(&self, index: usize) -> Vec3 {
        (**self).local_vertex(index)
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        (**self).to_world(local)
    }
}

impl<T: VertexColorStorage + ?Sized> VertexColorStorage for &mut T {
    fn vertex_colors(&self) -> Option<&[VertexColor]> {
        (**self).vertex_colors()
    }

    fn set_vertex_colors(&mut self, colors: Vec<VertexColor>) {
        (**self).set_vertex_colors(colors)
    }
}

/// In-memory mesh with an affine transform and optional vertex colors
#[derive(Debug, Clone, Default)]
pub struct VertexMesh {
    /// Vertex positions in local space
    pub positions: Vec<Vec3>,
    /// Local-to-world transform
    pub transform: Affine3A,
    /// Attached colors (None until painted or reset)
    colors: Option<Vec<VertexColor>>,
}

impl VertexMesh {
    /// Create a mesh with an identity transform and no colors
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            transform: Affine3A::IDENTITY,
            colors: None,
        }
    }

    /// Set the local-to-world transform
    pub fn with_transform(mut self, transform: Affine3A) -> Self {
        self.transform = transform;
        self
    }

    /// Attach an initial color buffer (any length)
    pub fn with_colors(mut self, colors: Vec<VertexColor>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Current colors, if any
    pub fn colors(&self) -> Option<&[VertexColor]> {
        self.colors.as_deref()
    }

    /// Detach and return the color buffer
    pub fn take_colors(&mut self) -> Option<Vec<VertexColor>> {
        self.colors.take()
    }
}

impl MeshGeometry for VertexMesh {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn local_vertex(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        self.transform.transform_point3(local)
    }
}

impl VertexColorStorage for VertexMesh {
    fn vertex_colors(&self) -> Option<&[VertexColor]> {
        self.colors.as_deref()
    }

    fn set_vertex_colors(&mut self, colors: Vec<VertexColor>) {
        self.colors = Some(colors);
    }
}
