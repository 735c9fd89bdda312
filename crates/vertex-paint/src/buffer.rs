//! Vertex color buffer management
//!
//! A mesh's color buffer must always hold exactly one color per vertex. Rather
//! than treating a missing or mis-sized buffer as an error, [`ensure_buffer`]
//! replaces it with transparent black and reports that a repair happened.

use tracing::info;

use crate::mesh::VertexColorStorage;
use crate::types::VertexColor;

/// Color every fresh or reset buffer is filled with
pub const DEFAULT_VERTEX_COLOR: VertexColor = VertexColor::TRANSPARENT;

/// Per-vertex colors, index-aligned with a mesh's vertices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexColorBuffer {
    colors: Vec<VertexColor>,
}

impl VertexColorBuffer {
    /// Create a buffer of `len` default colors
    pub fn new(len: usize) -> Self {
        Self {
            colors: vec![DEFAULT_VERTEX_COLOR; len],
        }
    }

    /// Wrap existing colors
    pub fn from_vec(colors: Vec<VertexColor>) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, or None if out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<VertexColor> {
        self.colors.get(index).copied()
    }

    #[inline]
    pub fn colors(&self) -> &[VertexColor] {
        &self.colors
    }

    #[inline]
    pub fn colors_mut(&mut self) -> &mut [VertexColor] {
        &mut self.colors
    }

    /// Raw bytes for GPU vertex buffer upload (4 x f32 per vertex)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn into_vec(self) -> Vec<VertexColor> {
        self.colors
    }

    /// Write this buffer back to the mesh it was read from
    pub fn commit<M: VertexColorStorage + ?Sized>(self, mesh: &mut M) {
        mesh.set_vertex_colors(self.colors);
    }
}

/// Result of [`ensure_buffer`]
#[derive(Debug, Clone, PartialEq)]
pub struct EnsuredBuffer {
    /// Working copy of the mesh's colors, sized to its vertex count
    pub buffer: VertexColorBuffer,
    /// True when the mesh had no usable buffer and a new one was attached
    pub initialized: bool,
}

/// Fetch a mesh's color buffer, attaching a fresh one if it is missing or
/// does not match the vertex count.
pub fn ensure_buffer<M: VertexColorStorage + ?Sized>(mesh: &mut M) -> EnsuredBuffer {
    let vertex_count = mesh.vertex_count();

    if let Some(colors) = mesh.vertex_colors() {
        if colors.len() == vertex_count {
            return EnsuredBuffer {
                buffer: VertexColorBuffer::from_vec(colors.to_vec()),
                initialized: false,
            };
        }
        info!(
            "Vertex colors initialized for mesh: buffer had {} entries for {} vertices",
            colors.len(),
            vertex_count
        );
    } else {
        info!(
            "Vertex colors initialized for mesh: no buffer for {} vertices",
            vertex_count
        );
    }

    let buffer = VertexColorBuffer::new(vertex_count);
    mesh.set_vertex_colors(buffer.colors.clone());
    EnsuredBuffer {
        buffer,
        initialized: true,
    }
}

/// Replace a mesh's colors with `vertex_count` default colors, whatever it held before.
pub fn reset_colors<M: VertexColorStorage + ?Sized>(mesh: &mut M) -> VertexColorBuffer {
    let buffer = VertexColorBuffer::new(mesh.vertex_count());
    mesh.set_vertex_colors(buffer.colors.clone());
    info!("Vertex colors reset for mesh ({} vertices)", buffer.len());
    buffer
}
