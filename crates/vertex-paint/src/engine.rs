//! Stroke application
//!
//! A stroke is one pass over every vertex of the mesh. Each vertex is moved
//! to world space and compared against the brush position; vertices strictly
//! inside the radius get the channel update, everything else is left alone.
//! There is no falloff and no spatial index: meshes are interactively sized
//! and strokes arrive at input rate.

use glam::Vec3;
use tracing::debug;

use crate::brush::BrushState;
use crate::buffer::VertexColorBuffer;
use crate::channel::apply_channel;
use crate::mesh::MeshGeometry;

/// Summary of one stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeOutcome {
    /// Vertices inside the brush footprint
    pub affected: usize,
}

/// Apply one brush stroke centered at `brush_pos` (world space) to `buffer`.
///
/// `buffer` must be index-aligned with `mesh`; use
/// [`ensure_buffer`](crate::buffer::ensure_buffer) to obtain one. Vertices
/// beyond the shorter of the two are skipped.
pub fn paint_stroke<M: MeshGeometry + ?Sized>(
    mesh: &M,
    buffer: &mut VertexColorBuffer,
    brush_pos: Vec3,
    brush: &BrushState,
) -> StrokeOutcome {
    let colors = buffer.colors_mut();
    let vertex_count = mesh.vertex_count();

    let mut affected = 0;
    for (index, color) in colors.iter_mut().enumerate().take(vertex_count) {
        let world = mesh.to_world(mesh.local_vertex(index));
        if world.distance(brush_pos) < brush.radius {
            *color = apply_channel(*color, brush.channel, brush.intensity);
            affected += 1;
        }
    }

    debug!(
        "paint_stroke: pos=({:.2}, {:.2}, {:.2}), radius={:.2}, channel={}, intensity={:.2} -> {} of {} vertices",
        brush_pos.x,
        brush_pos.y,
        brush_pos.z,
        brush.radius,
        brush.channel,
        brush.intensity,
        affected,
        vertex_count
    );

    StrokeOutcome { affected }
}
