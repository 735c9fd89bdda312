//! Painting session: the current target mesh plus the brush
//!
//! The session is the stroke entry point for hosts. Each
//! [`PointerSample`] yields a brush cursor to draw and, when the primary
//! button is down and a target is set, one full stroke:
//!
//! 1. [`ensure_buffer`] fetches (or repairs) the target's colors
//! 2. [`paint_stroke`] applies the brush
//! 3. the buffer is committed back to the mesh
//!
//! Samples are processed strictly in the order they are handed in.

use glam::Vec3;
use tracing::debug;
use vertex_paint_config::PainterConfig;

use crate::brush::{BrushCommand, BrushCursor, BrushState};
use crate::buffer::{ensure_buffer, reset_colors};
use crate::engine::paint_stroke;
use crate::error::PaintError;
use crate::mesh::VertexColorStorage;
use crate::types::PointerSample;

/// Result of a stroke committed to the target mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeReport {
    /// Vertices inside the brush footprint
    pub affected: usize,
    /// The target's color buffer was missing or mis-sized and was recreated
    pub initialized: bool,
}

/// What the host should do after handing in a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResponse {
    /// Brush outline to draw (None without a target)
    pub cursor: Option<BrushCursor>,
    /// Stroke committed by this sample, if any
    pub stroke: Option<StrokeReport>,
}

impl SampleResponse {
    /// Whether the host needs to redraw the target's colors
    pub fn needs_redraw(&self) -> bool {
        self.stroke.is_some_and(|s| s.affected > 0 || s.initialized)
    }
}

/// A painting session over one target mesh at a time
pub struct PaintSession<M> {
    /// Mesh currently under the brush (None when nothing is selected)
    target: Option<M>,
    /// Current brush
    brush: BrushState,
    /// Number of strokes committed in this session
    stroke_count: u64,
}

impl<M: VertexColorStorage> Default for PaintSession<M> {
    fn default() -> Self {
        Self::new(BrushState::default())
    }
}

impl<M: VertexColorStorage> PaintSession<M> {
    /// Create a session with no target
    pub fn new(brush: BrushState) -> Self {
        Self {
            target: None,
            brush,
            stroke_count: 0,
        }
    }

    /// Create a session whose brush starts from `config`
    pub fn from_config(config: &PainterConfig) -> Result<Self, PaintError> {
        Ok(Self::new(BrushState::from_config(config)?))
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    /// Apply a host UI command to the brush
    pub fn apply_command(&mut self, command: BrushCommand) {
        self.brush.apply(command);
    }

    /// Replace the target, returning the previous one
    pub fn set_target(&mut self, target: Option<M>) -> Option<M> {
        debug!(
            "PaintSession::set_target: {}",
            if target.is_some() { "selected" } else { "cleared" }
        );
        std::mem::replace(&mut self.target, target)
    }

    /// Remove and return the target
    pub fn take_target(&mut self) -> Option<M> {
        self.target.take()
    }

    pub fn target(&self) -> Option<&M> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut M> {
        self.target.as_mut()
    }

    /// Strokes committed since the session started
    pub fn stroke_count(&self) -> u64 {
        self.stroke_count
    }

    /// Handle one input sample from the host
    pub fn handle_sample(&mut self, sample: PointerSample) -> SampleResponse {
        if self.target.is_none() {
            return SampleResponse {
                cursor: None,
                stroke: None,
            };
        }

        let cursor = self.brush.cursor(sample.position, sample.normal);
        let stroke = if sample.primary_down {
            self.paint_at(sample.position)
        } else {
            None
        };

        SampleResponse {
            cursor: Some(cursor),
            stroke,
        }
    }

    /// Handle a batch of samples in arrival order
    pub fn handle_samples<I>(&mut self, samples: I) -> Vec<SampleResponse>
    where
        I: IntoIterator<Item = PointerSample>,
    {
        samples
            .into_iter()
            .map(|sample| self.handle_sample(sample))
            .collect()
    }

    /// Paint one stroke at `position` (world space) on the target
    ///
    /// Returns None when there is no target.
    pub fn paint_at(&mut self, position: Vec3) -> Option<StrokeReport> {
        let target = self.target.as_mut()?;

        let ensured = ensure_buffer(target);
        let mut buffer = ensured.buffer;
        let outcome = paint_stroke(&*target, &mut buffer, position, &self.brush);
        buffer.commit(target);

        self.stroke_count += 1;
        Some(StrokeReport {
            affected: outcome.affected,
            initialized: ensured.initialized,
        })
    }

    /// Reset the target's colors to the default color
    ///
    /// Returns the number of vertices reset, or None when there is no target.
    pub fn reset_colors(&mut self) -> Option<usize> {
        let target = self.target.as_mut()?;
        Some(reset_colors(target).len())
    }
}
