//! Vertex paint engine - brush strokes on per-vertex mesh colors
//!
//! This crate provides the core of the vertex painting tool:
//! - [`channel`] - Single-channel additive update with clamping
//! - [`brush`] - Brush state and the host commands that edit it
//! - [`buffer`] - Per-vertex color buffers with repair-on-access
//! - [`engine`] - Stroke application over a mesh's vertices
//! - [`mesh`] - Host adapter traits and an in-memory mesh
//! - [`session`] - Target + brush session driven by pointer samples
//!
//! Hosts provide ray casting and input; the engine only needs a world-space
//! brush position per stroke.

pub mod brush;
pub mod buffer;
pub mod channel;
pub mod engine;
pub mod error;
pub mod mesh;
pub mod session;
pub mod types;

#[cfg(feature = "bevy")]
pub mod bevy_mesh;

pub use brush::*;
pub use buffer::*;
pub use channel::*;
pub use engine::*;
pub use error::*;
pub use mesh::*;
pub use session::*;
pub use types::*;

#[cfg(feature = "bevy")]
pub use bevy_mesh::BevyPaintTarget;

pub use vertex_paint_config::{BrushLimits, PainterConfig};
