//! Error types for the vertex paint engine.

/// Errors raised at the boundary where hosts hand in untyped values.
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    /// Channel tag did not name one of red, green, blue or alpha
    #[error("Invalid color channel: {0}")]
    InvalidChannel(String),
}
