use thiserror::Error;

use crate::surface::DrawableHandle;

/// Errors reported by a rendering surface for handle operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The handle was never issued by this surface, or it was already deleted
    #[error("unknown drawable handle {0}")]
    UnknownHandle(DrawableHandle),
}

/// Error returned when a persisted mode name cannot be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown drawing mode: {0:?}")]
pub struct ParseModeError(pub String);
