//! Engine errors
//!
//! The physics core itself never fails mid-step. Errors only come from the
//! collaborator-facing surface: bad construction input, stale handles, and
//! settings that would break the solver.

use std::fmt;

use crate::domain::handle::BodyHandle;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Radius must be finite and strictly positive.
    InvalidRadius { radius: f32 },
    /// Body center must be finite.
    InvalidPosition { x: f32, y: f32 },
    /// Handle was never issued, or its body has been removed.
    UnknownHandle { handle: BodyHandle },
    /// Drag update/end on a body that is not being held.
    NotDragging { handle: BodyHandle },
    /// Settings rejected at the configuration boundary.
    InvalidSettings { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "invalid body radius {radius} (must be finite and > 0)")
            }
            Self::InvalidPosition { x, y } => write!(f, "invalid body position ({x}, {y})"),
            Self::UnknownHandle { handle } => write!(f, "unknown body handle {handle}"),
            Self::NotDragging { handle } => write!(f, "body {handle} is not being dragged"),
            Self::InvalidSettings { reason } => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidSettings { reason: e.to_string() }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
