//! Domain types: bodies, handles, settings.

pub mod body;
pub mod handle;
pub mod settings;

pub use body::{Body, DragState, Squash};
pub use handle::BodyHandle;
pub use settings::{Bounds, SimSettings, SquashSettings};
