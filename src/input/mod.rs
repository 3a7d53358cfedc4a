//! Input handling: platform-agnostic event types and the joint-drag state
//! machine.

/// Joint drag state machine.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;

pub use drag::{DragController, DragState};
pub use event::{InputEvent, MouseButton};
