//! Host integration: the render backend and input source seen from the
//! engine, and the [`Session`] scope that owns them.
//!
//! The crate never talks to a GPU or windowing system directly. A host
//! implements [`RenderSurface`] and [`EventSource`] over whatever it runs
//! on, mounts a [`Session`], and forwards translated events to
//! [`Session::dispatch`].

mod session;

pub use session::Session;

use crate::error::PoseError;
use crate::frame::FrameData;

/// Which input stream a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer released.
    PointerUp,
    /// Viewport resized.
    Resize,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Only events over the render surface.
    Surface,
    /// Events anywhere in the host window.
    Window,
}

/// Handle returned by [`EventSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// A drawable target owned by a [`Session`].
pub trait RenderSurface {
    /// The viewport changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameData) -> Result<(), PoseError>;

    /// Free the surface's resources. Called exactly once per session.
    fn release(&mut self);
}

/// Registers and removes input listeners in the host.
pub trait EventSource {
    /// Attach a listener.
    fn subscribe(
        &mut self,
        kind: ListenerKind,
        scope: ListenerScope,
    ) -> Result<ListenerId, PoseError>;

    /// Detach a listener previously returned by
    /// [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, id: ListenerId);
}
