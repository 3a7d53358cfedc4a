use super::{EventSource, ListenerId, ListenerKind, ListenerScope, RenderSurface};
use crate::engine::PoseEngine;
use crate::error::PoseError;
use crate::input::InputEvent;
use crate::options::Options;

/// Listeners a session holds. Pointer-up is window-wide so a release
/// outside the viewport still ends a drag.
const LISTENERS: [(ListenerKind, ListenerScope); 4] = [
    (ListenerKind::PointerDown, ListenerScope::Surface),
    (ListenerKind::PointerMove, ListenerScope::Surface),
    (ListenerKind::PointerUp, ListenerScope::Window),
    (ListenerKind::Resize, ListenerScope::Window),
];

/// A mounted engine together with the surface and listeners it owns.
///
/// Dropping the session (or calling [`unmount`](Self::unmount)) stops the
/// frame loop, unsubscribes every listener and releases the surface.
pub struct Session<S: RenderSurface, E: EventSource> {
    engine: PoseEngine,
    surface: Option<S>,
    events: E,
    listeners: Vec<ListenerId>,
    running: bool,
}

impl<S: RenderSurface, E: EventSource> Session<S, E> {
    /// Acquire listeners, size the surface and start the frame loop.
    ///
    /// If any listener fails to register, everything acquired so far is
    /// released before the error is returned.
    pub fn mount(
        surface: S,
        events: E,
        (width, height): (u32, u32),
        options: Options,
    ) -> Result<Self, PoseError> {
        let mut session = Self {
            engine: PoseEngine::new((width, height), options),
            surface: Some(surface),
            events,
            listeners: Vec::with_capacity(LISTENERS.len()),
            running: false,
        };

        for (kind, scope) in LISTENERS {
            let id = session.events.subscribe(kind, scope)?;
            session.listeners.push(id);
        }

        if let Some(surface) = session.surface.as_mut() {
            surface.resize(width, height);
        }
        session.running = true;
        log::debug!("session mounted ({width}x{height})");
        Ok(session)
    }

    /// Run one frame: refresh the figure and render it.
    ///
    /// Render failures are logged and returned; the session stays usable.
    /// Does nothing once stopped.
    pub fn tick(&mut self) -> Result<(), PoseError> {
        if !self.running {
            return Ok(());
        }
        self.engine.update();
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.render(&self.engine.frame()).inspect_err(|e| {
            log::warn!("frame render failed: {e}");
        })
    }

    /// Forward an input event. Returns whether the pose changed.
    ///
    /// Resizes to a zero width or height are dropped before either the
    /// surface or the camera sees them.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if let InputEvent::Resized { width, height } = event {
            if width == 0 || height == 0 {
                log::trace!("ignoring degenerate resize {width}x{height}");
                return false;
            }
            surface.resize(width, height);
        }
        self.engine.handle_input(event)
    }

    /// Stop the frame loop; listeners and surface stay attached.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop, unsubscribe every listener and release the surface. Safe to
    /// call more than once.
    pub fn unmount(&mut self) {
        self.running = false;
        for id in self.listeners.drain(..) {
            self.events.unsubscribe(id);
        }
        if let Some(mut surface) = self.surface.take() {
            surface.release();
            log::debug!("session unmounted");
        }
    }

    /// Whether frames are being produced.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the surface is still held.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &PoseEngine {
        &self.engine
    }

    /// Mutable engine access (imports, editor, options).
    pub fn engine_mut(&mut self) -> &mut PoseEngine {
        &mut self.engine
    }
}

impl<S: RenderSurface, E: EventSource> Drop for Session<S, E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
