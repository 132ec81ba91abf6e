//! Pointer coordinate tracking for drag interactions.
//!
//! Two states: idle and dragging. A primary-button press on the tracked
//! element starts a drag and attaches move/release/leave listeners to the
//! element's owning document; the drag ends on the next release or document
//! leave, or when tracking is disabled. While dragging, every document move
//! updates the coordinates regardless of where the pointer is.

use detent_core::{Document, ElementId, ListenerGuard, ListenerKind, Modifiers, MouseButton, Point};

const DRAG_LISTENERS: [ListenerKind; 3] =
    [ListenerKind::Move, ListenerKind::Release, ListenerKind::Leave];

/// Drag state machine for one element.
///
/// The document listeners are owned by the tracker: they exist exactly while
/// it is dragging and are released on every exit path, including drop.
#[derive(Debug)]
pub struct CoordinateTracker {
    document: Document,
    element: ElementId,
    coordinates: Point,
    listeners: Option<ListenerGuard>,
}

impl CoordinateTracker {
    /// Track `element`, which belongs to `document`.
    #[must_use]
    pub fn new(document: Document, element: ElementId) -> Self {
        Self {
            document,
            element,
            coordinates: Point::ORIGIN,
            listeners: None,
        }
    }

    /// Coordinates of the most recently tracked event.
    #[must_use]
    pub const fn coordinates(&self) -> Point {
        self.coordinates
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.listeners.is_some()
    }

    /// Handle a press on the element. Returns `true` if it started (or
    /// continued) a drag; secondary presses and presses while disabled are
    /// ignored.
    pub fn press(
        &mut self,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        disabled: bool,
    ) -> bool {
        if disabled || !button.is_primary() || modifiers.is_secondary_click() {
            return false;
        }
        self.coordinates = position;
        if self.listeners.is_none() {
            self.listeners = Some(self.document.listen(self.element, &DRAG_LISTENERS));
            tracing::debug!(element = %self.element, x = position.x, y = position.y, "drag started");
        }
        true
    }

    /// Handle a document move. Returns `true` if the coordinates changed
    /// because a drag is in progress.
    pub fn moved(&mut self, position: Point) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.coordinates = position;
        true
    }

    /// Handle a document release or leave. Returns `true` if a drag ended.
    pub fn release(&mut self) -> bool {
        let ended = self.listeners.take().is_some();
        if ended {
            tracing::debug!(element = %self.element, "drag ended");
        }
        ended
    }

    /// Tear down tracking because the element was disabled. Coordinates are
    /// left as they were. Returns `true` if a drag was cancelled.
    pub fn disable(&mut self) -> bool {
        let cancelled = self.listeners.take().is_some();
        if cancelled {
            tracing::debug!(element = %self.element, "drag cancelled by disable");
        }
        cancelled
    }
}
