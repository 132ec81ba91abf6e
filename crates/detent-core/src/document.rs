//! Owning-document listener registry.
//!
//! Widgets that need to keep receiving pointer input after the pointer leaves
//! their bounds attach listeners to the document that owns them instead of
//! to themselves. Attaching hands back a [`ListenerGuard`]; the listeners
//! stay attached exactly as long as the guard lives.
//!
//! The registry is single-threaded and shared between the host event loop
//! (which calls [`Document::route`]) and the widgets holding guards.

use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Document-level event classes a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    /// Pointer moved anywhere in the document
    Move,
    /// Pointer button released anywhere in the document
    Release,
    /// Pointer left the document
    Leave,
}

impl ListenerKind {
    /// The listener class an event is routed to, if it is document-level.
    #[must_use]
    pub const fn of(event: &Event) -> Option<Self> {
        match event {
            Event::MouseMove { .. } => Some(Self::Move),
            Event::MouseUp { .. } => Some(Self::Release),
            Event::MouseLeave => Some(Self::Leave),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

#[derive(Debug)]
struct Listener {
    id: ListenerId,
    element: ElementId,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
struct Registry {
    next_element: u64,
    next_listener: u64,
    listeners: Vec<Listener>,
}

/// Handle to a shared document. Clones refer to the same document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new element id owned by this document.
    pub fn create_element(&self) -> ElementId {
        let mut registry = self.registry.borrow_mut();
        registry.next_element += 1;
        ElementId(registry.next_element)
    }

    /// Attach document-level listeners on behalf of `element`.
    ///
    /// The listeners are detached when the returned guard is dropped.
    #[must_use = "listeners are detached as soon as the guard is dropped"]
    pub fn listen(&self, element: ElementId, kinds: &[ListenerKind]) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        registry.next_listener += 1;
        let id = ListenerId(registry.next_listener);
        for &kind in kinds {
            registry.listeners.push(Listener { id, element, kind });
        }
        tracing::trace!(%element, ?kinds, "document listeners attached");
        ListenerGuard {
            registry: Rc::downgrade(&self.registry),
            id,
            element,
        }
    }

    /// Elements listening for this event, in attach order.
    ///
    /// Returns an empty list for events that are not document-level. The
    /// list is collected before any delivery, so handlers may drop their
    /// guards while it is being dispatched.
    #[must_use]
    pub fn route(&self, event: &Event) -> Vec<ElementId> {
        let Some(kind) = ListenerKind::of(event) else {
            return Vec::new();
        };
        let registry = self.registry.borrow();
        let mut targets: Vec<ElementId> = Vec::new();
        for listener in registry.listeners.iter().filter(|l| l.kind == kind) {
            if !targets.contains(&listener.element) {
                targets.push(listener.element);
            }
        }
        targets
    }

    /// Whether `element` currently holds any document listener.
    #[must_use]
    pub fn is_listening(&self, element: ElementId) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|l| l.element == element)
    }

    /// Total number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a set of document listeners attached. Dropping it detaches them.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: ListenerId,
    element: ElementId,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The document may already be gone; nothing left to detach then.
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
            tracing::trace!(element = %self.element, "document listeners detached");
        }
    }
}
