//! Widget trait: the seam between interactive widgets and the host event loop.

use crate::document::ElementId;
use crate::event::Event;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// An interactive element driven by a host event loop.
///
/// The host delivers two kinds of input:
///
/// - element-level events ([`Widget::event`]): presses that hit the
///   widget's bounds, keys while it has focus, focus and hover changes;
/// - document-level events ([`Widget::document_event`]): moves, releases and
///   document leaves, delivered only while the widget holds listeners on its
///   owning document, regardless of where the pointer is.
pub trait Widget {
    /// Message emitted in response to input.
    type Message;

    /// Element id within the owning document.
    fn element(&self) -> ElementId;

    /// Position within allocated bounds (screen space).
    fn layout(&mut self, bounds: Rect);

    /// Current on-screen bounds.
    fn bounds(&self) -> Rect;

    /// Handle an element-level event.
    fn event(&mut self, event: &Event) -> Option<Self::Message>;

    /// Handle a document-level event.
    fn document_event(&mut self, event: &Event) -> Option<Self::Message>;

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }
}

/// Accessible roles for screen readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Slider (range input)
    Slider,
}

impl AccessibleRole {
    /// ARIA role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Slider => "slider",
        }
    }
}
