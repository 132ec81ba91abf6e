//! Test harness acting as the host event loop for Detent sliders.
//!
//! The harness owns a [`Document`] and the sliders mounted into it, and
//! delivers input the way a browser does:
//!
//! - presses are hit-tested against slider bounds (element-level);
//! - moves, releases and document leaves are routed through
//!   [`Document::route`] to whichever sliders hold document listeners,
//!   wherever the pointer is;
//! - keys go to the focused slider only.

use detent_core::{
    AccessibleRole, Document, ElementId, Event, Key, Modifiers, MouseButton, Point, Rect, Widget,
};
use detent_widgets::{Slider, SliderChanged, SliderError, SliderProps};
use std::collections::VecDeque;

/// Row height used when laying out sliders without explicit bounds.
const ROW_HEIGHT: f32 = 24.0;
/// Vertical gap between auto-laid-out sliders.
const ROW_GAP: f32 = 16.0;
/// Horizontal margin of auto-laid-out sliders.
const MARGIN: f32 = 20.0;

#[derive(Debug)]
enum Dispatch {
    Element(ElementId, Event),
    Document(Event),
}

/// Test harness for interacting with mounted sliders.
pub struct Harness {
    document: Document,
    sliders: Vec<Slider>,
    /// Event queue for simulation
    event_queue: VecDeque<Dispatch>,
    /// Current viewport size
    viewport: Rect,
    focused: Option<ElementId>,
    hovered: Option<ElementId>,
    messages: Vec<(ElementId, SliderChanged)>,
    /// Feed change requests of controlled sliders straight back, like a
    /// caller that stores the value and re-renders
    feed_back: bool,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Create a harness with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            sliders: Vec::new(),
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            focused: None,
            hovered: None,
            messages: Vec::new(),
            feed_back: false,
        }
    }

    /// Set the viewport size.
    #[must_use]
    pub const fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self
    }

    /// Feed controlled change requests back into the slider.
    #[must_use]
    pub const fn feed_back(mut self, enabled: bool) -> Self {
        self.feed_back = enabled;
        self
    }

    /// The document sliders are mounted into.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    // === Mounting ===

    /// Mount a slider in the next free row of the viewport.
    pub fn mount(&mut self, props: SliderProps) -> Result<ElementId, SliderError> {
        let row = self.sliders.len() as f32;
        let bounds = Rect::new(
            MARGIN,
            row.mul_add(ROW_HEIGHT + ROW_GAP, MARGIN),
            self.viewport.width - 2.0 * MARGIN,
            ROW_HEIGHT,
        );
        self.mount_at(props, bounds)
    }

    /// Mount a slider at the given bounds.
    pub fn mount_at(&mut self, props: SliderProps, bounds: Rect) -> Result<ElementId, SliderError> {
        let auto_focus = props.auto_focus;
        let mut slider = Slider::new(props, &self.document)?;
        slider.layout(bounds);
        let id = slider.element();
        // Mount-time correction of an out-of-range value
        let correction = slider.reconcile();
        self.sliders.push(slider);
        if let Some(message) = correction {
            self.record(id, message);
        }
        if auto_focus && self.focused.is_none() {
            self.focus(id);
        }
        tracing::debug!(element = %id, ?bounds, "slider mounted");
        Ok(id)
    }

    /// Unmount a slider, dropping it and any listeners it holds.
    pub fn unmount(&mut self, id: ElementId) -> &mut Self {
        self.sliders.retain(|s| s.element() != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        self
    }

    /// Move a slider to new bounds.
    pub fn relayout(&mut self, id: ElementId, bounds: Rect) -> &mut Self {
        if let Some(slider) = self.slider_mut(id) {
            slider.layout(bounds);
        }
        self
    }

    // === Event Simulation ===

    /// Simulate a primary-button press at `position`.
    pub fn mouse_down(&mut self, position: Point) -> &mut Self {
        self.mouse_down_with(position, MouseButton::Left, Modifiers::NONE)
    }

    /// Simulate a press with an explicit button and modifiers.
    pub fn mouse_down_with(
        &mut self,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> &mut Self {
        if let Some(id) = self.hit_test(position) {
            self.event_queue.push_back(Dispatch::Element(
                id,
                Event::MouseDown {
                    position,
                    button,
                    modifiers,
                },
            ));
        }
        self.process_events();
        self
    }

    /// Simulate pointer motion to `position`.
    pub fn mouse_move(&mut self, position: Point) -> &mut Self {
        let over = self.hit_test(position);
        if over != self.hovered {
            if let Some(previous) = self.hovered {
                self.event_queue
                    .push_back(Dispatch::Element(previous, Event::MouseLeave));
            }
            if let Some(next) = over {
                self.event_queue
                    .push_back(Dispatch::Element(next, Event::MouseEnter));
            }
            self.hovered = over;
        }
        self.event_queue
            .push_back(Dispatch::Document(Event::MouseMove { position }));
        self.process_events();
        self
    }

    /// Simulate a primary-button release at `position`.
    pub fn mouse_up(&mut self, position: Point) -> &mut Self {
        self.mouse_up_with(position, MouseButton::Left)
    }

    /// Simulate a release of `button` at `position`.
    pub fn mouse_up_with(&mut self, position: Point, button: MouseButton) -> &mut Self {
        self.event_queue
            .push_back(Dispatch::Document(Event::MouseUp { position, button }));
        self.process_events();
        self
    }

    /// Simulate the pointer leaving the document.
    pub fn mouse_leave_document(&mut self) -> &mut Self {
        if let Some(previous) = self.hovered.take() {
            self.event_queue
                .push_back(Dispatch::Element(previous, Event::MouseLeave));
        }
        self.event_queue
            .push_back(Dispatch::Document(Event::MouseLeave));
        self.process_events();
        self
    }

    /// Press at `from`, move to `to` and release, both given as fractions of
    /// the slider's width. Fractions outside `0..=1` leave the slider.
    pub fn drag(&mut self, id: ElementId, from: f32, to: f32) -> &mut Self {
        if let Some(bounds) = self.slider(id).map(Widget::bounds) {
            let start = bounds.point_at(from, 0.5);
            let end = bounds.point_at(to, 0.5);
            self.mouse_down(start).mouse_move(end).mouse_up(end);
        }
        self
    }

    /// Give keyboard focus to a slider's handle.
    pub fn focus(&mut self, id: ElementId) -> &mut Self {
        let focusable = self.slider(id).is_some_and(Widget::is_focusable);
        if !focusable || self.focused == Some(id) {
            return self;
        }
        if let Some(previous) = self.focused.take() {
            self.event_queue
                .push_back(Dispatch::Element(previous, Event::FocusOut));
        }
        self.event_queue
            .push_back(Dispatch::Element(id, Event::FocusIn));
        self.focused = Some(id);
        self.process_events();
        self
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) -> &mut Self {
        if let Some(previous) = self.focused.take() {
            self.event_queue
                .push_back(Dispatch::Element(previous, Event::FocusOut));
            self.process_events();
        }
        self
    }

    /// Simulate a key press on the focused slider.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with modifiers on the focused slider.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> &mut Self {
        if let Some(id) = self.focused {
            self.event_queue
                .push_back(Dispatch::Element(id, Event::KeyDown { key, modifiers }));
            self.event_queue
                .push_back(Dispatch::Element(id, Event::KeyUp { key }));
            self.process_events();
        }
        self
    }

    // === Caller-side updates ===

    /// Enable or disable a slider.
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) -> &mut Self {
        if let Some(slider) = self.slider_mut(id) {
            slider.set_disabled(disabled);
        }
        if disabled && self.focused == Some(id) {
            self.focused = None;
        }
        self
    }

    /// Feed a caller-owned value into a controlled slider.
    pub fn set_value(&mut self, id: ElementId, value: Option<f64>) -> &mut Self {
        if let Some(message) = self.slider_mut(id).and_then(|s| s.set_value(value)) {
            self.record(id, message);
        }
        self
    }

    /// Change a slider's range.
    pub fn set_range(&mut self, id: ElementId, min: f64, max: f64) -> Result<&mut Self, SliderError> {
        let message = match self.slider_mut(id) {
            Some(slider) => slider.set_range(min, max)?,
            None => None,
        };
        if let Some(message) = message {
            self.record(id, message);
        }
        Ok(self)
    }

    // === Queries ===

    /// Look up a mounted slider.
    #[must_use]
    pub fn slider(&self, id: ElementId) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.element() == id)
    }

    /// Look up a mounted slider mutably.
    pub fn slider_mut(&mut self, id: ElementId) -> Option<&mut Slider> {
        self.sliders.iter_mut().find(|s| s.element() == id)
    }

    /// Resolved value of a slider.
    #[must_use]
    pub fn value(&self, id: ElementId) -> Option<i64> {
        self.slider(id).map(Slider::value)
    }

    /// Whether a slider is being dragged.
    #[must_use]
    pub fn is_dragging(&self, id: ElementId) -> bool {
        self.slider(id).is_some_and(Slider::is_dragging)
    }

    /// Currently focused slider.
    #[must_use]
    pub const fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Sliders exposing the given accessible role, in mount order.
    #[must_use]
    pub fn query_role(&self, role: AccessibleRole) -> Vec<ElementId> {
        self.sliders
            .iter()
            .filter(|s| s.accessible_role() == role)
            .map(Widget::element)
            .collect()
    }

    /// Slider with the given accessible name.
    #[must_use]
    pub fn query_name(&self, name: &str) -> Option<ElementId> {
        self.sliders
            .iter()
            .find(|s| s.accessible_name() == Some(name))
            .map(Widget::element)
    }

    /// Every change message emitted so far, tagged by slider.
    #[must_use]
    pub fn messages(&self) -> &[(ElementId, SliderChanged)] {
        &self.messages
    }

    /// Values of the messages emitted by one slider.
    #[must_use]
    pub fn messages_for(&self, id: ElementId) -> Vec<i64> {
        self.messages
            .iter()
            .filter(|(from, _)| *from == id)
            .map(|(_, m)| m.value)
            .collect()
    }

    /// Drain recorded messages.
    pub fn take_messages(&mut self) -> Vec<(ElementId, SliderChanged)> {
        std::mem::take(&mut self.messages)
    }

    // === Assertions ===

    /// Assert a slider's resolved value.
    ///
    /// # Panics
    ///
    /// Panics if the slider is missing or the value differs.
    pub fn assert_value(&self, id: ElementId, expected: i64) -> &Self {
        let actual = self.value(id);
        assert_eq!(
            actual,
            Some(expected),
            "Expected slider {id} to have value {expected} but got {actual:?}"
        );
        self
    }

    /// Assert a slider's dragging flag, and that it holds document listeners
    /// exactly while dragging.
    ///
    /// # Panics
    ///
    /// Panics if the flag or the listener state differs.
    pub fn assert_dragging(&self, id: ElementId, expected: bool) -> &Self {
        let actual = self.is_dragging(id);
        assert_eq!(
            actual, expected,
            "Expected slider {id} dragging={expected} but got {actual}"
        );
        let listening = self.document.is_listening(id);
        assert_eq!(
            listening, expected,
            "Expected slider {id} listening={expected} but got {listening}"
        );
        self
    }

    /// Assert the number of elements with a role.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_role_count(&self, role: AccessibleRole, expected: usize) -> &Self {
        let actual = self.query_role(role).len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} elements with role '{}' but found {actual}",
            role.as_str()
        );
        self
    }

    // === Internal ===

    fn hit_test(&self, position: Point) -> Option<ElementId> {
        self.sliders
            .iter()
            .rev()
            .find(|s| s.bounds().contains_point(&position))
            .map(Widget::element)
    }

    fn process_events(&mut self) {
        while let Some(dispatch) = self.event_queue.pop_front() {
            match dispatch {
                Dispatch::Element(id, event) => self.deliver(id, &event, false),
                Dispatch::Document(event) => {
                    // Targets are resolved per event, so a release queued
                    // before a move stops the move from being routed.
                    for id in self.document.route(&event) {
                        self.deliver(id, &event, true);
                    }
                }
            }
        }
    }

    fn deliver(&mut self, id: ElementId, event: &Event, document_level: bool) {
        let Some(slider) = self.slider_mut(id) else {
            return;
        };
        let message = if document_level {
            slider.document_event(event)
        } else {
            slider.event(event)
        };
        if let Some(message) = message {
            self.record(id, message);
        }
    }

    fn record(&mut self, id: ElementId, message: SliderChanged) {
        self.messages.push((id, message));
        if !self.feed_back {
            return;
        }
        let correction = self
            .slider_mut(id)
            .filter(|s| s.is_controlled())
            .and_then(|s| s.set_value(Some(message.value as f64)));
        // Requests are clamped, so a fed-back value needs no further
        // correction.
        if let Some(correction) = correction {
            self.messages.push((id, correction));
        }
    }
}
