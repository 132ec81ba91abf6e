//! Slider widget for integer range selection.
//!
//! The slider combines three pieces:
//!
//! - [`ControlledValue`] decides who owns the value and is the only way to
//!   change it;
//! - [`CoordinateTracker`] follows a primary-button drag across the owning
//!   document;
//! - [`Slider`] turns drag coordinates and arrow keys into values, keeps the
//!   displayed value inside the range and exposes [`SliderView`] for a
//!   presentation layer to draw from.

mod controlled;
mod props;
mod tracking;

pub use controlled::{ControlledValue, ValueSource, ValueUpdate};
pub use props::{SliderProps, ValueLabel, DEFAULT_COLOR, DISABLED_COLOR};
pub use tracking::CoordinateTracker;

use crate::error::SliderError;
use detent_core::{
    clamp_value_to_range, percent_to_value, step_for, value_to_percent, AccessibleRole, Document,
    ElementId, Event, Key, Modifiers, Point, Rect, Widget,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message emitted when slider value changes.
///
/// For a controlled slider this is a request: the displayed value only
/// changes once the caller feeds the value back with [`Slider::set_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderChanged {
    /// The new value
    pub value: i64,
}

/// Display quantities derived from the slider state, all percentages in
/// `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderView {
    /// Distance of the track's start from the left edge
    pub tracking_offset: i64,
    /// Width of the track
    pub tracking_scale: i64,
    /// Distance of the handle from the left edge
    pub handle_offset: i64,
    /// Whether a drag is in progress
    pub dragging: bool,
    /// Resolved, clamped value
    pub value: i64,
    /// Whether the value tooltip is shown
    pub label_visible: bool,
}

type ChangeHandler = Box<dyn FnMut(&SliderChanged)>;

/// Slider widget for selecting an integer from a range.
pub struct Slider {
    element: ElementId,
    min: i64,
    max: i64,
    value: ControlledValue,
    tracker: CoordinateTracker,
    disabled: bool,
    focused: bool,
    hovered: bool,
    value_label: ValueLabel,
    color: String,
    name: Option<String>,
    html_id: Option<String>,
    tab_index: Option<i32>,
    accessible_name_value: Option<String>,
    /// Tracked element bounds, in screen space
    bounds: Rect,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("element", &self.element)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("tracker", &self.tracker)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Create a slider as a new element of `document`.
    ///
    /// The ownership mode is fixed here: a `value` in `props` makes the
    /// slider controlled for its whole lifetime.
    ///
    /// Construction does not emit messages. A `value` or `default_value`
    /// outside `[min, max]` is displayed clamped, and the host must call
    /// [`Slider::reconcile`] once after mounting (and after registering
    /// [`Slider::on_change`]) to push the corrected value.
    pub fn new(props: SliderProps, document: &Document) -> Result<Self, SliderError> {
        let (min, max) = props.range()?;
        let value = ControlledValue::new(props.value, props.default_value)?;
        let element = document.create_element();

        Ok(Self {
            element,
            min,
            max,
            value,
            tracker: CoordinateTracker::new(document.clone(), element),
            disabled: props.disabled,
            focused: props.auto_focus && !props.disabled,
            hovered: false,
            value_label: props.value_label,
            color: props.color,
            name: props.name,
            html_id: props.id,
            tab_index: props.tab_index,
            accessible_name_value: props.accessible_name,
            bounds: Rect::default(),
            on_change: None,
        })
    }

    /// Register the change handler, called with every emitted message.
    #[must_use]
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SliderChanged) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Resolved value, always inside `[min, max]`.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value.resolve(self.min, self.max)
    }

    /// Get minimum value.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Get maximum value.
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Whether input is suppressed.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the handle has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is over the slider.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Last tracked pointer coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Point {
        self.tracker.coordinates()
    }

    /// Tooltip policy.
    #[must_use]
    pub const fn value_label(&self) -> ValueLabel {
        self.value_label
    }

    /// Form field name of the range input.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Element id of the range input.
    #[must_use]
    pub fn html_id(&self) -> Option<&str> {
        self.html_id.as_deref()
    }

    /// Tab order of the handle.
    #[must_use]
    pub const fn tab_index(&self) -> Option<i32> {
        self.tab_index
    }

    /// Base color, or [`DISABLED_COLOR`] while disabled.
    #[must_use]
    pub fn effective_color(&self) -> &str {
        if self.disabled {
            DISABLED_COLOR
        } else {
            &self.color
        }
    }

    /// Display quantities for the current state.
    #[must_use]
    pub fn view(&self) -> SliderView {
        let value = self.value();
        // min != max is checked at construction, so these are defined
        let tracking_offset = value_to_percent(self.min, self.min, self.max).unwrap_or(0);
        let handle_offset = value_to_percent(value, self.min, self.max).unwrap_or(0);
        let dragging = self.is_dragging();

        SliderView {
            tracking_offset,
            tracking_scale: handle_offset - tracking_offset,
            handle_offset,
            dragging,
            value,
            label_visible: self.value_label.is_visible(dragging, self.focused, self.hovered),
        }
    }

    /// Enable or disable input. Disabling ends any drag in progress and
    /// drops focus; the value is left where it is.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled == self.disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.tracker.disable();
            self.focused = false;
        }
        tracing::debug!(element = %self.element, disabled, "slider disabled state changed");
    }

    /// Change the range. A value left outside the new range is clamped and
    /// pushed through the setter.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<Option<SliderChanged>, SliderError> {
        let (min, max) = props::validate_range(min, max)?;
        self.min = min;
        self.max = max;
        Ok(self.reconcile())
    }

    /// Feed back the caller-owned value of a controlled slider.
    ///
    /// The ownership mode never changes: `None` on a controlled slider, or
    /// any value on an uncontrolled one, is ignored. A fed-back value outside
    /// the range is clamped and pushed through the setter.
    pub fn set_value(&mut self, value: Option<f64>) -> Option<SliderChanged> {
        match value {
            Some(v) if self.value.supply(v) => self.reconcile(),
            Some(v) => {
                tracing::warn!(
                    element = %self.element,
                    value = v,
                    controlled = self.is_controlled(),
                    "fed-back value ignored"
                );
                None
            }
            None => {
                if self.is_controlled() {
                    tracing::warn!(element = %self.element, "controlled slider cannot become uncontrolled");
                }
                None
            }
        }
    }

    /// Clamp and push a source value that lies outside the range.
    pub fn reconcile(&mut self) -> Option<SliderChanged> {
        if !self.value.is_out_of_range(self.min, self.max) {
            return None;
        }
        let bounded = self.value.resolve(self.min, self.max);
        tracing::debug!(
            element = %self.element,
            raw = self.value.raw(),
            bounded,
            "value outside range, clamping"
        );
        self.push(bounded)
    }

    /// The setter: route `new_value` through the value owner and notify.
    fn push(&mut self, new_value: i64) -> Option<SliderChanged> {
        let value = self.value.set(new_value, self.min, self.max).notified()?;
        let message = SliderChanged { value };
        if let Some(handler) = self.on_change.as_mut() {
            handler(&message);
        }
        Some(message)
    }

    /// Recompute the value from the tracked x coordinate.
    fn drag_update(&mut self) -> Option<SliderChanged> {
        if self.disabled || !self.tracker.is_dragging() {
            return None;
        }
        let x = self.tracker.coordinates().x;
        let percent = self.bounds.horizontal_fraction(x);
        let Some(raw) = percent_to_value(percent, self.min, self.max) else {
            tracing::warn!(
                element = %self.element,
                width = self.bounds.width,
                "drag update dropped: position does not map to a value"
            );
            return None;
        };
        let value = clamp_value_to_range(raw, self.min, self.max);
        tracing::trace!(element = %self.element, x, value, "drag value");
        self.push(value)
    }

    fn key_down(&mut self, key: Key, modifiers: Modifiers) -> Option<SliderChanged> {
        if self.disabled || !self.focused {
            return None;
        }
        let step = step_for(self.max, modifiers.shift);
        let current = self.value();
        let next = if key.is_increment() {
            current.saturating_add(step)
        } else if key.is_decrement() {
            current.saturating_sub(step)
        } else {
            return None;
        };
        self.push(clamp_value_to_range(next, self.min, self.max))
    }
}

impl Widget for Slider {
    type Message = SliderChanged;

    fn element(&self) -> ElementId {
        self.element
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn event(&mut self, event: &Event) -> Option<SliderChanged> {
        match event {
            Event::MouseDown {
                position,
                button,
                modifiers,
            } => {
                if !self.bounds.contains_point(position) {
                    return None;
                }
                if self
                    .tracker
                    .press(*position, *button, *modifiers, self.disabled)
                {
                    self.drag_update()
                } else {
                    None
                }
            }
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                None
            }
            Event::FocusIn => {
                if self.is_focusable() {
                    self.focused = true;
                }
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            Event::KeyDown { key, modifiers } => self.key_down(*key, *modifiers),
            _ => None,
        }
    }

    fn document_event(&mut self, event: &Event) -> Option<SliderChanged> {
        match event {
            Event::MouseMove { position } => {
                if self.tracker.moved(*position) {
                    self.drag_update()
                } else {
                    None
                }
            }
            Event::MouseUp { .. } | Event::MouseLeave => {
                self.tracker.release();
                None
            }
            _ => None,
        }
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }
}
