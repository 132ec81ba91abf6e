//! Core types and traits for Detent widgets.
//!
//! This crate provides foundational types used throughout Detent:
//! - Geometric primitives: [`Point`], [`Rect`]
//! - Input events: [`Event`], [`MouseButton`], [`Key`], [`Modifiers`]
//! - Range math: [`percent_to_value`], [`value_to_percent`], [`clamp_value_to_range`]
//! - Owning-document listeners with scoped guards: [`Document`], [`ListenerGuard`]
//! - The [`Widget`] seam between widgets and a host event loop

mod document;
mod event;
mod geometry;
pub mod range;
pub mod widget;

pub use document::{Document, ElementId, ListenerGuard, ListenerKind};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use geometry::{Point, Rect};
pub use range::{clamp_value_to_range, percent_to_value, round_half_up, step_for, value_to_percent};
pub use widget::{AccessibleRole, Widget};
