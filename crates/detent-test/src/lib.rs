//! Test harness for Detent sliders.
//!
//! [`Harness`] plays the host event loop: it hit-tests presses, routes
//! document-level pointer events through the owning document and tracks
//! focus. [`StoryCatalog`] holds the named slider configurations the
//! interaction tests mount.

#![allow(clippy::missing_const_for_fn)]

mod harness;
mod stories;

pub use harness::Harness;
pub use stories::{Story, StoryCatalog, Template};
