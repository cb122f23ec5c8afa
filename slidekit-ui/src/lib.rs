//! Shared primitives for slidekit controls.
//!
//! slidekit controls are headless: they own geometry and interaction logic,
//! while a host framework supplies rendering, layout measurement and pointer
//! capture. This crate holds the pieces that sit on that boundary.
//!
//! # Boundary types
//!
//! - [`Binding`] - a value owned by the caller, read and written by a control
//! - [`Callback`] / [`CallbackWith`] - notifications out of a control
//! - [`RenderSlot`] - injected render functions producing a host-defined unit
//! - [`MeasuredSize`] - asynchronous size reports from the host back in
//! - [`Size`] / [`Offset`] - layout-space geometry
//!
//! ```
//! use slidekit_ui::{Binding, Callback, MeasuredSize, RenderSlot, Size};
//!
//! let value = Binding::new(0.5_f64);
//! let on_changed = Callback::new(|| {});
//! let thumb: RenderSlot<String> = RenderSlot::new(|| "o".to_string());
//! let tooltip_size = MeasuredSize::new();
//!
//! tooltip_size.report(Size::new(32.0, 18.0));
//! on_changed.call();
//! assert_eq!(thumb.render(), "o");
//! assert_eq!(value.get(), 0.5);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod binding;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod prop;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use binding::Binding;
pub use geometry::{Offset, Size};
pub use measure::MeasuredSize;
pub use prop::{Callback, CallbackWith, RenderSlot, Slot};
