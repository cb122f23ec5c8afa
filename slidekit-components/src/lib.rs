//! Headless controls for the slidekit toolkit.
//!
//! Controls here own geometry and interaction state only. The host supplies
//! render functions, layout sizes and normalized pointer events, and draws
//! whatever the control hands back.
//!
//! # Example
//!
//! ```
//! use slidekit_components::slider::{SliderArgs, SliderController};
//! use slidekit_ui::{Binding, Size};
//!
//! let brightness = Binding::new(0.5_f64);
//! let mut slider = SliderController::new(
//!     brightness.clone(),
//!     SliderArgs::new(|| "track", || "thumb")
//!         .track_fill(|| "fill")
//!         .step(0.1),
//! )?;
//! slider.report_track_size(Size::new(120.0, 20.0));
//!
//! let scene = slider.render();
//! assert_eq!(scene.thumb.unit, "thumb");
//! assert_eq!(scene.fill.map(|fill| fill.width), Some(70.0));
//! # Ok::<(), slidekit_components::slider::SliderConfigError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
