//! Layout-space geometry for slidekit controls.
//!
//! Coordinates are logical pixels in the control's local space:
//! - Origin (0, 0) at the top-left corner of the control
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed, e.g. for a tooltip floating above the
//!   track
//!
//! # Key Types
//!
//! - [`Size`] - A width/height pair reported by the host layout pass
//! - [`Offset`] - A 2D displacement or position in the same space
//!
//! # Example
//!
//! ```
//! use slidekit_ui::geometry::{Offset, Size};
//!
//! let track = Size::new(240.0, 40.0);
//! assert_eq!(track.width - track.height, 200.0);
//!
//! let anchor = Offset::new(10.0, -20.0);
//! assert!(anchor.y < Offset::ZERO.y);
//! ```

/// A width/height pair in logical pixels.
///
/// Sizes come from the host's measurement pass. Nothing here forbids a zero
/// or negative size: a control laid out before its first real layout pass
/// commonly sees [`Size::ZERO`], and callers are expected to treat such
/// geometry as degenerate rather than as an error.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// The width in logical pixels.
    pub width: f32,
    /// The height in logical pixels.
    pub height: f32,
}

impl Size {
    /// A size with zero width and height.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new `Size`.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D offset in logical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    /// The horizontal component.
    pub x: f32,
    /// The vertical component.
    pub y: f32,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new `Offset`.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
