//! A headless single-thumb slider bound to a numeric value.
//!
//! ## Usage
//!
//! Create a [`SliderController`] from a [`Binding`] and [`SliderArgs`], feed
//! it track sizes, tooltip sizes and drag events from the host, and render
//! the [`SliderScene`] it returns.
//!
//! ```
//! use slidekit_components::slider::{DragEvent, SliderArgs, SliderController};
//! use slidekit_ui::{Binding, Size};
//!
//! let volume = Binding::new(0.0_f64);
//! let args = SliderArgs::new(|| "====", || "o")
//!     .range(0.0..=100.0)
//!     .step(10.0)
//!     .magnetized(true);
//! let mut slider = SliderController::new(volume.clone(), args)?;
//!
//! slider.report_track_size(Size::new(240.0, 40.0));
//! // The pointer lands 94px into a 200px span: a raw value of 47.
//! slider.handle_drag(DragEvent::Started { x: 114.0 });
//! assert_eq!(volume.get(), 50.0);
//!
//! slider.handle_drag(DragEvent::Ended);
//! assert_eq!(slider.normalized_position(), 0.5);
//! # Ok::<(), slidekit_components::slider::SliderConfigError>(())
//! ```
use std::ops::RangeInclusive;

use derive_setters::Setters;
use slidekit_ui::{Binding, Callback, MeasuredSize, Offset, RenderSlot, Size};
use thiserror::Error;
use tracing::debug;

use interaction::{DragState, handle_drag_event};
use render::{render_fill, render_thumb, render_tooltip};

pub use interaction::DragEvent;
pub use layout::SliderLayout;
pub use mapping::{clamp_to_range, position_to_value, quantize, value_to_normalized};
pub use render::{FillPart, SliderScene, ThumbPart, TooltipPart};
pub use tooltip::tooltip_offset;

mod interaction;
mod layout;
pub mod mapping;
mod render;
mod tooltip;

const DEFAULT_STEP: f64 = 0.01;

/// Errors raised when slider arguments break their construction contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderConfigError {
    /// A bound is NaN or infinite.
    #[error("slider bounds must be finite, got {lower}..={upper}")]
    NonFiniteBound {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },
    /// The lower bound is not strictly below the upper bound.
    #[error("slider range {lower}..={upper} is empty")]
    EmptyRange {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },
    /// The step is zero, negative or not finite.
    #[error("slider step must be positive and finite, got {step}")]
    NonPositiveStep {
        /// Step as given.
        step: f64,
    },
    /// The step is wider than the whole range.
    #[error("slider step {step} exceeds the range width {width}")]
    StepExceedsRange {
        /// Step as given.
        step: f64,
        /// `upper - lower`.
        width: f64,
    },
}

/// Arguments for [`SliderController`].
///
/// `U` is whatever the host's render functions produce; the slider only
/// positions these units.
#[derive(Setters)]
pub struct SliderArgs<U> {
    /// Closed range of the bound value. The lower bound must be strictly
    /// below the upper bound.
    pub range: RangeInclusive<f64>,
    /// Quantization step, counted from the lower bound. Must be positive and
    /// no wider than the range.
    pub step: f64,
    /// Snap the thumb onto the stepped value when a drag ends.
    ///
    /// Without it the thumb stays where the pointer left it, which may sit
    /// between two steps until the next drag.
    pub magnetized: bool,
    /// Called after every drag update has written the bound value.
    #[setters(skip)]
    pub on_changed: Callback,
    /// Called when a drag ends.
    #[setters(skip)]
    pub on_ended: Callback,
    /// Renders the track background.
    #[setters(skip)]
    pub track_background: RenderSlot<U>,
    /// Renders the filled part of the track. Nothing is drawn when `None`.
    #[setters(skip)]
    pub track_fill: Option<RenderSlot<U>>,
    /// Renders the thumb.
    #[setters(skip)]
    pub thumb: RenderSlot<U>,
    /// Renders the tooltip content. Nothing is drawn when `None`.
    #[setters(skip)]
    pub tooltip: Option<RenderSlot<U>>,
}

impl<U> SliderArgs<U> {
    /// Creates args with the two mandatory render functions, a `0..=1` range
    /// and a step of `0.01`.
    pub fn new<B, T>(track_background: B, thumb: T) -> Self
    where
        B: Fn() -> U + Send + Sync + 'static,
        T: Fn() -> U + Send + Sync + 'static,
    {
        Self {
            range: 0.0..=1.0,
            step: DEFAULT_STEP,
            magnetized: false,
            on_changed: Callback::default(),
            on_ended: Callback::default(),
            track_background: RenderSlot::new(track_background),
            track_fill: None,
            thumb: RenderSlot::new(thumb),
            tooltip: None,
        }
    }

    /// Sets the change handler.
    pub fn on_changed<F>(mut self, on_changed: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_changed = Callback::new(on_changed);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_changed_shared(mut self, on_changed: impl Into<Callback>) -> Self {
        self.on_changed = on_changed.into();
        self
    }

    /// Sets the drag-end handler.
    pub fn on_ended<F>(mut self, on_ended: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_ended = Callback::new(on_ended);
        self
    }

    /// Sets the drag-end handler using a shared callback.
    pub fn on_ended_shared(mut self, on_ended: impl Into<Callback>) -> Self {
        self.on_ended = on_ended.into();
        self
    }

    /// Sets the track fill render function.
    pub fn track_fill<F>(mut self, render: F) -> Self
    where
        F: Fn() -> U + Send + Sync + 'static,
    {
        self.track_fill = Some(RenderSlot::new(render));
        self
    }

    /// Sets the tooltip render function.
    pub fn tooltip<F>(mut self, render: F) -> Self
    where
        F: Fn() -> U + Send + Sync + 'static,
    {
        self.tooltip = Some(RenderSlot::new(render));
        self
    }

    /// `(lower, upper)` bounds of the range.
    pub fn bounds(&self) -> (f64, f64) {
        (*self.range.start(), *self.range.end())
    }

    /// Checks the construction contract.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        let (lower, upper) = self.bounds();
        if !lower.is_finite() || !upper.is_finite() {
            return Err(SliderConfigError::NonFiniteBound { lower, upper });
        }
        if lower >= upper {
            return Err(SliderConfigError::EmptyRange { lower, upper });
        }
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(SliderConfigError::NonPositiveStep { step: self.step });
        }
        let width = upper - lower;
        if self.step > width {
            return Err(SliderConfigError::StepExceedsRange {
                step: self.step,
                width,
            });
        }
        Ok(())
    }
}

impl<U> Clone for SliderArgs<U> {
    fn clone(&self) -> Self {
        Self {
            range: self.range.clone(),
            step: self.step,
            magnetized: self.magnetized,
            on_changed: self.on_changed.clone(),
            on_ended: self.on_ended.clone(),
            track_background: self.track_background.clone(),
            track_fill: self.track_fill.clone(),
            thumb: self.thumb.clone(),
            tooltip: self.tooltip.clone(),
        }
    }
}

impl<U> PartialEq for SliderArgs<U> {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
            && self.step == other.step
            && self.magnetized == other.magnetized
            && self.on_changed == other.on_changed
            && self.on_ended == other.on_ended
            && self.track_background == other.track_background
            && self.track_fill == other.track_fill
            && self.thumb == other.thumb
            && self.tooltip == other.tooltip
    }
}

impl<U> std::fmt::Debug for SliderArgs<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderArgs")
            .field("range", &self.range)
            .field("step", &self.step)
            .field("magnetized", &self.magnetized)
            .field("track_fill", &self.track_fill.is_some())
            .field("tooltip", &self.tooltip.is_some())
            .finish_non_exhaustive()
    }
}

/// Controller for a single slider instance.
///
/// The bound value lives in the caller's [`Binding`]; the controller writes
/// it on every drag update and never keeps a copy of its own.
pub struct SliderController<U> {
    args: SliderArgs<U>,
    value: Binding<f64>,
    layout: SliderLayout,
    drag: DragState,
    tooltip_size: MeasuredSize,
}

impl<U> SliderController<U> {
    /// Creates a controller for `value`.
    ///
    /// Fails if `args` break the range or step contract. A bound value that
    /// starts outside the range is clamped into it.
    pub fn new(value: Binding<f64>, args: SliderArgs<U>) -> Result<Self, SliderConfigError> {
        args.validate()?;
        let (lower, upper) = args.bounds();
        value.with_mut(|v| {
            let clamped = clamp_to_range(*v, lower, upper);
            if clamped != *v {
                debug!(value = *v, clamped, "initial slider value outside range");
                *v = clamped;
            }
        });
        Ok(Self {
            args,
            value,
            layout: SliderLayout::default(),
            drag: DragState::default(),
            tooltip_size: MeasuredSize::new(),
        })
    }

    /// The arguments this controller was built with.
    pub fn args(&self) -> &SliderArgs<U> {
        &self.args
    }

    /// The bound value handle.
    pub fn binding(&self) -> &Binding<f64> {
        &self.value
    }

    /// Current bound value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Writes the bound value from outside a drag, clamped to the range.
    ///
    /// The thumb follows the new value even if the last drag left it between
    /// steps.
    pub fn set_value(&mut self, value: f64) {
        let (lower, upper) = self.args.bounds();
        self.value.set(clamp_to_range(value, lower, upper));
        self.drag.release_thumb();
    }

    /// Thumb position in `[0, 1]`, used for fill sizing and thumb placement.
    pub fn normalized_position(&self) -> f64 {
        let (lower, upper) = self.args.bounds();
        self.drag.position(self.value.get(), lower, upper)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the tooltip should be shown.
    pub fn is_tooltip_visible(&self) -> bool {
        self.drag.tooltip_visible()
    }

    /// Layout resolved from the last track size report.
    pub fn layout(&self) -> SliderLayout {
        self.layout
    }

    /// Records the control's size from the host layout pass.
    pub fn report_track_size(&mut self, size: Size) {
        let layout = SliderLayout::new(size);
        if layout != self.layout {
            debug!(?size, dragging = self.is_dragging(), "slider track resized");
            self.layout = layout;
        }
    }

    /// Handle the host uses to report the tooltip's rendered size.
    pub fn tooltip_size(&self) -> MeasuredSize {
        self.tooltip_size.clone()
    }

    /// Records the tooltip's rendered size. Returns `true` if it changed.
    pub fn report_tooltip_size(&self, size: Size) -> bool {
        self.tooltip_size.report(size)
    }

    /// Tooltip anchor for the current frame, `None` while hidden.
    pub fn tooltip_offset(&self) -> Option<Offset> {
        self.is_tooltip_visible().then(|| {
            tooltip_offset(
                &self.layout,
                self.normalized_position(),
                self.tooltip_size.get(),
            )
        })
    }

    /// Feeds a pointer event. Returns `true` if the event was consumed.
    pub fn handle_drag(&mut self, event: DragEvent) -> bool {
        handle_drag_event(&mut self.drag, event, &self.args, &self.layout, &self.value)
    }

    /// Starts a drag at `x`, or continues one already in progress. Always
    /// consumed.
    pub fn drag_begin(&mut self, x: f32) -> bool {
        self.handle_drag(DragEvent::Started { x })
    }

    /// Moves the current drag to `x`. Ignored while idle.
    pub fn drag_move(&mut self, x: f32) -> bool {
        self.handle_drag(DragEvent::Moved { x })
    }

    /// Ends the current drag. Ignored while idle.
    pub fn drag_end(&mut self) -> bool {
        self.handle_drag(DragEvent::Ended)
    }

    /// Runs the render functions and places their output for this frame.
    pub fn render(&self) -> SliderScene<U> {
        let position = self.normalized_position();
        SliderScene {
            size: Size::new(self.layout.component_width, self.layout.component_height),
            position,
            background: self.args.track_background.render(),
            fill: render_fill(&self.args, &self.layout, position),
            thumb: render_thumb(&self.args, &self.layout, position),
            tooltip: self
                .tooltip_offset()
                .and_then(|offset| render_tooltip(&self.args, offset)),
        }
    }
}

impl<U> std::fmt::Debug for SliderController<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderController")
            .field("args", &self.args)
            .field("value", &self.value)
            .field("layout", &self.layout)
            .field("dragging", &self.is_dragging())
            .field("tooltip_size", &self.tooltip_size)
            .finish()
    }
}
