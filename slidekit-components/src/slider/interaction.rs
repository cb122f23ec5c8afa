use slidekit_ui::Binding;
use tracing::{debug, trace};

use super::{
    SliderArgs, SliderLayout,
    mapping::{map_offset, value_to_normalized},
};

/// A normalized pointer event in the track's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer went down at `x` and a drag begins.
    Started {
        /// Horizontal pointer coordinate.
        x: f32,
    },
    /// The pointer moved to `x` while dragging.
    Moved {
        /// Horizontal pointer coordinate.
        x: f32,
    },
    /// The pointer was released.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    last_raw_offset: f32,
}

/// Thumb position that follows the unstepped pointer value instead of the
/// bound value. Only valid while the bound value still equals `written`; a
/// write of that same value cannot be told apart from no write at all.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ThumbOverride {
    position: f64,
    written: f64,
}

/// Interaction state for a single-thumb slider.
///
/// Idle until a drag begins; every move recomputes the bound value from
/// scratch against the current layout, so nothing is buffered between
/// events.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct DragState {
    session: Option<DragSession>,
    thumb_override: Option<ThumbOverride>,
    tooltip_visible: bool,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    pub fn last_raw_offset(&self) -> Option<f32> {
        self.session.map(|s| s.last_raw_offset)
    }

    /// Position of the thumb for the given bound value.
    pub fn position(&self, value: f64, lower: f64, upper: f64) -> f64 {
        match self.thumb_override {
            Some(o) if o.written == value => o.position,
            _ => value_to_normalized(value, lower, upper),
        }
    }

    /// Drops the raw-position override so the thumb follows the bound value.
    pub fn release_thumb(&mut self) {
        self.thumb_override = None;
    }
}

pub(super) fn handle_drag_event<U>(
    state: &mut DragState,
    event: DragEvent,
    args: &SliderArgs<U>,
    layout: &SliderLayout,
    value: &Binding<f64>,
) -> bool {
    match event {
        DragEvent::Started { x } => {
            if state.is_dragging() {
                trace!(x, "drag start while dragging, treating as move");
            } else {
                debug!(x, "slider drag started");
            }
            update_value_on_drag(state, x, args, layout, value);
            true
        }
        DragEvent::Moved { x } => {
            if !state.is_dragging() {
                trace!(x, "ignoring drag move while idle");
                return false;
            }
            update_value_on_drag(state, x, args, layout, value);
            true
        }
        DragEvent::Ended => {
            if !state.is_dragging() {
                trace!("ignoring drag end while idle");
                return false;
            }
            finish_drag(state, args, value);
            true
        }
    }
}

fn update_value_on_drag<U>(
    state: &mut DragState,
    x: f32,
    args: &SliderArgs<U>,
    layout: &SliderLayout,
    value: &Binding<f64>,
) {
    let (lower, upper) = args.bounds();
    let offset = layout.clamp_pointer(x);
    if layout.is_degenerate() {
        debug!(
            available_width = layout.available_width,
            "slider track has no usable width, pinning to lower bound"
        );
    }
    let mapped = map_offset(offset, layout.available_width, lower, upper, args.step);

    value.set(mapped.stepped);
    state.session = Some(DragSession {
        last_raw_offset: offset,
    });
    state.thumb_override = Some(ThumbOverride {
        position: value_to_normalized(mapped.raw, lower, upper),
        written: mapped.stepped,
    });
    state.tooltip_visible = true;
    trace!(x, raw = mapped.raw, value = mapped.stepped, "slider drag update");

    args.on_changed.call();
}

fn finish_drag<U>(state: &mut DragState, args: &SliderArgs<U>, value: &Binding<f64>) {
    if args.magnetized {
        state.release_thumb();
    }
    let offset = state.last_raw_offset();
    state.session = None;
    state.tooltip_visible = false;
    debug!(
        value = value.get(),
        ?offset,
        magnetized = args.magnetized,
        "slider drag ended"
    );

    args.on_ended.call();
}
