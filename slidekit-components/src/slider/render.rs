use slidekit_ui::{Offset, RenderSlot, Size};

use super::{SliderArgs, SliderLayout};

/// One frame of slider output: every rendered unit together with where the
/// host should put it.
///
/// Units are produced by the render slots in [`SliderArgs`]; the slider never
/// looks inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderScene<U> {
    /// Size of the whole control, as last reported by the host.
    pub size: Size,
    /// Normalized thumb position used for this frame.
    pub position: f64,
    /// Track background, laid out over the whole control.
    pub background: U,
    /// Filled part of the track, leading-aligned.
    pub fill: Option<FillPart<U>>,
    /// Thumb, centered on `thumb.center`.
    pub thumb: ThumbPart<U>,
    /// Tooltip, present only while a drag is in progress.
    pub tooltip: Option<TooltipPart<U>>,
}

/// Track fill unit and its width.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPart<U> {
    /// The rendered unit.
    pub unit: U,
    /// Width of the fill, measured from the leading edge of the track.
    pub width: f32,
}

/// Thumb unit and its center point.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbPart<U> {
    /// The rendered unit.
    pub unit: U,
    /// Center of the thumb in the control's local space.
    pub center: Offset,
}

/// Tooltip unit and its anchor offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPart<U> {
    /// The rendered unit.
    pub unit: U,
    /// Offset from the control's leading edge, see [`super::tooltip_offset`].
    pub offset: Offset,
}

fn render_optional<U>(slot: Option<&RenderSlot<U>>) -> Option<U> {
    slot.map(RenderSlot::render)
}

pub(super) fn render_fill<U>(
    args: &SliderArgs<U>,
    layout: &SliderLayout,
    position: f64,
) -> Option<FillPart<U>> {
    render_optional(args.track_fill.as_ref()).map(|unit| FillPart {
        unit,
        width: layout.fill_width(position),
    })
}

pub(super) fn render_thumb<U>(
    args: &SliderArgs<U>,
    layout: &SliderLayout,
    position: f64,
) -> ThumbPart<U> {
    ThumbPart {
        unit: args.thumb.render(),
        center: layout.thumb_position(position),
    }
}

pub(super) fn render_tooltip<U>(args: &SliderArgs<U>, offset: Offset) -> Option<TooltipPart<U>> {
    render_optional(args.tooltip.as_ref()).map(|unit| TooltipPart { unit, offset })
}
