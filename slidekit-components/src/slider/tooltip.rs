use slidekit_ui::{Offset, Size};

use super::SliderLayout;

/// Anchor offset for the tooltip floating above the thumb.
///
/// `tooltip` is the last size the host reported for the tooltip content.
/// Until the first report it is [`Size::ZERO`] and the tooltip sits flush
/// with the thumb; the next pass after the report corrects it.
pub fn tooltip_offset(layout: &SliderLayout, position: f64, tooltip: Size) -> Offset {
    Offset::new(
        layout.thumb_leading_x(position) + tooltip.width / 2.0,
        -layout.component_height / 2.0 - tooltip.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_tooltip_sits_on_thumb() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        assert_eq!(
            tooltip_offset(&layout, 0.25, Size::ZERO),
            Offset::new(50.0, -20.0)
        );
    }

    #[test]
    fn measured_tooltip_is_shifted_by_half_its_size() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        assert_eq!(
            tooltip_offset(&layout, 0.25, Size::new(30.0, 16.0)),
            Offset::new(65.0, -28.0)
        );
    }

    #[test]
    fn follows_position() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        let size = Size::new(30.0, 16.0);
        let start = tooltip_offset(&layout, 0.0, size);
        let end = tooltip_offset(&layout, 1.0, size);
        assert_eq!(end.x - start.x, 200.0);
        assert_eq!(start.y, end.y);
    }
}
