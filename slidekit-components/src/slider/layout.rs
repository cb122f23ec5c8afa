use slidekit_ui::{Offset, Size};

/// Track geometry resolved from a host size report.
///
/// The thumb is a circle whose diameter equals the track height, so the span
/// the thumb center can travel is `width - height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderLayout {
    /// Width of the whole control.
    pub component_width: f32,
    /// Height of the whole control, also the thumb diameter.
    pub component_height: f32,
    /// Usable drag span, `component_width - component_height`. May be zero or
    /// negative before the first real layout pass.
    pub available_width: f32,
}

impl SliderLayout {
    /// Resolves the layout for a reported track size.
    pub fn new(size: Size) -> Self {
        Self {
            component_width: size.width,
            component_height: size.height,
            available_width: size.width - size.height,
        }
    }

    /// Returns `true` when the track has no usable span.
    pub fn is_degenerate(&self) -> bool {
        !(self.available_width > 0.0)
    }

    fn span(&self) -> f32 {
        self.available_width.max(0.0)
    }

    /// Converts a pointer x coordinate in the control's local space into an
    /// offset along the usable span.
    pub fn clamp_pointer(&self, x: f32) -> f32 {
        if x.is_nan() {
            return 0.0;
        }
        (x - self.component_height / 2.0).clamp(0.0, self.span())
    }

    /// Horizontal offset of the thumb's leading edge for `position`. The
    /// thumb's center sits half a track height further along.
    pub fn thumb_leading_x(&self, position: f64) -> f32 {
        self.span() * position.clamp(0.0, 1.0) as f32
    }

    /// Width of the filled part of the track, reaching the thumb's trailing
    /// edge.
    pub fn fill_width(&self, position: f64) -> f32 {
        self.thumb_leading_x(position) + self.component_height
    }

    /// Center point of the thumb.
    pub fn thumb_position(&self, position: f64) -> Offset {
        let half = self.component_height / 2.0;
        Offset::new(self.thumb_leading_x(position) + half, half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_width_excludes_thumb() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        assert_eq!(layout.available_width, 200.0);
        assert!(!layout.is_degenerate());
        assert!(SliderLayout::new(Size::ZERO).is_degenerate());
        assert!(SliderLayout::new(Size::new(20.0, 40.0)).is_degenerate());
    }

    #[test]
    fn pointer_is_clamped_to_span() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        assert_eq!(layout.clamp_pointer(120.0), 100.0);
        assert_eq!(layout.clamp_pointer(-50.0), 0.0);
        assert_eq!(layout.clamp_pointer(10.0), 0.0);
        assert_eq!(layout.clamp_pointer(500.0), 200.0);
        assert_eq!(layout.clamp_pointer(f32::NAN), 0.0);
    }

    #[test]
    fn degenerate_layout_does_not_panic() {
        let layout = SliderLayout::new(Size::new(10.0, 40.0));
        assert_eq!(layout.clamp_pointer(25.0), 0.0);
        assert_eq!(layout.thumb_leading_x(0.8), 0.0);
    }

    #[test]
    fn thumb_and_fill_follow_position() {
        let layout = SliderLayout::new(Size::new(240.0, 40.0));
        assert_eq!(layout.thumb_leading_x(0.5), 100.0);
        assert_eq!(layout.fill_width(0.5), 140.0);
        assert_eq!(layout.thumb_position(0.0), Offset::new(20.0, 20.0));
        assert_eq!(layout.thumb_position(1.0), Offset::new(220.0, 20.0));
    }
}
