//! Size-measurement feedback from the host renderer.
//!
//! Some placements depend on the size of content that is only known after
//! the host has laid it out. [`MeasuredSize`] models that as a two-phase
//! protocol:
//!
//! 1. The control positions the content using the best size it has, which is
//!    [`Size::ZERO`] before the first report.
//! 2. The host reports the real size once it has measured the content, and
//!    the control recomputes the placement on the next pass.
//!
//! A clone of the handle is given to the renderer; the control keeps the
//! other. Reports are cheap and may arrive every frame; only actual changes
//! bump the [`generation`](MeasuredSize::generation).

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;
use tracing::trace;

use crate::{geometry::Size, prop::CallbackWith};

#[derive(Default)]
struct MeasuredInner {
    size: RwLock<Size>,
    generation: AtomicU64,
}

/// Shared cell holding the last size reported for a piece of content.
#[derive(Clone, Default)]
pub struct MeasuredSize {
    inner: Arc<MeasuredInner>,
}

impl MeasuredSize {
    /// Creates an empty measurement cell reporting [`Size::ZERO`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a size reported by the host.
    ///
    /// Returns `true` if the size differs from the previous report.
    pub fn report(&self, size: Size) -> bool {
        let mut current = self.inner.size.write();
        if *current == size {
            return false;
        }
        trace!(?size, previous = ?*current, "measured size changed");
        *current = size;
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// The last reported size, or [`Size::ZERO`] if none arrived yet.
    pub fn get(&self) -> Size {
        *self.inner.size.read()
    }

    /// Number of distinct sizes reported so far.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    /// Wraps the cell in a callback suitable for a host's "on measured" hook.
    pub fn as_callback(&self) -> CallbackWith<Size> {
        let cell = self.clone();
        CallbackWith::new(move |size| {
            cell.report(size);
        })
    }
}

impl PartialEq for MeasuredSize {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for MeasuredSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasuredSize")
            .field("size", &self.get())
            .field("generation", &self.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let measured = MeasuredSize::new();
        assert_eq!(measured.get(), Size::ZERO);
        assert_eq!(measured.generation(), 0);
    }

    #[test]
    fn only_changes_bump_generation() {
        let measured = MeasuredSize::new();
        assert!(measured.report(Size::new(40.0, 20.0)));
        assert!(!measured.report(Size::new(40.0, 20.0)));
        assert!(measured.report(Size::new(48.0, 20.0)));
        assert_eq!(measured.generation(), 2);
        assert_eq!(measured.get(), Size::new(48.0, 20.0));
    }

    #[test]
    fn reporting_zero_after_a_size_is_a_change() {
        let measured = MeasuredSize::new();
        assert!(!measured.report(Size::ZERO));
        assert_eq!(measured.generation(), 0);
        assert!(measured.report(Size::new(30.0, 16.0)));
        assert!(measured.report(Size::ZERO));
        assert_eq!(measured.generation(), 2);
        assert_eq!(measured.get(), Size::ZERO);
    }

    #[test]
    fn callback_reports_into_shared_cell() {
        let measured = MeasuredSize::new();
        let on_measured = measured.as_callback();
        on_measured.call(Size::new(12.0, 8.0));
        assert_eq!(measured.get(), Size::new(12.0, 8.0));
    }
}
