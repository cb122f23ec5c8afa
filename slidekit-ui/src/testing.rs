//! Helpers for testing controls built on slidekit-ui.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::prop::Callback;

/// Counts how many times the callbacks it hands out were invoked.
#[derive(Clone, Default)]
pub struct CallCounter {
    hits: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a callback that increments this counter.
    pub fn callback(&self) -> Callback {
        let hits = self.hits.clone();
        Callback::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for CallCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CallCounter").field(&self.count()).finish()
    }
}
