//! Two-way value bindings.
//!
//! A [`Binding`] is a cheap, cloneable handle to a value owned by the caller.
//! Controls read the value through the handle and write updates back through
//! it, so the caller and the control always observe the same value and there
//! is no second copy that could drift.
//!
//! ```
//! use slidekit_ui::Binding;
//!
//! let volume = Binding::new(0.25_f64);
//! let handle = volume.clone();
//! handle.set(0.75);
//! assert_eq!(volume.get(), 0.75);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

/// Shared handle to an externally owned value.
///
/// Clones point at the same storage. Equality is identity: two bindings are
/// equal when they refer to the same value, not when their values match.
pub struct Binding<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Binding<T> {
    /// Creates a binding that owns `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a copy of the value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Returns `true` if both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Binding<T> {}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_tuple("Binding").field(value).finish())
    }
}
