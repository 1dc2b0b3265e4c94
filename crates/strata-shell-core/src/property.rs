//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value and reports whether a `set` actually
//! changed it. Types that own properties pair each one with a
//! [`Signal`](crate::Signal) and emit only when `set` returns `true`, which
//! keeps redundant notifications (and the re-renders they would trigger) from
//! ever being produced.
//!
//! ```
//! use strata_shell_core::{Property, Signal};
//!
//! struct Header {
//!     title: Property<String>,
//!     title_changed: Signal<String>,
//! }
//!
//! impl Header {
//!     fn set_title(&self, title: String) {
//!         if self.title.set(title.clone()) {
//!             self.title_changed.emit(title);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with interior mutability and change detection.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, prefer [`with`](Self::with).
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    ///
    /// Useful during initialization, where no observer exists yet.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if it actually changed.
    ///
    /// Equal values leave the property untouched and return `false`; the
    /// caller should emit its paired notification signal only on `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("value", &self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_detects_change() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);

        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }

    #[test]
    fn replace_returns_old_value() {
        let prop = Property::new("a".to_string());
        assert_eq!(prop.replace("b".to_string()), Some("a".to_string()));
        assert_eq!(prop.replace("b".to_string()), None);
        assert_eq!(prop.get(), "b");
    }

    #[test]
    fn with_avoids_clone() {
        let prop = Property::new(vec![1, 2, 3]);
        let len = prop.with(|v| v.len());
        assert_eq!(len, 3);
    }

    #[test]
    fn set_silent_bypasses_detection() {
        let prop = Property::new(1);
        prop.set_silent(2);
        assert_eq!(prop.get(), 2);
    }
}
