//! Core systems for Strata Shell.
//!
//! This crate provides the reactive primitives that the shell chrome layer is
//! built on:
//!
//! - **Signal/Slot System**: type-safe change notification with synchronous
//!   dispatch
//! - **Property System**: value cells with change detection
//! - **Object Identity**: stable per-object IDs for same-instance checks
//!
//! # Signal/Slot Example
//!
//! ```
//! use strata_shell_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("value changed to {value}");
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use strata_shell_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let next = self.value.get() + 1;
//!         if self.value.set(next) {
//!             self.value_changed.emit(next);
//!         }
//!     }
//! }
//! ```

pub mod logging;
mod object;
mod property;
mod signal;

pub use object::{Object, ObjectBase, ObjectId};
pub use property::Property;
pub use signal::{ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);
static_assertions::assert_impl_all!(Property<i32>: Send, Sync);
