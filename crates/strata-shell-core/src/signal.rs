//! Signal/slot system for Strata Shell.
//!
//! Signals are the notification backbone of the shell: a page emits a signal
//! when its title changes, a toolbar item collection emits one when it
//! mutates, and presenters connect slots to react. Dispatch is *direct*:
//! every connected slot runs synchronously on the emitting thread and has
//! completed by the time [`Signal::emit`] returns. There is no queueing and
//! no event loop involvement, which matches the single-threaded, event-driven
//! model of the shell chrome.
//!
//! # Example
//!
//! ```
//! use strata_shell_core::Signal;
//!
//! let title_changed = Signal::<String>::new();
//!
//! let conn_id = title_changed.connect(|title| {
//!     println!("title is now {title}");
//! });
//!
//! title_changed.emit("Inbox".to_string());
//! title_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`] and used to remove exactly that
    /// connection via [`Signal::disconnect`]. The ID stays valid until the
    /// connection is disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// A slot stored for a single connection.
type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal with synchronously invoked slots.
///
/// # Type Parameter
///
/// - `Args`: the argument type passed by reference to connected slots. Use
///   `()` for signals without a payload.
///
/// # Reentrancy
///
/// `emit` snapshots the connected slots before invoking any of them, and the
/// internal lock is released during invocation. A slot may therefore connect
/// or disconnect slots on any signal, including the one currently emitting.
/// Connections added during an emission are not invoked for that emission;
/// connections removed during an emission may still see it.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock signal emission.
    ///
    /// While blocked, calls to `emit` do nothing. Useful during batch updates
    /// to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots synchronously.
    ///
    /// Slots run in connection-storage order on the calling thread. All of
    /// them have returned by the time this method returns. If the signal is
    /// blocked, nothing happens.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot slots so the lock is not held across user code.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slot_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn disconnect_stops_delivery() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn blocked_signal_drops_emissions() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn multiple_connections_all_invoked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn disconnect_all_clears_connections() {
        let signal = Signal::<()>::new();
        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn slot_may_disconnect_during_emit() {
        // A slot disconnecting connections mid-emission must not deadlock.
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            signal_clone.disconnect_all();
        });

        signal.emit(());
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn emission_is_synchronous() {
        let signal = Signal::<String>::new();
        let seen = Arc::new(Mutex::new(None));

        let seen_clone = seen.clone();
        signal.connect(move |s| {
            *seen_clone.lock() = Some(s.clone());
        });

        signal.emit("hello".to_string());
        assert_eq!(seen.lock().as_deref(), Some("hello"));
    }
}
