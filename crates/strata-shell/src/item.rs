//! Toolbar items and their mutation-notifying collection.
//!
//! A [`ToolbarItem`] is a non-visual command a page wants surfaced in the
//! toolbar: label text, an optional icon reference, an enabled flag, and an
//! `activated` signal emitted when the user picks the corresponding menu
//! entry. Items live in a [`ToolbarItemCollection`], an ordered sequence that
//! announces every mutation through its `changed` signal so the presenter can
//! rebuild the native menu.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use strata_shell_core::Signal;

use crate::icon::IconSource;

/// A single toolbar command declared by a page.
///
/// Items are shared via `Arc` and read-only to the presentation layer; the
/// page (or application code) owns them and decides when they are enabled.
///
/// # Signals
///
/// - [`activated`](Self::activated): emitted when the item's menu entry is
///   clicked. Not emitted while the item is disabled.
pub struct ToolbarItem {
    text: String,
    icon: Option<IconSource>,
    enabled: AtomicBool,

    /// Signal emitted when the item is activated.
    pub activated: Signal<()>,
}

impl ToolbarItem {
    /// Create a new enabled item with the given label text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            enabled: AtomicBool::new(true),
            activated: Signal::new(),
        }
    }

    /// Builder pattern for attaching an icon reference.
    pub fn with_icon(mut self, icon: IconSource) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Builder pattern for the initial enabled state.
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.store(enabled, Ordering::SeqCst);
        self
    }

    /// The item's label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The item's icon reference, if any.
    pub fn icon(&self) -> Option<IconSource> {
        self.icon.clone()
    }

    /// Whether the item can currently be activated.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable the item.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Activate the item, emitting [`activated`](Self::activated).
    ///
    /// Does nothing while the item is disabled.
    pub fn activate(&self) {
        if !self.is_enabled() {
            return;
        }
        self.activated.emit(());
    }
}

/// The kind of mutation a [`ToolbarItemCollection`] underwent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionChange {
    /// An item was inserted at `index`.
    Inserted {
        /// Position of the new item.
        index: usize,
    },
    /// The item at `index` was removed.
    Removed {
        /// Position the item was removed from.
        index: usize,
    },
    /// The collection was replaced or cleared wholesale.
    Reset,
}

/// An ordered, mutation-notifying sequence of toolbar items.
///
/// Every mutation emits exactly one [`CollectionChange`] on
/// [`changed`](Self::changed), after the mutation has been applied. Observers
/// that rebuild from [`snapshot`](Self::snapshot) therefore always see the
/// post-mutation state.
pub struct ToolbarItemCollection {
    items: RwLock<Vec<Arc<ToolbarItem>>>,

    /// Signal emitted after every mutation.
    pub changed: Signal<CollectionChange>,
}

impl ToolbarItemCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            changed: Signal::new(),
        }
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Arc<ToolbarItem>> {
        self.items.read().get(index).cloned()
    }

    /// A point-in-time copy of the items, in order.
    pub fn snapshot(&self) -> Vec<Arc<ToolbarItem>> {
        self.items.read().clone()
    }

    /// Append an item to the end of the collection.
    pub fn push(&self, item: Arc<ToolbarItem>) {
        let index = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        self.changed.emit(CollectionChange::Inserted { index });
    }

    /// Insert an item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: Arc<ToolbarItem>) {
        self.items.write().insert(index, item);
        self.changed.emit(CollectionChange::Inserted { index });
    }

    /// Remove and return the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&self, index: usize) -> Arc<ToolbarItem> {
        let item = self.items.write().remove(index);
        self.changed.emit(CollectionChange::Removed { index });
        item
    }

    /// Remove all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.changed.emit(CollectionChange::Reset);
    }

    /// Replace all items at once.
    pub fn set_items(&self, items: Vec<Arc<ToolbarItem>>) {
        *self.items.write() = items;
        self.changed.emit(CollectionChange::Reset);
    }
}

impl Default for ToolbarItemCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn item_activation_respects_enabled_flag() {
        let item = ToolbarItem::new("Save").with_enabled(false);
        let fired = Arc::new(AtomicBool::new(false));

        let fired_clone = fired.clone();
        item.activated.connect(move |_| {
            fired_clone.store(true, Ordering::SeqCst);
        });

        item.activate();
        assert!(!fired.load(Ordering::SeqCst));

        item.set_enabled(true);
        item.activate();
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn mutations_emit_one_change_each() {
        let collection = ToolbarItemCollection::new();
        let changes = Arc::new(Mutex::new(Vec::new()));

        let changes_clone = changes.clone();
        collection.changed.connect(move |&change| {
            changes_clone.lock().push(change);
        });

        collection.push(Arc::new(ToolbarItem::new("A")));
        collection.insert(0, Arc::new(ToolbarItem::new("B")));
        collection.remove(1);
        collection.clear();

        assert_eq!(
            *changes.lock(),
            vec![
                CollectionChange::Inserted { index: 0 },
                CollectionChange::Inserted { index: 0 },
                CollectionChange::Removed { index: 1 },
                CollectionChange::Reset,
            ]
        );
    }

    #[test]
    fn change_is_emitted_after_mutation() {
        let collection = Arc::new(ToolbarItemCollection::new());
        let seen_len = Arc::new(Mutex::new(None));

        let collection_clone = collection.clone();
        let seen_clone = seen_len.clone();
        collection.changed.connect(move |_| {
            *seen_clone.lock() = Some(collection_clone.len());
        });

        collection.push(Arc::new(ToolbarItem::new("A")));
        assert_eq!(*seen_len.lock(), Some(1));
    }

    #[test]
    fn snapshot_preserves_order() {
        let collection = ToolbarItemCollection::new();
        collection.push(Arc::new(ToolbarItem::new("first")));
        collection.push(Arc::new(ToolbarItem::new("second")));

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].text(), "first");
        assert_eq!(snapshot[1].text(), "second");
    }

    #[test]
    fn set_items_resets_wholesale() {
        let collection = ToolbarItemCollection::new();
        collection.push(Arc::new(ToolbarItem::new("old")));

        collection.set_items(vec![
            Arc::new(ToolbarItem::new("a")),
            Arc::new(ToolbarItem::new("b")),
        ]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0).unwrap().text(), "a");
    }
}
