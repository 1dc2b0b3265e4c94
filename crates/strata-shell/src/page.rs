//! The page model the toolbar presents.
//!
//! A [`Page`] is the abstract screen the shell currently shows: a title, a
//! mutation-notifying collection of toolbar items, an optional search
//! handler, and a back-reference to the navigation stack it sits on. Pages
//! carry identity (see [`Object`]) so the presenter can cheaply recognize
//! "same page" and skip rewiring.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use strata_shell_core::{Object, ObjectBase, ObjectId, Property, Signal};

use crate::item::ToolbarItemCollection;
use crate::search::SearchHandler;

/// Keys identifying which page property changed.
///
/// Observers filter on these; the presenter reacts to [`Title`](Self::Title)
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageProperty {
    /// The page title changed.
    Title,
    /// The page's busy flag changed.
    Busy,
}

/// The navigation stack a page belongs to.
///
/// Popping is fire-and-forget from the caller's point of view; whether the
/// pop succeeds is the stack's concern.
pub trait Navigator: Send + Sync {
    /// Pop the current page off the stack.
    fn pop_current_page(&self);
}

/// An abstract page whose chrome the presenter mirrors.
///
/// # Signals
///
/// - [`property_changed`](Self::property_changed): emitted with the key of
///   the property that changed, only on actual changes.
/// - `toolbar_items.changed`: emitted on every collection mutation.
pub struct Page {
    base: ObjectBase,
    title: Property<String>,
    busy: Property<bool>,
    search_handler: RwLock<Option<Arc<SearchHandler>>>,
    navigator: RwLock<Option<Weak<dyn Navigator>>>,

    /// The page's toolbar commands, in display order.
    pub toolbar_items: ToolbarItemCollection,

    /// Signal emitted when a scalar page property changes.
    pub property_changed: Signal<PageProperty>,
}

impl Page {
    /// Create a page with the given title and no toolbar items.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new::<Self>(),
            title: Property::new(title.into()),
            busy: Property::new(false),
            search_handler: RwLock::new(None),
            navigator: RwLock::new(None),
            toolbar_items: ToolbarItemCollection::new(),
            property_changed: Signal::new(),
        }
    }

    /// Builder pattern for declaring a search handler.
    pub fn with_search_handler(self, handler: Arc<SearchHandler>) -> Self {
        *self.search_handler.write() = Some(handler);
        self
    }

    /// The page title.
    pub fn title(&self) -> String {
        self.title.get()
    }

    /// Set the page title, notifying observers on actual change.
    pub fn set_title(&self, title: impl Into<String>) {
        if self.title.set(title.into()) {
            self.property_changed.emit(PageProperty::Title);
        }
    }

    /// Whether the page reports background activity.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Set the busy flag, notifying observers on actual change.
    pub fn set_busy(&self, busy: bool) {
        if self.busy.set(busy) {
            self.property_changed.emit(PageProperty::Busy);
        }
    }

    /// The page's search handler, if it declares one.
    pub fn search_handler(&self) -> Option<Arc<SearchHandler>> {
        self.search_handler.read().clone()
    }

    /// Install or remove the page's search handler.
    ///
    /// Takes effect on the next menu rebuild.
    pub fn set_search_handler(&self, handler: Option<Arc<SearchHandler>>) {
        *self.search_handler.write() = handler;
    }

    /// Attach the navigation stack this page sits on.
    ///
    /// The page holds the navigator weakly; it never owns the stack.
    pub fn attach_navigator(&self, navigator: &Arc<dyn Navigator>) {
        *self.navigator.write() = Some(Arc::downgrade(navigator));
    }

    /// Pop this page off its navigation stack, if one is attached.
    ///
    /// Fire-and-forget: a missing or already dropped navigator is logged and
    /// ignored.
    pub fn pop(&self) {
        let navigator = self.navigator.read().as_ref().and_then(Weak::upgrade);
        match navigator {
            Some(navigator) => navigator.pop_current_page(),
            None => {
                tracing::trace!(
                    target: "strata_shell::page",
                    page = self.object_id().as_raw(),
                    "pop requested with no navigator attached"
                );
            }
        }
    }
}

impl Object for Page {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_title_emits_only_on_change() {
        let page = Page::new("Inbox");
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = events.clone();
        page.property_changed.connect(move |&prop| {
            events_clone.lock().push(prop);
        });

        page.set_title("Inbox");
        assert!(events.lock().is_empty());

        page.set_title("Archive");
        assert_eq!(*events.lock(), vec![PageProperty::Title]);
    }

    #[test]
    fn busy_flag_uses_its_own_key() {
        let page = Page::new("Inbox");
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = events.clone();
        page.property_changed.connect(move |&prop| {
            events_clone.lock().push(prop);
        });

        page.set_busy(true);
        page.set_busy(true);
        assert_eq!(*events.lock(), vec![PageProperty::Busy]);
    }

    #[test]
    fn pages_have_distinct_identity() {
        let a = Page::new("A");
        let b = Page::new("B");
        assert_ne!(a.object_id(), b.object_id());
    }

    #[test]
    fn pop_delegates_to_navigator() {
        struct CountingNavigator {
            pops: AtomicUsize,
        }

        impl Navigator for CountingNavigator {
            fn pop_current_page(&self) {
                self.pops.fetch_add(1, Ordering::SeqCst);
            }
        }

        let page = Page::new("Detail");
        page.pop(); // no navigator yet, ignored

        let counting = Arc::new(CountingNavigator { pops: AtomicUsize::new(0) });
        let navigator: Arc<dyn Navigator> = counting.clone();
        page.attach_navigator(&navigator);

        page.pop();
        assert_eq!(counting.pops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pop_survives_dropped_navigator() {
        struct NoopNavigator;
        impl Navigator for NoopNavigator {
            fn pop_current_page(&self) {}
        }

        let page = Page::new("Detail");
        {
            let navigator: Arc<dyn Navigator> = Arc::new(NoopNavigator);
            page.attach_navigator(&navigator);
        }
        page.pop(); // navigator gone; must not panic
    }
}
