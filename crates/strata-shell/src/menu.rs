//! Native menu rebuilding.
//!
//! The menu is never patched in place. Any change to the page's toolbar item
//! collection discards the whole native menu and repopulates it from the
//! current collection: item count is small, and full invalidation is far
//! easier to reason about than diffing. The optional search entry is always
//! appended last.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::chrome::{ActivateFn, ChromeProvider, MenuEntry, ShowAsAction, ToolbarSurface};
use crate::page::Page;
use crate::search::{SearchBinding, SearchIntegration};

/// Rebuilds the toolbar menu from a page's item collection.
pub(crate) struct MenuBuilder {
    toolbar: Arc<dyn ToolbarSurface>,
    chrome: Arc<dyn ChromeProvider>,
    search: SearchIntegration,
    binding: Mutex<Option<SearchBinding>>,
}

impl MenuBuilder {
    pub(crate) fn new(toolbar: Arc<dyn ToolbarSurface>, chrome: Arc<dyn ChromeProvider>) -> Self {
        let search = SearchIntegration::new(toolbar.clone(), chrome.clone());
        Self {
            toolbar,
            chrome,
            search,
            binding: Mutex::new(None),
        }
    }

    /// Discard the current menu and repopulate it from `page`.
    ///
    /// Items appear in collection order, each shown inline
    /// ([`ShowAsAction::Always`]). Icon resolution is best-effort: a missing
    /// resource is logged at debug level and the entry is added without an
    /// icon. If the page declares a search handler, one collapsible search
    /// entry is appended after all items and the previous rebuild's search
    /// sub-view is detached before being replaced.
    pub(crate) fn rebuild(&self, page: &Page) {
        self.toolbar.clear_menu();
        self.detach_search();

        let items = page.toolbar_items.snapshot();
        tracing::trace!(
            target: "strata_shell::menu",
            item_count = items.len(),
            "rebuilding toolbar menu"
        );

        for item in items {
            let icon = item.icon().and_then(|source| {
                let resolved = self.chrome.resolve_icon(&source);
                if resolved.is_none() {
                    tracing::debug!(
                        target: "strata_shell::menu",
                        icon = source.name(),
                        "icon resolution failed, entry rendered without icon"
                    );
                }
                resolved
            });

            let on_activate: ActivateFn = {
                let item = item.clone();
                Arc::new(move || item.activate())
            };

            self.toolbar.add_menu_entry(MenuEntry {
                text: item.text().to_string(),
                icon,
                enabled: item.is_enabled(),
                show_as: ShowAsAction::Always,
                on_activate: Some(on_activate),
                action_view: None,
            });
        }

        if let Some(handler) = page.search_handler() {
            let (entry, binding) = self.search.attach(handler);
            self.toolbar.add_menu_entry(entry);
            *self.binding.lock() = Some(binding);
        }
    }

    /// Detach and drop the current search binding, if any.
    pub(crate) fn detach_search(&self) {
        if let Some(old) = self.binding.lock().take() {
            old.detach();
        }
    }
}
