//! Embedded search affordance.
//!
//! A page that wants a search box in its toolbar declares a [`SearchHandler`]
//! (placeholder text plus confirm semantics). During a menu rebuild,
//! [`SearchIntegration`] asks the chrome provider for a [`SearchView`] bound
//! to that handler, embeds it as the trailing menu entry's action view, and
//! wires the view's confirm event to collapse the toolbar's expanded action
//! view. Each rebuild replaces the previous sub-view wholesale; the confirm
//! connection of the old view is detached explicitly rather than left to die
//! with it.

use std::sync::Arc;

use strata_shell_core::{ConnectionId, Property, Signal};

use crate::chrome::{ChromeProvider, MenuEntry, ShowAsAction, ToolbarSurface};

/// Search semantics a page declares; at most one per page.
///
/// The handler carries the placeholder the toolbar shows in the collapsed
/// entry and re-emits confirmed queries to application code.
pub struct SearchHandler {
    placeholder: Property<String>,

    /// Signal emitted with the query text when the user confirms a search.
    pub query_confirmed: Signal<String>,
}

impl SearchHandler {
    /// Create a handler with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Property::new(placeholder.into()),
            query_confirmed: Signal::new(),
        }
    }

    /// The placeholder text shown for the collapsed search entry.
    pub fn placeholder(&self) -> String {
        self.placeholder.get()
    }

    /// Update the placeholder text.
    ///
    /// Takes effect on the next menu rebuild; the collapsed entry's label is
    /// not patched in place.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        self.placeholder.set(placeholder.into());
    }

    /// Report a confirmed query, emitting
    /// [`query_confirmed`](Self::query_confirmed).
    pub fn confirm(&self, query: impl Into<String>) {
        self.query_confirmed.emit(query.into());
    }
}

/// The embedded search sub-view, implemented by the host toolkit.
pub trait SearchView: Send + Sync {
    /// Materialize the native view. Called once, before embedding.
    fn load(&self);

    /// Size the view to fill all available width and height within its entry.
    fn fill_parent(&self);

    /// Confirm event, emitted with the query text when the user commits.
    fn confirmed(&self) -> &Signal<String>;
}

/// Ownership of the currently embedded search sub-view.
///
/// Holds the view handle together with the confirm connection so replacement
/// can detach the listener before the view is discarded.
pub(crate) struct SearchBinding {
    view: Arc<dyn SearchView>,
    confirm_conn: ConnectionId,
}

impl SearchBinding {
    /// Disconnect the confirm listener from the owned view.
    pub(crate) fn detach(&self) {
        self.view.confirmed().disconnect(self.confirm_conn);
    }
}

/// Builds and wires search menu entries.
pub(crate) struct SearchIntegration {
    toolbar: Arc<dyn ToolbarSurface>,
    chrome: Arc<dyn ChromeProvider>,
}

impl SearchIntegration {
    pub(crate) fn new(toolbar: Arc<dyn ToolbarSurface>, chrome: Arc<dyn ChromeProvider>) -> Self {
        Self { toolbar, chrome }
    }

    /// Construct the search entry and its wired sub-view for `handler`.
    ///
    /// The returned entry carries the handler's placeholder as its label, the
    /// fixed search glyph, and the loaded, parent-filling sub-view as its
    /// action view. Confirming a search collapses the toolbar's expanded
    /// action view; that is the only coupling between the two.
    pub(crate) fn attach(&self, handler: Arc<SearchHandler>) -> (MenuEntry, SearchBinding) {
        let view = self.chrome.create_search_view(handler.clone());
        view.load();
        view.fill_parent();

        let toolbar = self.toolbar.clone();
        let confirm_conn = view.confirmed().connect(move |query| {
            tracing::trace!(
                target: "strata_shell::search",
                query = query.as_str(),
                "search confirmed, collapsing action view"
            );
            toolbar.collapse_action_view();
        });

        let entry = MenuEntry {
            text: handler.placeholder(),
            icon: Some(self.chrome.search_glyph()),
            enabled: true,
            show_as: ShowAsAction::IfRoomCollapsible,
            on_activate: None,
            action_view: Some(view.clone()),
        };

        (entry, SearchBinding { view, confirm_conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn handler_reemits_confirmed_queries() {
        let handler = SearchHandler::new("Search notes");
        let queries = Arc::new(Mutex::new(Vec::new()));

        let queries_clone = queries.clone();
        handler.query_confirmed.connect(move |q| {
            queries_clone.lock().push(q.clone());
        });

        handler.confirm("fruit");
        handler.confirm("fish");

        assert_eq!(*queries.lock(), vec!["fruit".to_string(), "fish".to_string()]);
    }

    #[test]
    fn placeholder_updates() {
        let handler = SearchHandler::new("Search");
        assert_eq!(handler.placeholder(), "Search");
        handler.set_placeholder("Find");
        assert_eq!(handler.placeholder(), "Find");
    }
}
