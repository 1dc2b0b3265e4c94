//! Native chrome seams.
//!
//! The presenter never touches a real widget. Everything platform-specific is
//! reached through the narrow capabilities in this module: the toolbar
//! surface, the drawer container, and a chrome provider that hands out themed
//! icons and search sub-views. Hosts implement these traits over their native
//! toolkit; tests implement them with recording fakes.

use std::fmt;
use std::sync::Arc;

use crate::icon::{Icon, IconSource};
use crate::search::{SearchHandler, SearchView};

/// A shared activation callback.
pub type ActivateFn = Arc<dyn Fn() + Send + Sync>;

/// How a menu entry behaves when toolbar space runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowAsAction {
    /// Always shown inline, never moved to an overflow menu.
    #[default]
    Always,
    /// Shown inline if there is room; may collapse to its icon, expanding an
    /// embedded action view on demand.
    IfRoomCollapsible,
}

/// A fully described menu entry, handed to the native toolbar on rebuild.
///
/// Entries are values: the presenter constructs each one completely and the
/// toolbar consumes it. There is no incremental patching of installed
/// entries; a rebuild clears the menu and adds fresh entries.
pub struct MenuEntry {
    /// Label text.
    pub text: String,
    /// Resolved icon, if resolution succeeded.
    pub icon: Option<Icon>,
    /// Whether the entry can be activated.
    pub enabled: bool,
    /// Overflow behavior.
    pub show_as: ShowAsAction,
    /// Invoked when the entry is clicked.
    pub on_activate: Option<ActivateFn>,
    /// Embedded expandable view (the search sub-view), if any.
    pub action_view: Option<Arc<dyn SearchView>>,
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("enabled", &self.enabled)
            .field("show_as", &self.show_as)
            .field("has_on_activate", &self.on_activate.is_some())
            .field("has_action_view", &self.action_view.is_some())
            .finish()
    }
}

/// The native toolbar widget, as consumed by the presenter.
pub trait ToolbarSurface: Send + Sync {
    /// Display `title` as the toolbar's title text.
    fn set_title(&self, title: &str);

    /// Install (or clear, with `None`) the explicit leading navigation icon.
    fn set_navigation_icon(&self, icon: Option<Icon>);

    /// Register the click handler for the leading navigation icon.
    ///
    /// Installed once, when the drawer toggle is created.
    fn set_navigation_click_handler(&self, handler: ActivateFn);

    /// Remove every entry from the toolbar menu.
    fn clear_menu(&self);

    /// Append a fully described entry to the toolbar menu.
    fn add_menu_entry(&self, entry: MenuEntry);

    /// Collapse the currently expanded action view, if any, returning its
    /// entry to the icon-only state.
    fn collapse_action_view(&self);
}

/// Observer of drawer open/close transitions.
pub trait DrawerListener: Send + Sync {
    /// Called whenever the drawer finishes opening or closing.
    fn on_drawer_state_changed(&self, open: bool);
}

/// The drawer container widget, as consumed by the presenter.
pub trait DrawerLayout: Send + Sync {
    /// Register a listener for drawer open/close transitions.
    fn add_drawer_listener(&self, listener: Arc<dyn DrawerListener>);

    /// Whether the drawer is currently open.
    fn is_open(&self) -> bool;
}

/// Themed resources and sub-view construction, injected at presenter
/// construction instead of reached through any ambient context.
pub trait ChromeProvider: Send + Sync {
    /// Resolve an icon reference to a themed drawable.
    ///
    /// Returns `None` when the resource is missing or unreadable; callers
    /// treat that as "render without an icon".
    fn resolve_icon(&self, source: &IconSource) -> Option<Icon>;

    /// The themed back-arrow navigation icon.
    fn back_arrow(&self) -> Icon;

    /// The fixed search glyph used for search menu entries.
    fn search_glyph(&self) -> Icon;

    /// Construct a search sub-view bound to `handler`.
    fn create_search_view(&self, handler: Arc<SearchHandler>) -> Arc<dyn SearchView>;
}
