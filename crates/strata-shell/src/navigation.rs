//! Leading navigation icon control.
//!
//! The toolbar's leading icon is either the drawer indicator (hamburger,
//! animated by the native toolkit) or an explicit back arrow. A single
//! [`DrawerToggle`] mediates between the two: it is created lazily on the
//! first sync, registered once as the drawer listener and navigation click
//! target, and from then on mutated in place. The controller itself is a
//! two-state machine, [`NavigationMode::Drawer`] initially and
//! [`NavigationMode::Back`] while back navigation is possible.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::chrome::{ActivateFn, ChromeProvider, DrawerLayout, DrawerListener, ToolbarSurface};

/// Which leading icon the toolbar currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Drawer indicator; tapping it opens the drawer.
    #[default]
    Drawer,
    /// Back arrow; tapping it pops the current page.
    Back,
}

/// The single toggle-control object behind the leading icon.
///
/// Created at most once per controller lifetime. Tracks whether the drawer
/// indicator animation is enabled and mirrors the drawer's open state, both
/// for the native toolkit to consult when drawing.
pub struct DrawerToggle {
    drawer: Arc<dyn DrawerLayout>,
    indicator_enabled: AtomicBool,
    drawer_open: AtomicBool,
}

impl DrawerToggle {
    fn new(drawer: Arc<dyn DrawerLayout>) -> Self {
        Self {
            drawer,
            indicator_enabled: AtomicBool::new(true),
            drawer_open: AtomicBool::new(false),
        }
    }

    /// Whether the drawer indicator animation is enabled.
    pub fn is_indicator_enabled(&self) -> bool {
        self.indicator_enabled.load(Ordering::SeqCst)
    }

    fn set_indicator_enabled(&self, enabled: bool) {
        self.indicator_enabled.store(enabled, Ordering::SeqCst);
    }

    /// The drawer open state as of the last sync or transition.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open.load(Ordering::SeqCst)
    }

    /// Re-read the drawer's open/closed status into the toggle's visual
    /// state.
    pub fn sync_state(&self) {
        let open = self.drawer.is_open();
        self.drawer_open.store(open, Ordering::SeqCst);
        tracing::trace!(target: "strata_shell::navigation", open, "drawer toggle synced");
    }
}

impl DrawerListener for DrawerToggle {
    fn on_drawer_state_changed(&self, open: bool) {
        self.drawer_open.store(open, Ordering::SeqCst);
    }
}

/// Keeps the toolbar's leading icon in step with back-navigability.
pub struct NavigationIconController {
    toolbar: Arc<dyn ToolbarSurface>,
    drawer: Arc<dyn DrawerLayout>,
    chrome: Arc<dyn ChromeProvider>,
    toggle: RwLock<Option<Arc<DrawerToggle>>>,
    mode: RwLock<NavigationMode>,
}

impl NavigationIconController {
    pub(crate) fn new(
        toolbar: Arc<dyn ToolbarSurface>,
        drawer: Arc<dyn DrawerLayout>,
        chrome: Arc<dyn ChromeProvider>,
    ) -> Self {
        Self {
            toolbar,
            drawer,
            chrome,
            toggle: RwLock::new(None),
            mode: RwLock::new(NavigationMode::default()),
        }
    }

    /// The current state of the two-state icon machine.
    pub fn mode(&self) -> NavigationMode {
        *self.mode.read()
    }

    /// The toggle object, once it has been created.
    pub fn toggle(&self) -> Option<Arc<DrawerToggle>> {
        self.toggle.read().clone()
    }

    /// Bring the leading icon in line with `can_navigate_back`.
    ///
    /// Creates the toggle on first use, installing `nav_click` as the
    /// toolbar's navigation click handler and registering the toggle with the
    /// drawer. Subsequent calls mutate the existing toggle. Always finishes
    /// by re-syncing the toggle against the drawer's open state, whether or
    /// not the icon changed.
    pub(crate) fn sync(&self, can_navigate_back: bool, nav_click: ActivateFn) {
        let toggle = self.ensure_toggle(nav_click);

        if can_navigate_back {
            toggle.set_indicator_enabled(false);
            self.toolbar.set_navigation_icon(Some(self.chrome.back_arrow()));
            *self.mode.write() = NavigationMode::Back;
        } else {
            self.toolbar.set_navigation_icon(None);
            toggle.set_indicator_enabled(true);
            *self.mode.write() = NavigationMode::Drawer;
        }

        toggle.sync_state();
        tracing::trace!(
            target: "strata_shell::navigation",
            mode = ?self.mode(),
            "navigation icon synced"
        );
    }

    fn ensure_toggle(&self, nav_click: ActivateFn) -> Arc<DrawerToggle> {
        if let Some(toggle) = self.toggle.read().clone() {
            return toggle;
        }

        let mut slot = self.toggle.write();
        if let Some(toggle) = slot.clone() {
            return toggle;
        }

        let toggle = Arc::new(DrawerToggle::new(self.drawer.clone()));
        self.toolbar.set_navigation_click_handler(nav_click);
        self.drawer.add_drawer_listener(toggle.clone());
        *slot = Some(toggle.clone());
        toggle
    }

    /// Release the toggle and reset to the initial state.
    ///
    /// The controller is not re-armed afterwards; this runs as part of
    /// presenter disposal.
    pub(crate) fn dispose(&self) {
        *self.toggle.write() = None;
        *self.mode.write() = NavigationMode::Drawer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Icon, IconSource};
    use crate::search::{SearchHandler, SearchView};
    use parking_lot::Mutex;
    use strata_shell_core::Signal;

    #[derive(Default)]
    struct RecordingToolbar {
        nav_icons: Mutex<Vec<Option<Icon>>>,
        click_handlers: Mutex<Vec<ActivateFn>>,
    }

    impl ToolbarSurface for RecordingToolbar {
        fn set_title(&self, _title: &str) {}
        fn set_navigation_icon(&self, icon: Option<Icon>) {
            self.nav_icons.lock().push(icon);
        }
        fn set_navigation_click_handler(&self, handler: ActivateFn) {
            self.click_handlers.lock().push(handler);
        }
        fn clear_menu(&self) {}
        fn add_menu_entry(&self, _entry: crate::chrome::MenuEntry) {}
        fn collapse_action_view(&self) {}
    }

    #[derive(Default)]
    struct RecordingDrawer {
        listeners: Mutex<Vec<Arc<dyn DrawerListener>>>,
        open: AtomicBool,
    }

    impl DrawerLayout for RecordingDrawer {
        fn add_drawer_listener(&self, listener: Arc<dyn DrawerListener>) {
            self.listeners.lock().push(listener);
        }
        fn is_open(&self) -> bool {
            self.open.load(Ordering::SeqCst)
        }
    }

    struct StubSearchView {
        confirmed: Signal<String>,
    }

    impl SearchView for StubSearchView {
        fn load(&self) {}
        fn fill_parent(&self) {}
        fn confirmed(&self) -> &Signal<String> {
            &self.confirmed
        }
    }

    struct StubChrome;

    impl ChromeProvider for StubChrome {
        fn resolve_icon(&self, source: &IconSource) -> Option<Icon> {
            Some(Icon::new(source.name().to_string()))
        }
        fn back_arrow(&self) -> Icon {
            Icon::new("back-arrow")
        }
        fn search_glyph(&self) -> Icon {
            Icon::new("search")
        }
        fn create_search_view(&self, _handler: Arc<SearchHandler>) -> Arc<dyn SearchView> {
            Arc::new(StubSearchView { confirmed: Signal::new() })
        }
    }

    fn controller() -> (NavigationIconController, Arc<RecordingToolbar>, Arc<RecordingDrawer>) {
        let toolbar = Arc::new(RecordingToolbar::default());
        let drawer = Arc::new(RecordingDrawer::default());
        let controller = NavigationIconController::new(
            toolbar.clone(),
            drawer.clone(),
            Arc::new(StubChrome),
        );
        (controller, toolbar, drawer)
    }

    fn noop_click() -> ActivateFn {
        Arc::new(|| {})
    }

    #[test]
    fn toggle_is_created_once() {
        let (controller, toolbar, drawer) = controller();
        assert!(controller.toggle().is_none());

        controller.sync(false, noop_click());
        let first = controller.toggle().expect("toggle created");

        controller.sync(true, noop_click());
        controller.sync(false, noop_click());
        let second = controller.toggle().expect("toggle still present");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(toolbar.click_handlers.lock().len(), 1);
        assert_eq!(drawer.listeners.lock().len(), 1);
    }

    #[test]
    fn back_mode_installs_arrow_and_disables_indicator() {
        let (controller, toolbar, _drawer) = controller();

        controller.sync(true, noop_click());

        assert_eq!(controller.mode(), NavigationMode::Back);
        let toggle = controller.toggle().unwrap();
        assert!(!toggle.is_indicator_enabled());
        assert_eq!(
            toolbar.nav_icons.lock().last().cloned(),
            Some(Some(Icon::new("back-arrow")))
        );
    }

    #[test]
    fn round_trip_restores_initial_drawer_state() {
        let (controller, toolbar, _drawer) = controller();

        controller.sync(false, noop_click());
        controller.sync(true, noop_click());
        controller.sync(false, noop_click());

        assert_eq!(controller.mode(), NavigationMode::Drawer);
        let toggle = controller.toggle().unwrap();
        assert!(toggle.is_indicator_enabled());
        assert_eq!(toolbar.nav_icons.lock().last().cloned(), Some(None));
    }

    #[test]
    fn sync_rereads_drawer_state() {
        let (controller, _toolbar, drawer) = controller();

        drawer.open.store(true, Ordering::SeqCst);
        controller.sync(false, noop_click());

        assert!(controller.toggle().unwrap().is_drawer_open());
    }

    #[test]
    fn toggle_tracks_drawer_transitions() {
        let (controller, _toolbar, drawer) = controller();
        controller.sync(false, noop_click());

        let listener = drawer.listeners.lock()[0].clone();
        listener.on_drawer_state_changed(true);

        assert!(controller.toggle().unwrap().is_drawer_open());
    }

    #[test]
    fn dispose_releases_toggle() {
        let (controller, _toolbar, _drawer) = controller();
        controller.sync(true, noop_click());

        controller.dispose();

        assert!(controller.toggle().is_none());
        assert_eq!(controller.mode(), NavigationMode::Drawer);
    }
}
