//! The toolbar presenter.
//!
//! [`ToolbarPresenter`] keeps one native toolbar mirroring one active page:
//! title, leading navigation icon, and the rebuilt menu. The host drives it
//! through exactly two inputs, [`set_page`](ToolbarPresenter::set_page) and
//! [`set_can_navigate_back`](ToolbarPresenter::set_can_navigate_back);
//! everything else happens in reaction to the active page's change signals.
//!
//! Subscription lifecycle is the load-bearing part: switching pages
//! unsubscribes from the old page *before* subscribing to the new one, so no
//! notification is ever delivered twice during a transition, and disposal
//! tears every connection down exactly once.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use strata_shell_core::{ConnectionId, Object};

use crate::chrome::{ActivateFn, ChromeProvider, DrawerLayout, ToolbarSurface};
use crate::error::{ChromeError, ChromeResult};
use crate::menu::MenuBuilder;
use crate::navigation::NavigationIconController;
use crate::page::{Page, PageProperty};

/// How collection-changed notifications translate into menu rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebuildPolicy {
    /// Every collection-changed event rebuilds the menu immediately.
    /// N rapid mutations cost N rebuilds.
    #[default]
    Immediate,
    /// Collection-changed events only mark the menu dirty;
    /// [`ToolbarPresenter::flush_pending_rebuild`] performs at most one
    /// rebuild for any burst of mutations.
    Deferred,
}

/// Connections held against the active page.
struct PageSubscriptions {
    properties: ConnectionId,
    items: ConnectionId,
}

#[derive(Default)]
struct PresenterState {
    page: Option<Arc<Page>>,
    subscriptions: Option<PageSubscriptions>,
    can_navigate_back: bool,
    menu_dirty: bool,
    disposed: bool,
}

/// Builder for [`ToolbarPresenter`].
///
/// All three collaborators are required; [`build`](Self::build) fails fast
/// with [`ChromeError::MissingCollaborator`] when one is absent.
#[derive(Default)]
pub struct ToolbarPresenterBuilder {
    toolbar: Option<Arc<dyn ToolbarSurface>>,
    drawer: Option<Arc<dyn DrawerLayout>>,
    chrome: Option<Arc<dyn ChromeProvider>>,
    policy: RebuildPolicy,
}

impl ToolbarPresenterBuilder {
    /// The native toolbar to present into.
    pub fn with_toolbar(mut self, toolbar: Arc<dyn ToolbarSurface>) -> Self {
        self.toolbar = Some(toolbar);
        self
    }

    /// The drawer container hosting the toolbar.
    pub fn with_drawer(mut self, drawer: Arc<dyn DrawerLayout>) -> Self {
        self.drawer = Some(drawer);
        self
    }

    /// The themed resource provider.
    pub fn with_chrome(mut self, chrome: Arc<dyn ChromeProvider>) -> Self {
        self.chrome = Some(chrome);
        self
    }

    /// The menu rebuild policy; defaults to [`RebuildPolicy::Immediate`].
    pub fn with_rebuild_policy(mut self, policy: RebuildPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the collaborators and construct the presenter.
    pub fn build(self) -> ChromeResult<Arc<ToolbarPresenter>> {
        let toolbar = self
            .toolbar
            .ok_or(ChromeError::MissingCollaborator("toolbar"))?;
        let drawer = self
            .drawer
            .ok_or(ChromeError::MissingCollaborator("drawer"))?;
        let chrome = self
            .chrome
            .ok_or(ChromeError::MissingCollaborator("chrome"))?;

        // new_cyclic so the presenter can hand weak self-references to the
        // slots it connects; a live connection must never keep it alive.
        Ok(Arc::new_cyclic(|weak| ToolbarPresenter {
            navigation: NavigationIconController::new(toolbar.clone(), drawer, chrome.clone()),
            menu: MenuBuilder::new(toolbar.clone(), chrome),
            toolbar,
            policy: self.policy,
            state: RwLock::new(PresenterState::default()),
            weak_self: weak.clone(),
        }))
    }
}

/// Presents one page's chrome on one native toolbar.
pub struct ToolbarPresenter {
    toolbar: Arc<dyn ToolbarSurface>,
    navigation: NavigationIconController,
    menu: MenuBuilder,
    policy: RebuildPolicy,
    state: RwLock<PresenterState>,
    weak_self: Weak<ToolbarPresenter>,
}

impl std::fmt::Debug for ToolbarPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarPresenter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}


impl ToolbarPresenter {
    /// Start building a presenter.
    pub fn builder() -> ToolbarPresenterBuilder {
        ToolbarPresenterBuilder::default()
    }

    /// The active page, if any.
    pub fn page(&self) -> Option<Arc<Page>> {
        self.state.read().page.clone()
    }

    /// Whether the toolbar currently offers back navigation.
    pub fn can_navigate_back(&self) -> bool {
        self.state.read().can_navigate_back
    }

    /// The navigation icon controller, exposed for state inspection.
    pub fn navigation(&self) -> &NavigationIconController {
        &self.navigation
    }

    /// The configured rebuild policy.
    pub fn rebuild_policy(&self) -> RebuildPolicy {
        self.policy
    }

    /// Whether the presenter has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.read().disposed
    }

    /// Replace the active page.
    ///
    /// Setting the page the presenter already holds is a no-op: no
    /// resubscription, no re-render. Otherwise the old page's connections are
    /// removed first, then the new page (if any) is subscribed and the full
    /// chrome is re-rendered: title, navigation icon, menu. Passing `None`
    /// tears down the wiring without rendering anything.
    pub fn set_page(&self, page: Option<Arc<Page>>) -> ChromeResult<()> {
        let (old_page, old_subs) = {
            let mut state = self.state.write();
            if state.disposed {
                return Err(ChromeError::Disposed);
            }

            let same = match (&state.page, &page) {
                (Some(current), Some(new)) => current.object_id() == new.object_id(),
                (None, None) => true,
                _ => false,
            };
            if same {
                return Ok(());
            }

            let old_subs = state.subscriptions.take();
            let old_page = state.page.take();
            state.page = page.clone();
            state.menu_dirty = false;
            (old_page, old_subs)
        };

        // Unsubscribe the old page before touching the new one so no
        // notification is delivered twice during the transition.
        if let (Some(old), Some(subs)) = (&old_page, old_subs) {
            old.property_changed.disconnect(subs.properties);
            old.toolbar_items.changed.disconnect(subs.items);
        }

        let Some(new_page) = page else {
            tracing::trace!(target: "strata_shell::presenter", "page cleared");
            return Ok(());
        };

        tracing::trace!(
            target: "strata_shell::presenter",
            page = new_page.object_id().as_raw(),
            "page changed"
        );

        let properties = {
            let weak = self.weak_self.clone();
            new_page.property_changed.connect(move |&prop| {
                // Only the title is mirrored; other property keys are ignored.
                if prop != PageProperty::Title {
                    return;
                }
                if let Some(presenter) = weak.upgrade() {
                    presenter.update_title();
                }
            })
        };

        let items = {
            let weak = self.weak_self.clone();
            new_page.toolbar_items.changed.connect(move |_change| {
                if let Some(presenter) = weak.upgrade() {
                    presenter.on_toolbar_items_changed();
                }
            })
        };

        self.state.write().subscriptions = Some(PageSubscriptions { properties, items });

        self.update_title();
        self.update_navigation_icon();
        self.rebuild_menu();
        Ok(())
    }

    /// Update the back-navigable flag.
    ///
    /// Idempotent: setting the current value does nothing. On change, only
    /// the navigation icon is re-synced; title and menu are untouched.
    pub fn set_can_navigate_back(&self, can_navigate_back: bool) -> ChromeResult<()> {
        {
            let mut state = self.state.write();
            if state.disposed {
                return Err(ChromeError::Disposed);
            }
            if state.can_navigate_back == can_navigate_back {
                return Ok(());
            }
            state.can_navigate_back = can_navigate_back;
        }

        self.update_navigation_icon();
        Ok(())
    }

    /// Perform the rebuild a burst of deferred collection changes is waiting
    /// on.
    ///
    /// Returns `true` if a rebuild ran. Under [`RebuildPolicy::Immediate`]
    /// the menu is never dirty and this returns `false`.
    pub fn flush_pending_rebuild(&self) -> ChromeResult<bool> {
        {
            let mut state = self.state.write();
            if state.disposed {
                return Err(ChromeError::Disposed);
            }
            if !state.menu_dirty {
                return Ok(false);
            }
            state.menu_dirty = false;
        }

        self.rebuild_menu();
        Ok(true)
    }

    /// Tear the presenter down: disconnect the page, detach the search
    /// sub-view, release the drawer toggle.
    ///
    /// Idempotent; also runs on drop.
    pub fn dispose(&self) {
        let (old_page, old_subs) = {
            let mut state = self.state.write();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.menu_dirty = false;
            (state.page.take(), state.subscriptions.take())
        };

        if let (Some(page), Some(subs)) = (&old_page, old_subs) {
            page.property_changed.disconnect(subs.properties);
            page.toolbar_items.changed.disconnect(subs.items);
        }

        self.menu.detach_search();
        self.navigation.dispose();
        tracing::trace!(target: "strata_shell::presenter", "presenter disposed");
    }

    fn update_title(&self) {
        let Some(page) = self.state.read().page.clone() else {
            return;
        };
        let title = page.title();
        tracing::trace!(target: "strata_shell::presenter", title = title.as_str(), "title updated");
        self.toolbar.set_title(&title);
    }

    fn update_navigation_icon(&self) {
        let can_navigate_back = {
            let state = self.state.read();
            if state.disposed {
                return;
            }
            state.can_navigate_back
        };

        let nav_click: ActivateFn = {
            let weak = self.weak_self.clone();
            Arc::new(move || {
                if let Some(presenter) = weak.upgrade() {
                    presenter.on_navigate_back();
                }
            })
        };

        self.navigation.sync(can_navigate_back, nav_click);
    }

    fn on_navigate_back(&self) {
        let Some(page) = self.state.read().page.clone() else {
            return;
        };
        tracing::trace!(
            target: "strata_shell::presenter",
            page = page.object_id().as_raw(),
            "navigating back"
        );
        // Fire-and-forget; the navigation stack owns the outcome.
        page.pop();
    }

    fn on_toolbar_items_changed(&self) {
        match self.policy {
            RebuildPolicy::Immediate => self.rebuild_menu(),
            RebuildPolicy::Deferred => {
                self.state.write().menu_dirty = true;
                tracing::trace!(
                    target: "strata_shell::presenter",
                    "collection changed, menu rebuild deferred"
                );
            }
        }
    }

    fn rebuild_menu(&self) {
        let Some(page) = self.state.read().page.clone() else {
            return;
        };
        self.menu.rebuild(&page);
    }
}

impl Drop for ToolbarPresenter {
    fn drop(&mut self) {
        self.dispose();
    }
}

static_assertions::assert_impl_all!(ToolbarPresenter: Send, Sync);
