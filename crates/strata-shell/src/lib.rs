//! Toolbar presentation for Strata shells.
//!
//! This crate keeps a native toolbar in step with the shell's active page:
//! the title, the leading navigation icon (drawer indicator or back arrow),
//! a menu rebuilt from the page's toolbar item collection, and an optional
//! embedded search box.
//!
//! The host toolkit plugs in through three trait seams, all defined in
//! [`chrome`]: [`ToolbarSurface`] (the toolbar being driven),
//! [`DrawerLayout`] (the drawer container hosting it), and
//! [`ChromeProvider`] (themed icons and search views). The presenter never
//! touches native handles directly.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use strata_shell::{Page, ToolbarItem, ToolbarPresenter};
//!
//! let presenter = ToolbarPresenter::builder()
//!     .with_toolbar(toolbar)
//!     .with_drawer(drawer)
//!     .with_chrome(chrome)
//!     .build()?;
//!
//! let page = Arc::new(Page::new("Inbox"));
//! page.toolbar_items.push(Arc::new(ToolbarItem::new("Refresh")));
//!
//! presenter.set_page(Some(page))?;
//! presenter.set_can_navigate_back(true)?;
//! ```

pub mod chrome;
mod error;
mod icon;
mod item;
mod menu;
mod navigation;
mod page;
mod presenter;
mod search;

pub use chrome::{
    ActivateFn, ChromeProvider, DrawerLayout, DrawerListener, MenuEntry, ShowAsAction,
    ToolbarSurface,
};
pub use error::{ChromeError, ChromeResult};
pub use icon::{Icon, IconSource};
pub use item::{CollectionChange, ToolbarItem, ToolbarItemCollection};
pub use navigation::{DrawerToggle, NavigationIconController, NavigationMode};
pub use page::{Navigator, Page, PageProperty};
pub use presenter::{RebuildPolicy, ToolbarPresenter, ToolbarPresenterBuilder};
pub use search::{SearchHandler, SearchView};
