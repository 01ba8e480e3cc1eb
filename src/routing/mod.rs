//! Helpers for building locale-aware hrefs.
//!
//! The resolver that maps a path into another locale is kept separate from the navigation
//! values derived for the header so that each can be tested on its own. Both are pure: they take
//! the current path and locale as input and never read ambient location state.

mod nav;
mod resolver;

pub use nav::{MOBILE_NAV_ID, MenuButtonAria, NavContext, NavItem};
pub use resolver::{localized_path, strip_locale_prefix};
