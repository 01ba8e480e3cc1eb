//! Components that stay in sync across in-place (view transition) navigations.
//!
//! The page content can be replaced without reloading or remounting the header. Each mounted
//! component subscribes once to [`SwapEvents`] and re-derives its state from the injected
//! [`NavigationEnvironment`] after every swap. The subscription is owned by the component, so
//! dropping or unmounting it removes exactly the handler it added.

mod environment;
mod header;
mod mounted;
mod swap;
mod switcher;

pub use environment::{NavigationEnvironment, StaticLocation};
pub use header::{CvLinks, HeaderState, SCROLL_THRESHOLD, mount_header};
pub use mounted::Mounted;
pub use swap::{ListenerId, Subscription, SwapEvents};
pub use switcher::{LanguageSwitcherState, LocaleLink, locale_links, mount_language_switcher};
