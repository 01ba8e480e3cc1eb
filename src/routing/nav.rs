//! Navigation values derived from the current locale and path.

use serde::Serialize;

use crate::i18n::TranslationLookup;
use crate::locale::Locale;

/// Element id shared by the mobile menu button and the menu it toggles.
pub const MOBILE_NAV_ID: &str = "mobile-nav";

/// Header entries in display order with their translation keys.
const NAV_ENTRIES: [(NavTarget, &str); 5] = [
  (NavTarget::Home, "nav.home"),
  (NavTarget::Page("/work"), "nav.work"),
  (NavTarget::Anchor("#about"), "nav.about"),
  (NavTarget::Anchor("#skills"), "nav.skills"),
  (NavTarget::Anchor("#contact"), "nav.contact"),
];

#[derive(Debug, Clone, Copy)]
enum NavTarget {
  Home,
  Page(&'static str),
  Anchor(&'static str),
}

/// A rendered header link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
  /// Link target.
  pub href: String,
  /// Translated link text.
  pub label: String,
  /// `true` for page links, `false` for in-page anchors.
  pub is_page: bool,
}

/// ARIA attributes of the mobile menu toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuButtonAria {
  /// Value of `aria-expanded`.
  pub expanded: bool,
  /// Value of `aria-controls`.
  pub controls: &'static str,
  /// Value of `aria-label`.
  pub label: &'static str,
}

impl MenuButtonAria {
  /// Attributes for a menu that is currently `open` or closed.
  pub fn for_state(open: bool) -> Self {
    Self {
      expanded: open,
      controls: MOBILE_NAV_ID,
      label: if open { "Close menu" } else { "Open menu" },
    }
  }
}

/// The `(locale, path)` pair every header link is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavContext {
  /// Active locale.
  pub locale: Locale,
  /// Current location path.
  pub path: String,
}

impl NavContext {
  /// Context for `path` rendered in `locale`.
  pub fn new(locale: Locale, path: impl Into<String>) -> Self {
    Self {
      locale,
      path: path.into(),
    }
  }

  /// Context whose locale is derived from the path itself.
  pub fn from_path(path: impl Into<String>) -> Self {
    let path = path.into();
    Self {
      locale: Locale::from_path(&path),
      path,
    }
  }

  /// Whether the path is a home page in either locale.
  pub fn is_home(&self) -> bool {
    matches!(self.path.as_str(), "/" | "/en" | "/en/")
  }

  /// Prefix for page links.
  pub fn base_prefix(&self) -> &'static str {
    self.locale.prefix()
  }

  /// Prefix for in-page anchors.
  ///
  /// On a home page anchors stay relative. Elsewhere they point back to the locale's home page
  /// first: `/` for the default locale, `/{code}` otherwise.
  pub fn anchor_prefix(&self) -> &'static str {
    if self.is_home() {
      ""
    } else if self.locale.is_default() {
      "/"
    } else {
      self.locale.prefix()
    }
  }

  /// Target of the logo and the home entry.
  pub fn home_href(&self) -> &'static str {
    if self.locale.is_default() {
      "/"
    } else {
      self.locale.prefix()
    }
  }

  /// Header links in display order.
  pub fn nav_items(&self, lookup: &impl TranslationLookup) -> Vec<NavItem> {
    NAV_ENTRIES
      .iter()
      .map(|(target, key)| {
        let (href, is_page) = match target {
          NavTarget::Home => (self.home_href().to_string(), true),
          NavTarget::Page(suffix) => (format!("{}{}", self.base_prefix(), suffix), true),
          NavTarget::Anchor(anchor) => (format!("{}{}", self.anchor_prefix(), anchor), false),
        };
        NavItem {
          href,
          label: lookup.translate(self.locale, key).to_string(),
          is_page,
        }
      })
      .collect()
  }
}
