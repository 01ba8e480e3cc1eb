use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mounted::Mounted;
use super::swap::SwapEvents;
use super::switcher::{LocaleLink, locale_links};
use crate::i18n::TranslationLookup;
use crate::locale::Locale;
use crate::routing::{MenuButtonAria, NavContext, NavItem};

/// Scroll offset in pixels past which the header switches to its opaque style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Downloadable CV per locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CvLinks {
  /// CV linked from Spanish pages.
  pub es: String,
  /// CV linked from English pages.
  pub en: String,
}

impl Default for CvLinks {
  fn default() -> Self {
    Self {
      es: "/cv/esp/CV_MiraAbad_Alejandro.pdf".into(),
      en: "/cv/eng/CV_MiraAbad_Alejandro.pdf".into(),
    }
  }
}

impl CvLinks {
  /// CV href for `locale`.
  pub fn for_locale(&self, locale: Locale) -> &str {
    match locale {
      Locale::Es => &self.es,
      Locale::En => &self.en,
    }
  }
}

/// State behind the site header.
///
/// `(locale, path)` only changes through [`HeaderState::apply_swap`]. The mobile menu and scroll
/// flags are transient and driven by user interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
  nav: NavContext,
  menu_open: bool,
  scrolled: bool,
  cv_links: CvLinks,
}

impl HeaderState {
  /// Header as rendered by the host page for `path` in `locale`.
  pub fn new(locale: Locale, path: impl Into<String>) -> Self {
    Self {
      nav: NavContext::new(locale, path),
      menu_open: false,
      scrolled: false,
      cv_links: CvLinks::default(),
    }
  }

  /// Replace the CV links.
  pub fn with_cv_links(mut self, cv_links: CvLinks) -> Self {
    self.cv_links = cv_links;
    self
  }

  /// Re-derive locale and path after an in-place navigation and close the mobile menu.
  pub fn apply_swap(&mut self, path: &str) {
    self.nav = NavContext::from_path(path);
    self.menu_open = false;
    debug!(locale = %self.nav.locale, path, "header synced after swap");
  }

  /// Active locale.
  pub fn locale(&self) -> Locale {
    self.nav.locale
  }

  /// Current path.
  pub fn path(&self) -> &str {
    &self.nav.path
  }

  /// Navigation context the links are derived from.
  pub fn nav(&self) -> &NavContext {
    &self.nav
  }

  /// Whether the mobile menu is expanded.
  pub fn is_menu_open(&self) -> bool {
    self.menu_open
  }

  /// Hamburger button click.
  pub fn toggle_menu(&mut self) {
    self.menu_open = !self.menu_open;
  }

  /// A mobile menu link was followed.
  pub fn close_menu(&mut self) {
    self.menu_open = false;
  }

  /// Record the window's vertical scroll offset.
  pub fn set_scroll_offset(&mut self, offset: f64) {
    self.scrolled = offset > SCROLL_THRESHOLD;
  }

  /// Whether the window is scrolled past [`SCROLL_THRESHOLD`].
  pub fn is_scrolled(&self) -> bool {
    self.scrolled
  }

  /// The header drops its transparent background once scrolled or while the menu is open.
  pub fn is_opaque(&self) -> bool {
    self.scrolled || self.menu_open
  }

  /// Whether the current path is a home page.
  pub fn is_home(&self) -> bool {
    self.nav.is_home()
  }

  /// Target of the logo link.
  pub fn home_href(&self) -> &'static str {
    self.nav.home_href()
  }

  /// ARIA attributes of the hamburger button.
  pub fn menu_button_aria(&self) -> MenuButtonAria {
    MenuButtonAria::for_state(self.menu_open)
  }

  /// Header links, translated with `lookup`.
  pub fn nav_items(&self, lookup: &impl TranslationLookup) -> Vec<NavItem> {
    self.nav.nav_items(lookup)
  }

  /// Download link of the CV in the active locale.
  pub fn cv_href(&self) -> &str {
    self.cv_links.for_locale(self.nav.locale)
  }

  /// Links rendered by the embedded language switcher.
  pub fn language_links(&self) -> Vec<LocaleLink> {
    locale_links(self.nav.locale, &self.nav.path)
  }
}

/// Mount a header that follows in-place navigations.
pub fn mount_header(events: &SwapEvents, initial: HeaderState) -> Mounted<HeaderState> {
  Mounted::mount(events, initial, HeaderState::apply_swap)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::i18n::Catalog;
  use crate::navigation::StaticLocation;

  fn hrefs(state: &HeaderState) -> Vec<String> {
    state
      .nav_items(&Catalog)
      .into_iter()
      .map(|item| item.href)
      .collect()
  }

  #[test]
  fn english_header_links_home_to_prefix() {
    let state = HeaderState::new(Locale::En, "/en");
    assert_eq!(state.home_href(), "/en");
    assert_eq!(state.language_links()[1].href, "/en/");
    assert!(state.language_links()[1].active);
  }

  #[test]
  fn swap_to_english_page_updates_locale() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    assert_eq!(header.state().locale(), Locale::Es);

    let location = StaticLocation::new("/en/work");
    events.dispatch(&location);

    let state = header.state();
    assert_eq!(state.locale(), Locale::En);
    assert_eq!(state.path(), "/en/work");
    assert_eq!(state.home_href(), "/en");
    assert!(hrefs(&state).contains(&"/en/work".to_string()));
  }

  #[test]
  fn swap_to_spanish_page_updates_locale() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::En, "/en/work"));

    events.dispatch(&StaticLocation::new("/work"));

    assert_eq!(header.state().locale(), Locale::Es);
    assert_eq!(header.state().home_href(), "/");
  }

  #[test]
  fn swap_uses_path_prefix_for_locale() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));

    events.dispatch(&StaticLocation::new("/english-notes"));
    assert_eq!(header.state().locale(), Locale::En);

    events.dispatch(&StaticLocation::new("/work"));
    assert_eq!(header.state().locale(), Locale::Es);
  }

  #[test]
  fn swap_closes_mobile_menu() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    header.update(HeaderState::toggle_menu);
    assert!(header.state().is_menu_open());

    events.dispatch(&StaticLocation::new("/en/work"));

    assert!(!header.state().is_menu_open());
    assert_eq!(header.state().locale(), Locale::En);
  }

  #[test]
  fn swap_keeps_closed_menu_closed() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    events.dispatch(&StaticLocation::new("/work"));
    assert!(!header.state().is_menu_open());
  }

  #[test]
  fn anchors_follow_navigation_off_home() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    assert!(hrefs(&header.state()).contains(&"#about".to_string()));

    events.dispatch(&StaticLocation::new("/work"));

    let links = hrefs(&header.state());
    assert!(links.contains(&"/#about".to_string()));
    assert!(links.contains(&"/#contact".to_string()));
  }

  #[test]
  fn menu_button_reflects_state() {
    let mut state = HeaderState::new(Locale::Es, "/");
    let aria = state.menu_button_aria();
    assert!(!aria.expanded);
    assert_eq!(aria.controls, "mobile-nav");
    assert_eq!(aria.label, "Open menu");

    state.toggle_menu();
    let aria = state.menu_button_aria();
    assert!(aria.expanded);
    assert_eq!(aria.label, "Close menu");

    state.close_menu();
    assert!(!state.is_menu_open());
  }

  #[test]
  fn header_becomes_opaque() {
    let mut state = HeaderState::new(Locale::Es, "/");
    assert!(!state.is_opaque());

    state.toggle_menu();
    assert!(state.is_opaque());
    state.toggle_menu();

    state.set_scroll_offset(50.0);
    assert!(!state.is_opaque());
    state.set_scroll_offset(51.0);
    assert!(state.is_scrolled());
    assert!(state.is_opaque());
  }

  #[test]
  fn cv_link_follows_locale() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    assert_eq!(header.state().cv_href(), "/cv/esp/CV_MiraAbad_Alejandro.pdf");

    events.dispatch(&StaticLocation::new("/en/"));
    assert_eq!(header.state().cv_href(), "/cv/eng/CV_MiraAbad_Alejandro.pdf");
  }

  #[test]
  fn unmount_removes_the_same_handler() {
    let events = SwapEvents::new();
    let header = mount_header(&events, HeaderState::new(Locale::Es, "/"));
    let id = header.listener_id();
    assert_eq!(events.listener_count(), 1);

    header.unmount();

    assert!(!events.is_registered(id));
    assert_eq!(events.dispatch(&StaticLocation::new("/en")), 0);
  }
}
