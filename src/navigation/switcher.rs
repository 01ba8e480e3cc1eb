use serde::Serialize;

use super::environment::NavigationEnvironment;
use super::mounted::Mounted;
use super::swap::SwapEvents;
use crate::locale::Locale;
use crate::routing::localized_path;

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleLink {
  /// Locale the link switches to.
  pub locale: Locale,
  /// Short label ("ES").
  pub label: &'static str,
  /// Native language name, used as the link title.
  pub full_name: &'static str,
  /// Equivalent page in the target locale.
  pub href: String,
  /// Whether this is the locale being displayed.
  pub active: bool,
}

/// Build the switcher links for `path` displayed in `current`.
pub fn locale_links(current: Locale, path: &str) -> Vec<LocaleLink> {
  Locale::ALL
    .iter()
    .map(|&locale| LocaleLink {
      locale,
      label: locale.label(),
      full_name: locale.native_name(),
      href: localized_path(path, locale),
      active: locale == current,
    })
    .collect()
}

/// State of the language switcher.
///
/// The displayed locale comes from the parent; only the path is re-read after a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitcherState {
  current_locale: Locale,
  current_path: String,
}

impl LanguageSwitcherState {
  /// Switcher showing `path` in `locale`.
  pub fn new(locale: Locale, path: impl Into<String>) -> Self {
    Self {
      current_locale: locale,
      current_path: path.into(),
    }
  }

  /// Switcher for the path currently reported by `environment`.
  pub fn from_environment(locale: Locale, environment: &dyn NavigationEnvironment) -> Self {
    Self::new(locale, environment.current_path())
  }

  /// Locale the parent is rendering.
  pub fn current_locale(&self) -> Locale {
    self.current_locale
  }

  /// Path the links are computed from.
  pub fn current_path(&self) -> &str {
    &self.current_path
  }

  /// Re-read the path after an in-place navigation.
  pub fn sync_path(&mut self, path: &str) {
    self.current_path = path.to_string();
  }

  /// One link per supported locale.
  pub fn links(&self) -> Vec<LocaleLink> {
    locale_links(self.current_locale, &self.current_path)
  }
}

/// Mount a language switcher that follows in-place navigations.
pub fn mount_language_switcher(
  events: &SwapEvents,
  environment: &dyn NavigationEnvironment,
  locale: Locale,
) -> Mounted<LanguageSwitcherState> {
  let state = LanguageSwitcherState::from_environment(locale, environment);
  Mounted::mount(events, state, LanguageSwitcherState::sync_path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::navigation::StaticLocation;

  fn hrefs(state: &LanguageSwitcherState) -> Vec<(&'static str, String)> {
    state
      .links()
      .into_iter()
      .map(|link| (link.label, link.href))
      .collect()
  }

  #[test]
  fn renders_one_link_per_locale() {
    let links = LanguageSwitcherState::new(Locale::Es, "/").links();
    let labels: Vec<&str> = links.iter().map(|link| link.label).collect();
    assert_eq!(labels, vec!["ES", "EN"]);
    assert_eq!(links[0].full_name, "Español");
    assert!(links[0].active);
    assert!(!links[1].active);
  }

  #[test]
  fn links_from_spanish_home() {
    let state = LanguageSwitcherState::new(Locale::Es, "/");
    assert_eq!(hrefs(&state), vec![("ES", "/".to_string()), ("EN", "/en/".to_string())]);
  }

  #[test]
  fn links_from_work_pages() {
    for (locale, path) in [(Locale::En, "/en/work"), (Locale::Es, "/work")] {
      let state = LanguageSwitcherState::new(locale, path);
      assert_eq!(hrefs(&state), vec![
        ("ES", "/work".to_string()),
        ("EN", "/en/work".to_string())
      ]);
    }
  }

  #[test]
  fn follows_after_swap() {
    let events = SwapEvents::new();
    let location = StaticLocation::new("/");
    let switcher = mount_language_switcher(&events, &location, Locale::Es);
    assert_eq!(switcher.state().links()[1].href, "/en/");

    location.navigate("/work");
    events.dispatch(&location);

    assert_eq!(switcher.state().links()[1].href, "/en/work");
    assert_eq!(switcher.state().current_locale(), Locale::Es);
  }

  #[test]
  fn unmount_removes_the_registered_handler() {
    let events = SwapEvents::new();
    let location = StaticLocation::new("/");
    let switcher = mount_language_switcher(&events, &location, Locale::Es);
    let id = switcher.listener_id();
    assert!(events.is_registered(id));

    switcher.unmount();
    assert!(!events.is_registered(id));
    assert_eq!(events.dispatch(&location), 0);
  }
}
