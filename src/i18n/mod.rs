//! Static UI translations.
//!
//! Keys use dotted namespaces (`nav.home`, `work.clearFilters`, `project.status.completed`).
//! Lookups fall back to the default locale when a key is missing in the requested locale, and to
//! the key itself when neither locale knows it, so rendering never fails on a missing string.

mod catalog;

pub use catalog::Catalog;

use crate::locale::Locale;

/// Source of translated UI strings.
pub trait TranslationLookup {
  /// Raw lookup without fallback.
  fn lookup(&self, locale: Locale, key: &str) -> Option<&str>;

  /// Translated string for `key`, falling back to the default locale and then to `key`.
  fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
    self
      .lookup(locale, key)
      .or_else(|| self.lookup(Locale::DEFAULT, key))
      .unwrap_or(key)
  }
}

/// Strings shown by the project filter, resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLabels {
  /// Label preceding the total when no filter is active.
  pub all_projects: String,
  /// Clear-filters button text.
  pub clear_filters: String,
  /// Empty-state message.
  pub no_results: String,
  /// Heading of the filter panel.
  pub filter_by: String,
  /// Search input placeholder.
  pub search_placeholder: String,
  /// Accessible label of the search input.
  pub search_label: String,
  /// Accessible label of the clear-search button.
  pub clear_search: String,
  /// Accessible label of the scroll-left arrow.
  pub scroll_left: String,
  /// Accessible label of the scroll-right arrow.
  pub scroll_right: String,
}

impl FilterLabels {
  /// Resolve the filter panel strings for `locale`.
  pub fn resolve(lookup: &impl TranslationLookup, locale: Locale) -> Self {
    let t = |key: &str| lookup.translate(locale, key).to_string();
    Self {
      all_projects: t("work.allProjects"),
      clear_filters: t("work.clearFilters"),
      no_results: t("work.noResults"),
      filter_by: t("work.filterBy"),
      search_placeholder: t("work.searchPlaceholder"),
      search_label: t("work.searchLabel"),
      clear_search: t("work.clearSearch"),
      scroll_left: t("work.scrollLeft"),
      scroll_right: t("work.scrollRight"),
    }
  }
}
