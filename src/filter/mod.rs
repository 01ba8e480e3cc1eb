//! Client-side project filter.
//!
//! Cards are matched against a free-text query and a multi-select tag set. Evaluation is pure:
//! it returns a visibility flag per card and leaves applying it to the rendering layer.

mod cards;
mod scroll;
mod state;

pub use cards::{ProjectCard, SUMMARY_ATTRIBUTE, TAGS_ATTRIBUTE, TITLE_ATTRIBUTE, split_tags};
pub use scroll::{SCROLL_STEP, ScrollArrows, ScrollDirection, ScrollMetrics};
pub use state::{CardVisibility, FilterOutcome, FilterState};

use serde::Serialize;

use crate::i18n::TranslationLookup;
use crate::locale::Locale;

/// Result counter shown under the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultSummary {
  /// No filter active: "All projects: N".
  All {
    /// Total number of projects.
    total: usize,
  },
  /// A filter is active: "V of N projects".
  Showing {
    /// Visible projects.
    visible: usize,
    /// Total number of projects.
    total: usize,
  },
}

impl ResultSummary {
  /// Render the counter text in `locale`.
  pub fn render(&self, lookup: &impl TranslationLookup, locale: Locale) -> String {
    match *self {
      ResultSummary::All { total } => {
        format!("{}: {}", lookup.translate(locale, "work.allProjects"), total)
      }
      ResultSummary::Showing { visible, total } => lookup
        .translate(locale, "work.showing")
        .replace("{visible}", &visible.to_string())
        .replace("{total}", &total.to_string()),
    }
  }
}

/// A mounted filter widget: state, the cards it scans and the latest outcome.
///
/// Every mutation recomputes the outcome, so readers always see the result of the current
/// query and selection.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
  state: FilterState,
  cards: Vec<ProjectCard>,
  outcome: FilterOutcome,
}

impl ProjectFilter {
  /// Mount the filter over `cards` with an empty query and selection.
  pub fn new(all_tags: impl IntoIterator<Item = impl Into<String>>, cards: Vec<ProjectCard>) -> Self {
    let state = FilterState::new(all_tags);
    let outcome = state.evaluate(&cards);
    Self {
      state,
      cards,
      outcome,
    }
  }

  /// Current query and selection.
  pub fn state(&self) -> &FilterState {
    &self.state
  }

  /// Cards being filtered.
  pub fn cards(&self) -> &[ProjectCard] {
    &self.cards
  }

  /// Latest evaluation.
  pub fn outcome(&self) -> &FilterOutcome {
    &self.outcome
  }

  /// Search input changed.
  pub fn set_query(&mut self, query: impl Into<String>) {
    self.state.set_query(query);
    self.recompute();
  }

  /// Tag button clicked.
  pub fn toggle_tag(&mut self, tag: &str) {
    self.state.toggle_tag(tag);
    self.recompute();
  }

  /// Clear-filters button clicked.
  pub fn clear_filters(&mut self) {
    self.state.clear();
    self.recompute();
  }

  /// The full tag list changed.
  pub fn set_all_tags(&mut self, all_tags: impl IntoIterator<Item = impl Into<String>>) {
    self.state.set_all_tags(all_tags);
    self.recompute();
  }

  /// Counter text variant for the current outcome.
  pub fn summary(&self) -> ResultSummary {
    let total = self.cards.len();
    if self.state.has_active_filters() {
      ResultSummary::Showing {
        visible: self.outcome.visible_count,
        total,
      }
    } else {
      ResultSummary::All { total }
    }
  }

  /// Whether the "no results" message is shown.
  pub fn shows_empty_state(&self) -> bool {
    self.state.has_active_filters() && self.outcome.visible_count == 0
  }

  fn recompute(&mut self) {
    self.outcome = self.state.evaluate(&self.cards);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::i18n::Catalog;

  fn filter() -> ProjectFilter {
    ProjectFilter::new(["ai", "web", "mobile"], vec![
      ProjectCard::from_attributes("foo", Some("ai,web"), Some("Foo"), None),
      ProjectCard::from_attributes("bar", Some("mobile"), Some("Bar"), None),
    ])
  }

  #[test]
  fn mounts_with_everything_visible() {
    let filter = filter();
    assert_eq!(filter.outcome().visible_count, 2);
    assert_eq!(filter.outcome().available_tags, vec!["ai", "web", "mobile"]);
    assert_eq!(filter.summary(), ResultSummary::All { total: 2 });
    assert!(!filter.shows_empty_state());
  }

  #[test]
  fn recomputes_after_each_interaction() {
    let mut filter = filter();

    filter.toggle_tag("mobile");
    assert_eq!(filter.outcome().visible_ids().collect::<Vec<_>>(), vec!["bar"]);
    assert_eq!(filter.outcome().available_tags, vec!["mobile"]);
    assert_eq!(filter.summary(), ResultSummary::Showing {
      visible: 1,
      total: 2
    });

    filter.set_query("foo");
    assert_eq!(filter.outcome().visible_count, 0);
    assert!(filter.shows_empty_state());

    filter.clear_filters();
    assert_eq!(filter.outcome().visible_count, 2);
    assert!(!filter.state().has_active_filters());
  }

  #[test]
  fn available_tags_follow_tag_list_changes() {
    let mut filter = filter();
    filter.set_all_tags(["mobile", "ai"]);
    assert_eq!(filter.outcome().available_tags, vec!["mobile", "ai"]);
  }

  #[test]
  fn renders_counter_text() {
    assert_eq!(
      ResultSummary::All { total: 4 }.render(&Catalog, Locale::En),
      "All projects: 4"
    );
    assert_eq!(
      ResultSummary::Showing {
        visible: 1,
        total: 4
      }
      .render(&Catalog, Locale::Es),
      "1 de 4 proyectos"
    );
  }
}
