//! Filter state and its evaluation over the project cards.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::debug;

use super::cards::ProjectCard;

/// Query and tag selection entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
  all_tags: Vec<String>,
  search_query: String,
  selected_tags: BTreeSet<String>,
}

/// Visibility decision for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardVisibility {
  /// Card identifier.
  pub id: String,
  /// Whether the card should be shown.
  pub visible: bool,
}

/// Result of evaluating the filter over a set of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
  /// Per-card visibility, in card order.
  pub visibility: Vec<CardVisibility>,
  /// Number of visible cards.
  pub visible_count: usize,
  /// Tags still present on visible cards, in the order of the full tag list.
  pub available_tags: Vec<String>,
}

impl FilterOutcome {
  /// Whether the card with `id` is visible. Unknown ids are hidden.
  pub fn is_visible(&self, id: &str) -> bool {
    self
      .visibility
      .iter()
      .any(|entry| entry.id == id && entry.visible)
  }

  /// Identifiers of the visible cards.
  pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
    self
      .visibility
      .iter()
      .filter(|entry| entry.visible)
      .map(|entry| entry.id.as_str())
  }
}

impl FilterState {
  /// Empty query and selection over `all_tags`.
  pub fn new(all_tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      all_tags: all_tags.into_iter().map(Into::into).collect(),
      ..Self::default()
    }
  }

  /// Full tag list the filter buttons are drawn from.
  pub fn all_tags(&self) -> &[String] {
    &self.all_tags
  }

  /// Current free-text query as typed.
  pub fn search_query(&self) -> &str {
    &self.search_query
  }

  /// Currently selected tags.
  pub fn selected_tags(&self) -> &BTreeSet<String> {
    &self.selected_tags
  }

  /// Whether `tag` is selected.
  pub fn is_selected(&self, tag: &str) -> bool {
    self.selected_tags.contains(tag)
  }

  /// Replace the full tag list.
  pub fn set_all_tags(&mut self, all_tags: impl IntoIterator<Item = impl Into<String>>) {
    self.all_tags = all_tags.into_iter().map(Into::into).collect();
  }

  /// Replace the free-text query.
  pub fn set_query(&mut self, query: impl Into<String>) {
    self.search_query = query.into();
  }

  /// Select `tag`, or deselect it when already selected.
  pub fn toggle_tag(&mut self, tag: &str) {
    if !self.selected_tags.remove(tag) {
      self.selected_tags.insert(tag.to_string());
    }
  }

  /// Reset query and selection together.
  pub fn clear(&mut self) {
    *self = Self {
      all_tags: std::mem::take(&mut self.all_tags),
      ..Self::default()
    };
  }

  /// Whether a query or a tag selection is active.
  pub fn has_active_filters(&self) -> bool {
    !self.search_query.is_empty() || !self.selected_tags.is_empty()
  }

  /// Whether `card` passes both the text query and the tag selection.
  pub fn matches(&self, card: &ProjectCard) -> bool {
    self.matches_search(card, &normalised_query(&self.search_query)) && self.matches_tags(card)
  }

  /// Decide visibility for every card and the tags that remain useful.
  pub fn evaluate(&self, cards: &[ProjectCard]) -> FilterOutcome {
    let query = normalised_query(&self.search_query);
    let mut visible_tags: HashSet<&str> = HashSet::new();
    let mut visibility = Vec::with_capacity(cards.len());
    let mut visible_count = 0;

    for card in cards {
      let visible = self.matches_search(card, &query) && self.matches_tags(card);
      if visible {
        visible_count += 1;
        visible_tags.extend(card.tags.iter().map(String::as_str));
      }
      visibility.push(CardVisibility {
        id: card.id.clone(),
        visible,
      });
    }

    let available_tags = self
      .all_tags
      .iter()
      .filter(|tag| visible_tags.contains(tag.as_str()))
      .cloned()
      .collect();

    debug!(
      query = %query,
      selected = self.selected_tags.len(),
      visible_count,
      total = cards.len(),
      "project filter evaluated"
    );

    FilterOutcome {
      visibility,
      visible_count,
      available_tags,
    }
  }

  fn matches_search(&self, card: &ProjectCard, query: &str) -> bool {
    query.is_empty()
      || card.title.to_lowercase().contains(query)
      || card.summary.to_lowercase().contains(query)
      || card
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query))
  }

  fn matches_tags(&self, card: &ProjectCard) -> bool {
    self.selected_tags.is_empty() || self.selected_tags.iter().any(|tag| card.has_tag(tag))
  }
}

fn normalised_query(query: &str) -> String {
  query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cards() -> Vec<ProjectCard> {
    vec![
      ProjectCard::new("foo", ["ai", "web"], "Foo", "Agent platform"),
      ProjectCard::new("bar", ["mobile"], "Bar", "Recipe app"),
    ]
  }

  fn state() -> FilterState {
    FilterState::new(["ai", "web", "mobile"])
  }

  #[test]
  fn shows_everything_without_filters() {
    let outcome = state().evaluate(&cards());
    assert_eq!(outcome.visible_count, 2);
    assert_eq!(outcome.available_tags, vec!["ai", "web", "mobile"]);
    assert!(outcome.is_visible("foo"));
    assert!(outcome.is_visible("bar"));
  }

  #[test]
  fn filters_by_selected_tag() {
    let mut state = state();
    state.toggle_tag("mobile");

    let outcome = state.evaluate(&cards());
    assert_eq!(outcome.visible_count, 1);
    assert_eq!(outcome.visible_ids().collect::<Vec<_>>(), vec!["bar"]);
    assert_eq!(outcome.available_tags, vec!["mobile"]);
  }

  #[test]
  fn selected_tags_combine_with_or() {
    let mut state = state();
    state.toggle_tag("mobile");
    state.toggle_tag("web");

    let outcome = state.evaluate(&cards());
    assert_eq!(outcome.visible_count, 2);
  }

  #[test]
  fn search_is_case_insensitive_over_title_summary_and_tags() {
    let mut state = state();
    let cards = cards();

    state.set_query("FOO");
    assert_eq!(state.evaluate(&cards).visible_ids().collect::<Vec<_>>(), vec!["foo"]);

    state.set_query("recipe");
    assert_eq!(state.evaluate(&cards).visible_ids().collect::<Vec<_>>(), vec!["bar"]);

    state.set_query("MOB");
    assert_eq!(state.evaluate(&cards).visible_ids().collect::<Vec<_>>(), vec!["bar"]);

    state.set_query("  ");
    assert_eq!(state.evaluate(&cards).visible_count, 2);
  }

  #[test]
  fn search_and_tags_must_both_match() {
    let mut state = state();
    state.set_query("foo");
    state.toggle_tag("mobile");

    let outcome = state.evaluate(&cards());
    assert_eq!(outcome.visible_count, 0);
    assert!(outcome.available_tags.is_empty());
  }

  #[test]
  fn toggling_twice_restores_selection() {
    let mut state = state();
    state.toggle_tag("ai");
    let before = state.selected_tags().clone();

    state.toggle_tag("web");
    state.toggle_tag("web");
    assert_eq!(state.selected_tags(), &before);

    state.toggle_tag("ai");
    assert!(state.selected_tags().is_empty());
  }

  #[test]
  fn clear_resets_query_and_tags() {
    let mut state = state();
    state.set_query("foo");
    state.toggle_tag("ai");
    assert!(state.has_active_filters());

    state.clear();

    assert_eq!(state.search_query(), "");
    assert!(state.selected_tags().is_empty());
    assert!(!state.has_active_filters());
    assert_eq!(state.all_tags(), ["ai", "web", "mobile"]);
    assert_eq!(state.evaluate(&cards()).visible_count, 2);
  }

  #[test]
  fn cards_without_tags_only_match_text() {
    let mut state = state();
    let cards = vec![ProjectCard::from_attributes("x", None, Some("Untitled"), None)];

    assert_eq!(state.evaluate(&cards).visible_count, 1);
    state.toggle_tag("ai");
    assert_eq!(state.evaluate(&cards).visible_count, 0);
  }
}
