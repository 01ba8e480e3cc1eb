use serde::{Deserialize, Serialize};

/// Attribute carrying the comma-separated tag list of a rendered card.
pub const TAGS_ATTRIBUTE: &str = "data-project-tags";
/// Attribute carrying the card title.
pub const TITLE_ATTRIBUTE: &str = "data-project-title";
/// Attribute carrying the card summary.
pub const SUMMARY_ATTRIBUTE: &str = "data-project-summary";

/// A project card as seen by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectCard {
  /// Identifier the rendering layer uses to apply visibility.
  pub id: String,
  /// Tags attached to the project.
  pub tags: Vec<String>,
  /// Project title.
  pub title: String,
  /// One-line project summary.
  pub summary: String,
}

impl ProjectCard {
  /// Card with the given fields.
  pub fn new(
    id: impl Into<String>,
    tags: impl IntoIterator<Item = impl Into<String>>,
    title: impl Into<String>,
    summary: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      tags: tags.into_iter().map(Into::into).collect(),
      title: title.into(),
      summary: summary.into(),
    }
  }

  /// Build a card from its rendered attributes. Missing attributes are read as empty.
  pub fn from_attributes(
    id: impl Into<String>,
    tags: Option<&str>,
    title: Option<&str>,
    summary: Option<&str>,
  ) -> Self {
    Self {
      id: id.into(),
      tags: split_tags(tags.unwrap_or_default()),
      title: title.unwrap_or_default().to_string(),
      summary: summary.unwrap_or_default().to_string(),
    }
  }

  /// The card's tags joined the way the tags attribute stores them.
  pub fn tags_attribute(&self) -> String {
    self.tags.join(",")
  }

  /// Whether the card carries `tag` exactly.
  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.iter().any(|candidate| candidate == tag)
  }
}

/// Split a comma-separated tag attribute, dropping empty entries.
pub fn split_tags(value: &str) -> Vec<String> {
  value
    .split(',')
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(str::to_string)
    .collect()
}
