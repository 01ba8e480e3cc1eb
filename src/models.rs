//! Frontmatter records for the authored content collections.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Kind of project, used for labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
  /// Website or web application.
  Web,
  /// Mobile application.
  Mobile,
  /// Connected hardware.
  Iot,
  /// Machine learning or LLM agents.
  Ai,
  /// Data pipelines and analytics.
  Data,
  /// Backend service or API.
  Api,
  /// Desktop application.
  Desktop,
  /// Anything else.
  #[default]
  Other,
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
  /// Finished.
  #[default]
  Completed,
  /// Under active development.
  InProgress,
  /// No longer maintained.
  Archived,
  /// Finished and still receiving updates.
  Maintained,
}

/// External links of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectLinks {
  /// Live demo.
  pub demo: Option<String>,
  /// Source repository.
  pub repo: Option<String>,
}

/// An image with alternative text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageRef {
  /// Image source.
  pub src: Option<String>,
  /// Alternative text.
  pub alt: Option<String>,
}

/// Per-page SEO overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeoOverrides {
  /// Document title override.
  pub title: Option<String>,
  /// Meta description override.
  pub description: Option<String>,
}

/// Frontmatter of a project page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontmatter {
  /// Project title.
  pub title: String,
  /// One-line summary shown on cards.
  pub summary: String,
  /// Publication date (ISO `YYYY-MM-DD`).
  pub date: String,
  /// Last update date.
  pub updated: Option<String>,
  /// Filterable tags.
  #[serde(default)]
  pub tags: Vec<String>,
  /// Technologies used.
  #[serde(default)]
  pub tech: Vec<String>,
  /// Author's role in the project.
  pub role: Option<String>,
  /// Locale the page is written in.
  #[serde(default)]
  pub lang: Locale,
  /// Key linking the translations of one project.
  pub translation_key: Option<String>,
  /// Kind of project (`type` in the frontmatter).
  #[serde(default, rename = "type")]
  pub project_type: ProjectType,
  /// Lifecycle state.
  #[serde(default)]
  pub status: ProjectStatus,
  /// Free-text duration ("3 meses").
  pub duration: Option<String>,
  /// Highlighted on the home page.
  #[serde(default)]
  pub featured: bool,
  /// Ordering weight, 0 to 10.
  #[serde(default = "default_priority")]
  pub priority: u8,
  /// Demo and repository links.
  #[serde(default)]
  pub links: ProjectLinks,
  /// Card and hero image.
  #[serde(default)]
  pub cover: ImageRef,
  /// Extra screenshots.
  pub gallery: Option<Vec<ImageRef>>,
  /// SEO overrides for the detail page.
  #[serde(default)]
  pub seo: SeoOverrides,
}

/// Highest accepted project priority.
pub const MAX_PRIORITY: u8 = 10;

fn default_priority() -> u8 {
  5
}

/// Frontmatter of a blog post.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostFrontmatter {
  /// Post title.
  pub title: String,
  /// Teaser shown in listings.
  pub excerpt: Option<String>,
  /// Publication date.
  pub date: String,
  /// Last update date.
  pub updated: Option<String>,
  /// Post tags.
  #[serde(default)]
  pub tags: Vec<String>,
  /// Header image.
  #[serde(default)]
  pub cover: ImageRef,
  /// Posts without a language are Spanish.
  #[serde(default)]
  pub lang: Locale,
}

/// Frontmatter of a conference talk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TalkFrontmatter {
  /// Talk title.
  pub title: String,
  /// Conference or meetup name.
  pub event: String,
  /// Date the talk was given.
  pub date: String,
  /// City or venue.
  pub location: Option<String>,
  /// Link to the slides.
  pub slides: Option<String>,
  /// Link to the recording.
  pub video: Option<String>,
  /// Talk abstract.
  #[serde(rename = "abstract")]
  pub summary: Option<String>,
  /// Talks without a language are Spanish.
  #[serde(default)]
  pub lang: Locale,
}

/// Frontmatter of an open-source contribution.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OssFrontmatter {
  /// Contribution title.
  pub title: String,
  /// Repository URL.
  pub repo: String,
  /// What was contributed.
  pub description: Option<String>,
  /// Technology tags.
  #[serde(default)]
  pub tags: Vec<String>,
  /// Locale the entry is written in.
  #[serde(default)]
  pub lang: Locale,
}

/// Frontmatter types that declare the locale they are written in.
pub trait Localized {
  /// Locale of the entry.
  fn lang(&self) -> Locale;
}

macro_rules! impl_localized {
  ($($record:ty),*) => {
    $(impl Localized for $record {
      fn lang(&self) -> Locale {
        self.lang
      }
    })*
  };
}

impl_localized!(ProjectFrontmatter, PostFrontmatter, TalkFrontmatter, OssFrontmatter);

/// A parsed content file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry<T> {
  /// `<lang>/<file stem>`, e.g. `es/cookobot`.
  pub slug: String,
  /// Parsed frontmatter.
  pub data: T,
  /// Markdown body without the frontmatter block.
  pub body: String,
}

impl<T> ContentEntry<T> {
  /// Slug without its locale directory.
  pub fn base_slug(&self) -> &str {
    crate::content::strip_lang_prefix(&self.slug)
  }
}
