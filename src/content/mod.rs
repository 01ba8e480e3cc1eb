//! Static content collections.
//!
//! Content lives under `<root>/<collection>/<lang>/<slug>.md`. Every file starts with a YAML
//! frontmatter block describing the entry. Files that fail to parse are skipped with a warning so
//! that one broken draft does not take the whole site down.

mod markdown;
mod projects;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub use markdown::{first_heading, parse_entry_markdown, parse_entry_str, render_html};
pub use projects::{TranslatedProject, collect_tags, find_with_translation, sort_projects};

use crate::locale::Locale;
use crate::models::{
  ContentEntry, Localized, MAX_PRIORITY, OssFrontmatter, PostFrontmatter, ProjectFrontmatter,
  TalkFrontmatter,
};

/// File extensions read as content entries.
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Errors raised while reading content.
#[derive(Debug, Error)]
pub enum ContentError {
  /// A file or directory could not be read.
  #[error("failed to read {}: {source}", path.display())]
  Io {
    /// Offending path.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },
  /// The frontmatter block is malformed.
  #[error("invalid frontmatter in {}: {message}", path.display())]
  Frontmatter {
    /// Offending file.
    path: PathBuf,
    /// Parser message.
    message: String,
  },
  /// The file has no frontmatter block.
  #[error("missing frontmatter in {}", path.display())]
  MissingFrontmatter {
    /// Offending file.
    path: PathBuf,
  },
  /// The frontmatter does not match the collection schema.
  #[error("frontmatter of {} does not match the schema: {source}", path.display())]
  Schema {
    /// Offending file.
    path: PathBuf,
    /// Deserialisation error.
    source: serde_yaml::Error,
  },
  /// A field holds a value outside its allowed range.
  #[error("invalid {field} in {}: {message}", path.display())]
  Invalid {
    /// Offending file.
    path: PathBuf,
    /// Field name.
    field: &'static str,
    /// What is wrong with it.
    message: String,
  },
}

/// Authored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
  /// Portfolio projects.
  Projects,
  /// Blog posts.
  Posts,
  /// Conference talks.
  Talks,
  /// Open-source contributions.
  Oss,
}

impl Collection {
  /// Directory name under the content root.
  pub fn dir_name(self) -> &'static str {
    match self {
      Collection::Projects => "projects",
      Collection::Posts => "posts",
      Collection::Talks => "talks",
      Collection::Oss => "oss",
    }
  }
}

fn lang_prefix() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^(es|en)/").expect("invalid locale prefix regex"))
}

/// Remove a leading `es/` or `en/` from a content slug.
pub fn strip_lang_prefix(slug: &str) -> &str {
  match lang_prefix().find(slug) {
    Some(found) => &slug[found.end()..],
    None => slug,
  }
}

/// Reader for the content collections under one root directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
  root: PathBuf,
}

impl ContentStore {
  /// Store reading from `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Content root directory.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Load every readable entry of `collection`, sorted by slug.
  ///
  /// A missing collection directory yields no entries.
  pub fn load<T>(&self, collection: Collection) -> Result<Vec<ContentEntry<T>>, ContentError>
  where
    T: DeserializeOwned,
  {
    let collection_dir = self.root.join(collection.dir_name());
    let lang_dirs = match fs::read_dir(&collection_dir) {
      Ok(entries) => entries,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        debug!(dir = %collection_dir.display(), "collection directory missing");
        return Ok(Vec::new());
      }
      Err(source) => {
        return Err(ContentError::Io {
          path: collection_dir,
          source,
        });
      }
    };

    let mut entries = Vec::new();
    for lang_dir in lang_dirs.flatten() {
      if !lang_dir.file_type().is_ok_and(|ft| ft.is_dir()) {
        continue;
      }
      let dir_name = lang_dir.file_name().to_string_lossy().to_string();
      if Locale::from_code(&dir_name).is_none() {
        warn!(dir = %lang_dir.path().display(), "skipping directory for unsupported locale");
        continue;
      }

      let files = fs::read_dir(lang_dir.path()).map_err(|source| ContentError::Io {
        path: lang_dir.path(),
        source,
      })?;
      for file in files.flatten() {
        let path = file.path();
        if !is_content_file(&path) {
          continue;
        }
        let Some(stem) = path.file_stem().map(|stem| stem.to_string_lossy().to_string()) else {
          continue;
        };

        match parse_entry_markdown::<T>(&path) {
          Ok((data, body)) => entries.push(ContentEntry {
            slug: format!("{dir_name}/{stem}"),
            data,
            body,
          }),
          Err(err) => warn!("skipping content entry: {err}"),
        }
      }
    }

    entries.sort_by(|a, b| a.slug.cmp(&b.slug));
    debug!(
      collection = collection.dir_name(),
      count = entries.len(),
      "content collection loaded"
    );
    Ok(entries)
  }

  /// Every project, with out-of-range priorities rejected.
  pub fn projects(&self) -> Result<Vec<ContentEntry<ProjectFrontmatter>>, ContentError> {
    let root = self.root.join(Collection::Projects.dir_name());
    let projects = self
      .load::<ProjectFrontmatter>(Collection::Projects)?
      .into_iter()
      .filter(|entry| match validate_project(&root, entry) {
        Ok(()) => true,
        Err(err) => {
          warn!("skipping content entry: {err}");
          false
        }
      })
      .collect();
    Ok(projects)
  }

  /// Projects written in `lang`.
  pub fn projects_by_lang(
    &self,
    lang: Locale,
  ) -> Result<Vec<ContentEntry<ProjectFrontmatter>>, ContentError> {
    Ok(filter_by_lang(self.projects()?, lang))
  }

  /// Posts written in `lang`.
  pub fn posts_by_lang(
    &self,
    lang: Locale,
  ) -> Result<Vec<ContentEntry<PostFrontmatter>>, ContentError> {
    Ok(filter_by_lang(self.load(Collection::Posts)?, lang))
  }

  /// Talks given in `lang`.
  pub fn talks_by_lang(
    &self,
    lang: Locale,
  ) -> Result<Vec<ContentEntry<TalkFrontmatter>>, ContentError> {
    Ok(filter_by_lang(self.load(Collection::Talks)?, lang))
  }

  /// Open-source entries written in `lang`.
  pub fn oss_by_lang(&self, lang: Locale) -> Result<Vec<ContentEntry<OssFrontmatter>>, ContentError> {
    Ok(filter_by_lang(self.load(Collection::Oss)?, lang))
  }

  /// Whether the project `slug` in `from` has a counterpart in the other locale.
  pub fn has_translation(&self, slug: &str, from: Locale) -> Result<bool, ContentError> {
    let projects = self.projects()?;
    Ok(
      find_with_translation(&projects, slug, from)
        .is_some_and(|found| found.translation.is_some()),
    )
  }
}

/// Keep the entries whose frontmatter declares `lang`.
pub fn filter_by_lang<T: Localized>(entries: Vec<ContentEntry<T>>, lang: Locale) -> Vec<ContentEntry<T>> {
  entries
    .into_iter()
    .filter(|entry| entry.data.lang() == lang)
    .collect()
}

fn validate_project(
  root: &Path,
  entry: &ContentEntry<ProjectFrontmatter>,
) -> Result<(), ContentError> {
  if entry.data.priority > MAX_PRIORITY {
    return Err(ContentError::Invalid {
      path: root.join(&entry.slug),
      field: "priority",
      message: format!("{} is above {MAX_PRIORITY}", entry.data.priority),
    });
  }
  Ok(())
}

fn is_content_file(path: &Path) -> bool {
  path.is_file()
    && path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
    fs::write(path, contents).expect("write content file");
  }

  fn project(title: &str, lang: &str, extra: &str) -> String {
    format!("---\ntitle: {title}\nsummary: About {title}\ndate: 2024-01-01\nlang: {lang}\n{extra}---\nBody of {title}\n")
  }

  #[test]
  fn strips_locale_from_slugs() {
    assert_eq!(strip_lang_prefix("es/cookobot"), "cookobot");
    assert_eq!(strip_lang_prefix("en/cookobot"), "cookobot");
    assert_eq!(strip_lang_prefix("cookobot"), "cookobot");
    assert_eq!(strip_lang_prefix("fr/cookobot"), "fr/cookobot");
  }

  #[test]
  fn missing_collection_is_empty() {
    let temp = tempdir().expect("temp dir");
    let store = ContentStore::new(temp.path());
    assert!(store.projects().expect("load").is_empty());
  }

  #[test]
  fn loads_projects_per_locale() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path();
    write(root, "projects/es/cookobot.md", &project("Cookobot", "es", ""));
    write(root, "projects/en/cookobot.md", &project("Cookobot EN", "en", ""));
    write(root, "projects/es/notes.txt", "ignored");
    write(root, "projects/fr/ignored.md", &project("Ignored", "es", ""));

    let store = ContentStore::new(root);
    let spanish = store.projects_by_lang(Locale::Es).expect("load");
    let english = store.projects_by_lang(Locale::En).expect("load");

    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish[0].slug, "es/cookobot");
    assert_eq!(spanish[0].base_slug(), "cookobot");
    assert_eq!(english.len(), 1);
    assert_eq!(english[0].data.title, "Cookobot EN");
  }

  #[test]
  fn skips_broken_entries() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path();
    write(root, "projects/es/good.md", &project("Good", "es", ""));
    write(root, "projects/es/broken.md", "---\ntitle: [unclosed\n---\n");
    write(root, "projects/es/loud.md", &project("Loud", "es", "priority: 11\n"));

    let projects = ContentStore::new(root).projects().expect("load");
    let slugs: Vec<&str> = projects.iter().map(|entry| entry.slug.as_str()).collect();
    assert_eq!(slugs, vec!["es/good"]);
  }

  #[test]
  fn posts_default_to_spanish() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path();
    write(root, "posts/es/hello.md", "---\ntitle: Hola\ndate: 2024-02-02\n---\nHola\n");
    write(root, "posts/en/hello.md", "---\ntitle: Hello\ndate: 2024-02-02\nlang: en\n---\nHi\n");

    let store = ContentStore::new(root);
    let spanish = store.posts_by_lang(Locale::Es).expect("load");
    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish[0].data.title, "Hola");
    assert_eq!(store.posts_by_lang(Locale::En).expect("load").len(), 1);
  }

  #[test]
  fn talks_and_oss_filter_by_lang() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path();
    write(
      root,
      "talks/en/agents.md",
      "---\ntitle: Agents\nevent: PyCon\ndate: 2024-03-03\nlang: en\nabstract: Talk\n---\n",
    );
    write(
      root,
      "oss/es/lib.md",
      "---\ntitle: Lib\nrepo: https://github.com/example/lib\n---\n",
    );

    let store = ContentStore::new(root);
    let talks = store.talks_by_lang(Locale::En).expect("load");
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0].data.summary.as_deref(), Some("Talk"));
    assert!(store.talks_by_lang(Locale::Es).expect("load").is_empty());
    assert_eq!(store.oss_by_lang(Locale::Es).expect("load").len(), 1);
  }

  #[test]
  fn detects_translations_on_disk() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path();
    write(root, "projects/es/cookobot.md", &project("Cookobot", "es", ""));
    write(root, "projects/en/cookobot.md", &project("Cookobot", "en", ""));
    write(root, "projects/es/solo.md", &project("Solo", "es", ""));

    let store = ContentStore::new(root);
    assert!(store.has_translation("cookobot", Locale::Es).expect("load"));
    assert!(store.has_translation("en/cookobot", Locale::En).expect("load"));
    assert!(!store.has_translation("solo", Locale::Es).expect("load"));
    assert!(!store.has_translation("missing", Locale::Es).expect("load"));
  }
}
