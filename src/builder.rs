//! Site manifest generation.
//!
//! The manifest collects everything the rendering layer needs per locale: header navigation for
//! the top-level pages, language switcher links, project cards with the full tag list for the
//! filter, and the detail page links with their translations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::SiteConfig;
use crate::content::{ContentStore, collect_tags, find_with_translation, sort_projects};
use crate::filter::ProjectCard;
use crate::i18n::{Catalog, FilterLabels};
use crate::locale::Locale;
use crate::models::{ContentEntry, ProjectFrontmatter};
use crate::navigation::{HeaderState, LocaleLink};
use crate::routing::{NavItem, localized_path};

/// Result type used by the build steps.
pub type BuildResult<T> = Result<T>;

/// Serialised header state for one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavigation {
  /// Page path.
  pub path: String,
  /// Logo link target.
  pub home_href: String,
  /// Header links.
  pub nav_items: Vec<NavItem>,
  /// Language switcher links.
  pub language_links: Vec<LocaleLink>,
  /// CV download link.
  pub cv_href: String,
}

/// A project detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
  /// Content slug (`es/cookobot`).
  pub slug: String,
  /// Page href in its own locale.
  pub href: String,
  /// Href of the translated page, when a translation exists.
  pub translation_href: Option<String>,
}

/// Everything rendered for one locale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleManifest {
  /// Locale of the pages.
  pub locale: Locale,
  /// Home page navigation.
  pub home: PageNavigation,
  /// Project listing navigation.
  pub work: PageNavigation,
  /// Tags offered by the filter.
  pub all_tags: Vec<String>,
  /// Cards in listing order.
  pub projects: Vec<ProjectCard>,
  /// Project detail pages.
  pub project_pages: Vec<ProjectPage>,
  /// Filter panel strings.
  pub filter_labels: FilterLabels,
}

/// The complete site manifest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
  /// Canonical site origin.
  pub site_url: String,
  /// Unprefixed locale.
  pub default_locale: Locale,
  /// Per-locale data in switcher order.
  pub locales: Vec<LocaleManifest>,
}

/// Output of [`SiteBuilder::build`].
#[derive(Debug)]
pub struct SiteArtifacts {
  /// Structured manifest.
  pub manifest: SiteManifest,
  /// Manifest serialised as prettified JSON.
  pub manifest_json: String,
}

/// Builds the site manifest for a project root.
pub struct SiteBuilder<'a> {
  root: &'a Path,
  config: &'a SiteConfig,
}

impl<'a> SiteBuilder<'a> {
  /// Builder for the project at `root`.
  pub fn new(root: &'a Path, config: &'a SiteConfig) -> Self {
    Self { root, config }
  }

  /// Load the content and assemble the manifest.
  pub fn build(&self) -> BuildResult<SiteArtifacts> {
    let content_dir = self.config.content_dir_path(self.root);
    let store = ContentStore::new(&content_dir);
    let projects = store
      .projects()
      .with_context(|| format!("failed to load projects from {}", content_dir.display()))?;

    let locales = Locale::ALL
      .iter()
      .map(|&locale| self.build_locale(locale, &projects))
      .collect::<Vec<_>>();

    let manifest = SiteManifest {
      site_url: self.config.site_url.clone(),
      default_locale: Locale::DEFAULT,
      locales,
    };
    let manifest_json =
      serde_json::to_string_pretty(&manifest).context("failed to serialise site manifest")?;

    info!(
      projects = projects.len(),
      locales = manifest.locales.len(),
      "site manifest built"
    );
    Ok(SiteArtifacts {
      manifest,
      manifest_json,
    })
  }

  /// Write built artifacts to the configured manifest path.
  pub fn write(&self, artifacts: &SiteArtifacts) -> BuildResult<PathBuf> {
    let target = self.config.manifest_output_path(self.root);
    write_manifest(&target, &artifacts.manifest_json)?;
    Ok(target)
  }

  fn build_locale(
    &self,
    locale: Locale,
    projects: &[ContentEntry<ProjectFrontmatter>],
  ) -> LocaleManifest {
    let mut localized: Vec<_> = projects
      .iter()
      .filter(|entry| entry.data.lang == locale)
      .cloned()
      .collect();
    sort_projects(&mut localized);

    let project_pages = localized
      .iter()
      .map(|entry| {
        let href = format!("{}/work/{}", locale.prefix(), entry.base_slug());
        let translation_href = find_with_translation(projects, &entry.slug, locale)
          .and_then(|found| found.translation)
          .map(|translation| {
            localized_path(
              &format!("/work/{}", translation.base_slug()),
              translation.data.lang,
            )
          });
        ProjectPage {
          slug: entry.slug.clone(),
          href,
          translation_href,
        }
      })
      .collect();

    LocaleManifest {
      locale,
      home: self.page_navigation(locale, localized_path("/", locale)),
      work: self.page_navigation(locale, localized_path("/work", locale)),
      all_tags: collect_tags(&localized),
      projects: localized.iter().map(ProjectCard::from).collect(),
      project_pages,
      filter_labels: FilterLabels::resolve(&Catalog, locale),
    }
  }

  fn page_navigation(&self, locale: Locale, path: String) -> PageNavigation {
    let header = HeaderState::new(locale, path.clone()).with_cv_links(self.config.cv_paths.clone());
    PageNavigation {
      home_href: header.home_href().to_string(),
      nav_items: header.nav_items(&Catalog),
      language_links: header.language_links(),
      cv_href: header.cv_href().to_string(),
      path,
    }
  }
}

/// Write `contents` to `target`, creating parent directories.
pub fn write_manifest(target: &Path, contents: &str) -> BuildResult<()> {
  if let Some(parent) = target.parent() {
    fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  fs::write(target, contents).with_context(|| format!("failed to write {}", target.display()))
}
