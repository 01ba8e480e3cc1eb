//! Queries over the loaded project collection.

use std::collections::BTreeSet;

use super::strip_lang_prefix;
use crate::filter::ProjectCard;
use crate::locale::Locale;
use crate::models::{ContentEntry, ProjectFrontmatter};

type ProjectEntry = ContentEntry<ProjectFrontmatter>;

/// A project together with its counterpart in the other locale, if any.
#[derive(Debug, Clone, Copy)]
pub struct TranslatedProject<'a> {
  /// The project in the requested locale.
  pub project: &'a ProjectEntry,
  /// The same project in the other locale.
  pub translation: Option<&'a ProjectEntry>,
}

/// Look up `slug` in `lang` and pair it with its translation.
///
/// `slug` may carry a locale directory (`es/cookobot`); only its base is used. The translation is
/// the entry in the other locale sharing the project's translation key (its base slug when no key
/// is set) or the same base slug.
pub fn find_with_translation<'a>(
  projects: &'a [ProjectEntry],
  slug: &str,
  lang: Locale,
) -> Option<TranslatedProject<'a>> {
  let base = strip_lang_prefix(slug);
  let full_slug = format!("{}/{}", lang.code(), base);
  let project = projects.iter().find(|entry| entry.slug == full_slug)?;

  let key = project.data.translation_key.as_deref().unwrap_or(base);
  let other = lang.other();
  let translation = projects.iter().find(|entry| {
    entry.data.lang == other
      && (entry.data.translation_key.as_deref() == Some(key) || entry.base_slug() == base)
  });

  Some(TranslatedProject {
    project,
    translation,
  })
}

/// Order projects for listing: featured first, then by priority, newest first on ties.
pub fn sort_projects(projects: &mut [ProjectEntry]) {
  projects.sort_by(|a, b| {
    b.data
      .featured
      .cmp(&a.data.featured)
      .then_with(|| b.data.priority.cmp(&a.data.priority))
      .then_with(|| b.data.date.cmp(&a.data.date))
      .then_with(|| a.slug.cmp(&b.slug))
  });
}

/// Sorted, de-duplicated union of every project's tags.
pub fn collect_tags<'a>(projects: impl IntoIterator<Item = &'a ProjectEntry>) -> Vec<String> {
  projects
    .into_iter()
    .flat_map(|entry| entry.data.tags.iter().cloned())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

impl From<&ProjectEntry> for ProjectCard {
  fn from(entry: &ProjectEntry) -> Self {
    ProjectCard::new(
      entry.slug.clone(),
      entry.data.tags.iter().cloned(),
      entry.data.title.clone(),
      entry.data.summary.clone(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{ImageRef, ProjectLinks, ProjectStatus, ProjectType, SeoOverrides};

  fn entry(slug: &str, lang: Locale, key: Option<&str>) -> ProjectEntry {
    ContentEntry {
      slug: slug.to_string(),
      data: ProjectFrontmatter {
        title: slug.to_string(),
        summary: format!("Summary of {slug}"),
        date: "2024-01-01".into(),
        updated: None,
        tags: Vec::new(),
        tech: Vec::new(),
        role: None,
        lang,
        translation_key: key.map(str::to_string),
        project_type: ProjectType::default(),
        status: ProjectStatus::default(),
        duration: None,
        featured: false,
        priority: 5,
        links: ProjectLinks::default(),
        cover: ImageRef::default(),
        gallery: None,
        seo: SeoOverrides::default(),
      },
      body: String::new(),
    }
  }

  #[test]
  fn pairs_translations_by_slug() {
    let projects = vec![
      entry("es/cookobot", Locale::Es, None),
      entry("en/cookobot", Locale::En, None),
    ];

    let found = find_with_translation(&projects, "es/cookobot", Locale::Es).expect("found");
    assert_eq!(found.project.slug, "es/cookobot");
    assert_eq!(found.translation.map(|entry| entry.slug.as_str()), Some("en/cookobot"));

    let found = find_with_translation(&projects, "cookobot", Locale::En).expect("found");
    assert_eq!(found.translation.map(|entry| entry.slug.as_str()), Some("es/cookobot"));
  }

  #[test]
  fn pairs_translations_by_key() {
    let projects = vec![
      entry("es/asistente", Locale::Es, Some("assistant")),
      entry("en/assistant-bot", Locale::En, Some("assistant")),
      entry("en/other", Locale::En, None),
    ];

    let found = find_with_translation(&projects, "asistente", Locale::Es).expect("found");
    assert_eq!(found.translation.map(|entry| entry.slug.as_str()), Some("en/assistant-bot"));
  }

  #[test]
  fn missing_project_or_translation() {
    let projects = vec![entry("es/solo", Locale::Es, None)];
    assert!(find_with_translation(&projects, "nope", Locale::Es).is_none());
    let found = find_with_translation(&projects, "solo", Locale::Es).expect("found");
    assert!(found.translation.is_none());
  }

  #[test]
  fn sorts_featured_then_priority_then_date() {
    let mut low = entry("es/low", Locale::Es, None);
    low.data.priority = 2;
    let mut featured = entry("es/featured", Locale::Es, None);
    featured.data.featured = true;
    featured.data.priority = 1;
    let mut newer = entry("es/newer", Locale::Es, None);
    newer.data.date = "2025-01-01".into();
    let older = entry("es/older", Locale::Es, None);

    let mut projects = vec![low, older, newer, featured];
    sort_projects(&mut projects);

    let order: Vec<&str> = projects.iter().map(|entry| entry.slug.as_str()).collect();
    assert_eq!(order, vec!["es/featured", "es/newer", "es/older", "es/low"]);
  }

  #[test]
  fn collects_unique_sorted_tags() {
    let mut a = entry("es/a", Locale::Es, None);
    a.data.tags = vec!["web".into(), "ai".into()];
    let mut b = entry("es/b", Locale::Es, None);
    b.data.tags = vec!["ai".into(), "mobile".into()];

    assert_eq!(collect_tags(&[a, b]), vec!["ai", "mobile", "web"]);
  }

  #[test]
  fn converts_entries_into_cards() {
    let mut project = entry("es/a", Locale::Es, None);
    project.data.tags = vec!["ai".into()];
    let card = ProjectCard::from(&project);
    assert_eq!(card.id, "es/a");
    assert_eq!(card.tags_attribute(), "ai");
    assert_eq!(card.summary, "Summary of es/a");
  }
}
