//! Built-in translation tables.
//!
//! Tables are linear `(key, value)` slices. Lookups run a handful of times per render, so a scan
//! over a few dozen keys is fine.

use super::TranslationLookup;
use crate::locale::Locale;

/// Translation catalog embedded in the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
  /// Every key known to the default locale, in table order.
  pub fn keys() -> impl Iterator<Item = &'static str> {
    ES.iter().map(|(key, _)| *key)
  }
}

impl TranslationLookup for Catalog {
  fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
    table_for(locale)
      .iter()
      .find(|(candidate, _)| *candidate == key)
      .map(|(_, value)| *value)
  }
}

fn table_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
  match locale {
    Locale::Es => ES,
    Locale::En => EN,
  }
}

const ES: &[(&str, &str)] = &[
  ("nav.home", "Inicio"),
  ("nav.work", "Proyectos"),
  ("nav.about", "Sobre mí"),
  ("nav.skills", "Habilidades"),
  ("nav.projects", "Proyectos"),
  ("nav.contact", "Contacto"),
  ("nav.downloadCV", "Descargar CV"),
  ("home.title", "Alejandro Mira — GenAI & Agentes LLM"),
  ("home.description", "Porfolio, proyectos y artículos."),
  ("site.title", "Alejandro Mira — GenAI & AI Engineer"),
  (
    "site.description",
    "Porfolio de proyectos, artículos y charlas sobre IA generativa y agentes LLM.",
  ),
  ("work.title", "Proyectos — GenAI & Agentes"),
  ("work.viewAll", "Ver todos los proyectos"),
  ("work.caseStudy", "Case Study"),
  ("work.backToProjects", "Volver a proyectos"),
  ("work.noProjects", "No hay proyectos disponibles."),
  ("work.featured", "Proyectos Destacados"),
  ("work.filterBy", "Filtrar por categoría"),
  ("work.allProjects", "Todos los proyectos"),
  ("work.clearFilters", "Limpiar filtros"),
  ("work.noResults", "No se encontraron proyectos con los filtros seleccionados"),
  ("work.searchPlaceholder", "Buscar proyectos..."),
  ("work.searchLabel", "Búsqueda"),
  ("work.clearSearch", "Limpiar búsqueda"),
  ("work.scrollLeft", "Scroll izquierda"),
  ("work.scrollRight", "Scroll derecha"),
  ("work.showing", "{visible} de {total} proyectos"),
  ("contact.cta", "¿Tienes un proyecto en mente? ¡Hablemos!"),
  ("common.readMore", "Leer más"),
  ("common.learnMore", "Saber más"),
  ("common.viewMore", "Ver más"),
  ("common.loading", "Cargando..."),
  ("date.updated", "Actualizado"),
  ("date.published", "Publicado"),
  ("project.role", "Rol"),
  ("project.tech", "Tecnologías"),
  ("project.tags", "Etiquetas"),
  ("project.links", "Enlaces"),
  ("project.demo", "Ver demo"),
  ("project.repo", "Ver código"),
  ("project.external", "Ver proyecto"),
  ("project.type", "Tipo"),
  ("project.status", "Estado"),
  ("project.duration", "Duración"),
  ("project.context", "Contexto"),
  ("project.gallery", "Galería"),
  ("project.type.web", "Web"),
  ("project.type.mobile", "Móvil"),
  ("project.type.iot", "IoT"),
  ("project.type.ai", "IA"),
  ("project.type.data", "Datos"),
  ("project.type.api", "API"),
  ("project.type.desktop", "Escritorio"),
  ("project.type.other", "Otro"),
  ("project.status.completed", "Completado"),
  ("project.status.in-progress", "En progreso"),
  ("project.status.archived", "Archivado"),
  ("project.status.maintained", "Mantenido"),
];

const EN: &[(&str, &str)] = &[
  ("nav.home", "Home"),
  ("nav.work", "Projects"),
  ("nav.about", "About"),
  ("nav.skills", "Skills"),
  ("nav.projects", "Projects"),
  ("nav.contact", "Contact"),
  ("nav.downloadCV", "Download CV"),
  ("home.title", "Alejandro Mira — GenAI & LLM Agents"),
  ("home.description", "Portfolio, projects and articles."),
  ("site.title", "Alejandro Mira — GenAI & AI Engineer"),
  (
    "site.description",
    "Portfolio of projects, articles and talks about generative AI and LLM agents.",
  ),
  ("work.title", "Projects — GenAI & Agents"),
  ("work.viewAll", "View all projects"),
  ("work.caseStudy", "Case Study"),
  ("work.backToProjects", "Back to projects"),
  ("work.noProjects", "No projects available."),
  ("work.featured", "Featured Projects"),
  ("work.filterBy", "Filter by category"),
  ("work.allProjects", "All projects"),
  ("work.clearFilters", "Clear filters"),
  ("work.noResults", "No projects found with the selected filters"),
  ("work.searchPlaceholder", "Search projects..."),
  ("work.searchLabel", "Search"),
  ("work.clearSearch", "Clear search"),
  ("work.scrollLeft", "Scroll left"),
  ("work.scrollRight", "Scroll right"),
  ("work.showing", "{visible} of {total} projects"),
  ("contact.cta", "Have a project in mind? Let's talk!"),
  ("common.readMore", "Read more"),
  ("common.learnMore", "Learn more"),
  ("common.viewMore", "View more"),
  ("common.loading", "Loading..."),
  ("date.updated", "Updated"),
  ("date.published", "Published"),
  ("project.role", "Role"),
  ("project.tech", "Technologies"),
  ("project.tags", "Tags"),
  ("project.links", "Links"),
  ("project.demo", "View demo"),
  ("project.repo", "View code"),
  ("project.external", "View project"),
  ("project.type", "Type"),
  ("project.status", "Status"),
  ("project.duration", "Duration"),
  ("project.context", "Context"),
  ("project.gallery", "Gallery"),
  ("project.type.web", "Web"),
  ("project.type.mobile", "Mobile"),
  ("project.type.iot", "IoT"),
  ("project.type.ai", "AI"),
  ("project.type.data", "Data"),
  ("project.type.api", "API"),
  ("project.type.desktop", "Desktop"),
  ("project.type.other", "Other"),
  ("project.status.completed", "Completed"),
  ("project.status.in-progress", "In progress"),
  ("project.status.archived", "Archived"),
  ("project.status.maintained", "Maintained"),
];
