use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use portfolio_site::builder::{SiteBuilder, write_manifest};
use portfolio_site::config::SiteConfig;
use portfolio_site::content::{ContentStore, collect_tags, sort_projects};
use portfolio_site::filter::{ProjectCard, ProjectFilter};
use portfolio_site::i18n::Catalog;
use portfolio_site::logging;
use portfolio_site::navigation::HeaderState;
use portfolio_site::{Locale, localized_path};

#[derive(Debug, Parser)]
#[command(name = "portfolio-site", version, about = "Bilingual portfolio site tooling")]
struct Cli {
  /// Enable debug logging.
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the equivalent of a path in another locale.
  Resolve {
    path: String,
    #[arg(long)]
    locale: Locale,
  },
  /// Print the header navigation derived from a path.
  Nav { path: String },
  /// Run the project filter over the content collection.
  Filter {
    #[arg(long, default_value = ".")]
    root: PathBuf,
    #[arg(long, default_value = "es")]
    locale: Locale,
    #[arg(long)]
    query: Option<String>,
    /// Selected tag; repeat to select several.
    #[arg(long = "tag")]
    tags: Vec<String>,
  },
  /// Build the site manifest.
  Manifest {
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Output file; defaults to the configured manifest path.
    #[arg(long)]
    out: Option<PathBuf>,
  },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterReport<'a> {
  summary: String,
  empty: bool,
  visible: Vec<&'a str>,
  available_tags: &'a [String],
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init_cli_logger(cli.verbose);
  tracing::debug!(?cli, "parsed arguments");

  match cli.command {
    Command::Resolve { path, locale } => println!("{}", localized_path(&path, locale)),
    Command::Nav { path } => {
      let header = HeaderState::new(Locale::from_path(&path), path);
      let report = serde_json::json!({
        "homeHref": header.home_href(),
        "navItems": header.nav_items(&Catalog),
        "languageLinks": header.language_links(),
        "menuButton": header.menu_button_aria(),
      });
      println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Command::Filter {
      root,
      locale,
      query,
      tags,
    } => {
      let config = SiteConfig::discover(&root);
      let store = ContentStore::new(config.content_dir_path(&root));
      let mut projects = store
        .projects_by_lang(locale)
        .context("failed to load projects")?;
      sort_projects(&mut projects);

      let cards = projects.iter().map(ProjectCard::from).collect();
      let mut filter = ProjectFilter::new(collect_tags(&projects), cards);
      if let Some(query) = query {
        filter.set_query(query);
      }
      for tag in &tags {
        filter.toggle_tag(tag);
      }

      let outcome = filter.outcome();
      let report = FilterReport {
        summary: filter.summary().render(&Catalog, locale),
        empty: filter.shows_empty_state(),
        visible: outcome.visible_ids().collect(),
        available_tags: &outcome.available_tags,
      };
      println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Command::Manifest { root, out } => {
      let config = SiteConfig::discover(&root);
      let builder = SiteBuilder::new(&root, &config);
      let artifacts = builder.build()?;
      let target = match out {
        Some(out) => {
          write_manifest(&out, &artifacts.manifest_json)?;
          out
        }
        None => builder.write(&artifacts)?,
      };
      tracing::info!(path = %target.display(), "manifest written");
      println!("{}", target.display());
    }
  }

  Ok(())
}
