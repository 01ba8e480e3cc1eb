//! Site configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::navigation::CvLinks;

/// File searched for in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "site.config.json";

/// Discoverable site configuration describing content layout and output paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
  /// Canonical site origin.
  pub site_url: String,
  /// Content root relative to the project root.
  pub content_dir: String,
  /// Downloadable CV per locale.
  pub cv_paths: CvLinks,
  /// Where the generated site manifest is written, relative to the project root.
  pub manifest_path: String,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      site_url: "https://alejandromira.com".into(),
      content_dir: "src/content".into(),
      cv_paths: CvLinks::default(),
      manifest_path: "target/site_manifest.json".into(),
    }
  }
}

impl SiteConfig {
  /// Load the configuration from `root`, falling back to defaults.
  ///
  /// A missing file is expected. A file that cannot be parsed is reported and ignored so that
  /// builds keep working with the defaults.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      debug!(path = %candidate.display(), "no site config, using defaults");
      return Self::default();
    }
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(err) => {
        warn!(path = %path.display(), "failed to read site config: {err}");
        return None;
      }
    };
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        warn!(path = %path.display(), "failed to parse site config: {err}");
        None
      }
    }
  }

  /// Absolute content root for a project rooted at `root`.
  pub fn content_dir_path(&self, root: &Path) -> PathBuf {
    root.join(&self.content_dir)
  }

  /// Absolute manifest output path for a project rooted at `root`.
  pub fn manifest_output_path(&self, root: &Path) -> PathBuf {
    root.join(&self.manifest_path)
  }
}
