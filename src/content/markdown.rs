//! Markdown parsing helpers for content entries.

use std::fs;
use std::path::Path;

use gray_matter::{Matter, engine::YAML};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};
use serde::de::DeserializeOwned;

use super::ContentError;

fn markdown_options() -> Options {
  let mut options = Options::empty();
  options.insert(Options::ENABLE_TABLES);
  options.insert(Options::ENABLE_FOOTNOTES);
  options.insert(Options::ENABLE_STRIKETHROUGH);
  options.insert(Options::ENABLE_TASKLISTS);
  options.insert(Options::ENABLE_SMART_PUNCTUATION);
  options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
  options
}

/// Read a content file and split it into typed frontmatter and the markdown body.
pub fn parse_entry_markdown<T: DeserializeOwned>(path: &Path) -> Result<(T, String), ContentError> {
  let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse_entry_str(path, &content)
}

/// Split already loaded file contents. `path` is only used for error reporting.
pub fn parse_entry_str<T: DeserializeOwned>(
  path: &Path,
  content: &str,
) -> Result<(T, String), ContentError> {
  let matter = Matter::<YAML>::new();
  let parsed = matter
    .parse(content)
    .map_err(|err| ContentError::Frontmatter {
      path: path.to_path_buf(),
      message: err.to_string(),
    })?;

  let yaml = parsed
    .data
    .ok_or_else(|| ContentError::MissingFrontmatter {
      path: path.to_path_buf(),
    })?;
  let data = serde_yaml::from_value::<T>(yaml).map_err(|source| ContentError::Schema {
    path: path.to_path_buf(),
    source,
  })?;

  Ok((data, parsed.content))
}

/// Render a markdown body to HTML.
pub fn render_html(body: &str) -> String {
  let parser = Parser::new_ext(body, markdown_options());
  let mut output = String::with_capacity(body.len() * 3 / 2);
  html::push_html(&mut output, parser);
  output
}

/// Text of the first non-empty heading in `body`.
pub fn first_heading(body: &str) -> Option<String> {
  let parser = Parser::new_ext(body, markdown_options());
  let mut in_heading = false;
  let mut heading_text = String::new();

  for event in parser {
    match event {
      Event::Start(Tag::Heading { .. }) => {
        in_heading = true;
        heading_text.clear();
      }
      Event::End(TagEnd::Heading(_)) => {
        if in_heading && !heading_text.trim().is_empty() {
          return Some(heading_text.trim().to_string());
        }
        in_heading = false;
      }
      Event::Text(text) | Event::Code(text) if in_heading => {
        heading_text.push_str(&text);
      }
      _ => {}
    }
  }

  None
}
