//! Supported site locales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A locale served by the site.
///
/// Spanish is the default locale and is served without a path prefix. Every other locale lives
/// under `/{code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  /// Spanish, the unprefixed default.
  Es,
  /// English, served under `/en`.
  En,
}

impl Default for Locale {
  fn default() -> Self {
    Locale::DEFAULT
  }
}

impl Locale {
  /// Locale served without a path prefix.
  pub const DEFAULT: Locale = Locale::Es;

  /// Every supported locale in switcher order.
  pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

  /// Two-letter code used in URLs and content directories.
  pub fn code(self) -> &'static str {
    match self {
      Locale::Es => "es",
      Locale::En => "en",
    }
  }

  /// Short uppercase label rendered by the language switcher.
  pub fn label(self) -> &'static str {
    match self {
      Locale::Es => "ES",
      Locale::En => "EN",
    }
  }

  /// Language name in its own language.
  pub fn native_name(self) -> &'static str {
    match self {
      Locale::Es => "Español",
      Locale::En => "English",
    }
  }

  /// Parse a two-letter code. Codes are case-sensitive.
  pub fn from_code(code: &str) -> Option<Locale> {
    match code {
      "es" => Some(Locale::Es),
      "en" => Some(Locale::En),
      _ => None,
    }
  }

  /// Whether this is the unprefixed default locale.
  pub fn is_default(self) -> bool {
    self == Locale::DEFAULT
  }

  /// Path prefix for links in this locale: empty for the default locale, `/{code}` otherwise.
  pub fn prefix(self) -> &'static str {
    match self {
      Locale::Es => "",
      Locale::En => "/en",
    }
  }

  /// The locale that is not `self`.
  pub fn other(self) -> Locale {
    match self {
      Locale::Es => Locale::En,
      Locale::En => Locale::Es,
    }
  }

  /// Derive the locale of a path after an in-place navigation.
  ///
  /// A path starting with a locale's prefix belongs to that locale, so `/en`, `/en/work` and
  /// `/english-notes` are all English. Every other path belongs to the default locale.
  pub fn from_path(path: &str) -> Locale {
    Locale::ALL
      .into_iter()
      .find(|locale| !locale.is_default() && path.starts_with(locale.prefix()))
      .unwrap_or(Locale::DEFAULT)
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl std::str::FromStr for Locale {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Locale::from_code(value.trim()).ok_or_else(|| format!("unsupported locale '{value}'"))
  }
}
