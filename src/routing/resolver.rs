use crate::locale::Locale;

/// Split a leading locale segment off `path`.
///
/// Only a whole `/{code}` segment counts: `/en` and `/en/work` carry a prefix, `/energy` does
/// not. The remainder always starts with `/`.
pub fn strip_locale_prefix(path: &str) -> (Option<Locale>, &str) {
  for locale in Locale::ALL {
    let code = locale.code();
    let Some(rest) = path
      .strip_prefix('/')
      .and_then(|value| value.strip_prefix(code))
    else {
      continue;
    };

    if rest.is_empty() {
      return (Some(locale), "/");
    }
    if rest.starts_with('/') {
      return (Some(locale), rest);
    }
  }

  (None, path)
}

/// Produce the href that shows the page at `current_path` in `target`.
///
/// The default locale's home is `/` and the prefixed locale's home is `/{code}/`. Paths without
/// a locale segment are treated as default-locale paths. Resolving an already resolved path
/// yields the same string.
pub fn localized_path(current_path: &str, target: Locale) -> String {
  let (_, stripped) = strip_locale_prefix(current_path);
  let stripped = if stripped.is_empty() { "/" } else { stripped };

  if target.is_default() {
    stripped.to_string()
  } else {
    format!("/{}{}", target.code(), stripped)
  }
}
