use std::cell::RefCell;

/// Read-only view of the navigation environment.
///
/// Components re-read the path through this trait after every in-place swap instead of
/// consulting a global location object.
pub trait NavigationEnvironment {
  /// Path component of the current location, always starting with `/`.
  fn current_path(&self) -> String;
}

/// In-memory location that can be moved between navigations.
#[derive(Debug, Clone)]
pub struct StaticLocation {
  path: RefCell<String>,
}

impl StaticLocation {
  /// Location positioned at `path`. An empty path is stored as `/`.
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: RefCell::new(normalise(path.into())),
    }
  }

  /// Move the location to `path`.
  pub fn navigate(&self, path: impl Into<String>) {
    *self.path.borrow_mut() = normalise(path.into());
  }
}

impl Default for StaticLocation {
  fn default() -> Self {
    Self::new("/")
  }
}

impl NavigationEnvironment for StaticLocation {
  fn current_path(&self) -> String {
    self.path.borrow().clone()
  }
}

fn normalise(path: String) -> String {
  if path.starts_with('/') {
    path
  } else {
    format!("/{path}")
  }
}
