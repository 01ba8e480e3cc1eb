//! After-swap notifications with scoped subscriptions.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::environment::NavigationEnvironment;

type Handler = Rc<dyn Fn(&dyn NavigationEnvironment)>;

/// Identifier of a registered after-swap handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
  next_id: u64,
  handlers: Vec<(ListenerId, Handler)>,
}

impl Registry {
  fn contains(&self, id: ListenerId) -> bool {
    self.handlers.iter().any(|(candidate, _)| *candidate == id)
  }
}

/// Source of "after swap" notifications fired once per completed in-place navigation.
///
/// Cloning yields another handle to the same set of handlers.
#[derive(Clone, Default)]
pub struct SwapEvents {
  registry: Rc<RefCell<Registry>>,
}

impl SwapEvents {
  /// Create an event source with no handlers.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `handler` until the returned guard is dropped.
  pub fn subscribe<F>(&self, handler: F) -> Subscription
  where
    F: Fn(&dyn NavigationEnvironment) + 'static,
  {
    let mut registry = self.registry.borrow_mut();
    let id = ListenerId(registry.next_id);
    registry.next_id += 1;
    registry.handlers.push((id, Rc::new(handler)));
    debug!(listener = id.0, total = registry.handlers.len(), "after-swap listener added");

    Subscription {
      id,
      registry: Rc::downgrade(&self.registry),
    }
  }

  /// Notify every live handler that the page content was swapped. Returns how many ran.
  ///
  /// Handlers removed by an earlier handler in the same dispatch are skipped.
  pub fn dispatch(&self, environment: &dyn NavigationEnvironment) -> usize {
    let snapshot: Vec<(ListenerId, Handler)> = self.registry.borrow().handlers.clone();
    let mut invoked = 0;

    for (id, handler) in snapshot {
      if !self.registry.borrow().contains(id) {
        continue;
      }
      handler(environment);
      invoked += 1;
    }

    debug!(invoked, "after-swap dispatched");
    invoked
  }

  /// Number of registered handlers.
  pub fn listener_count(&self) -> usize {
    self.registry.borrow().handlers.len()
  }

  /// Whether the handler identified by `id` is still registered.
  pub fn is_registered(&self, id: ListenerId) -> bool {
    self.registry.borrow().contains(id)
  }
}

impl fmt::Debug for SwapEvents {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SwapEvents")
      .field("listeners", &self.listener_count())
      .finish()
  }
}

/// Guard owning one registered handler. Dropping it removes exactly that handler.
#[must_use = "dropping the subscription removes the handler immediately"]
#[derive(Debug)]
pub struct Subscription {
  id: ListenerId,
  registry: Weak<RefCell<Registry>>,
}

impl Subscription {
  /// Identifier of the handler this guard owns.
  pub fn id(&self) -> ListenerId {
    self.id
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    let Some(registry) = self.registry.upgrade() else {
      return;
    };
    let mut registry = registry.borrow_mut();
    registry.handlers.retain(|(candidate, _)| *candidate != self.id);
    debug!(listener = self.id.0, total = registry.handlers.len(), "after-swap listener removed");
  }
}
