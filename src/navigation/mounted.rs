use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use super::swap::{ListenerId, SwapEvents, Subscription};

/// A mounted component: its state plus the single after-swap subscription that keeps it in
/// sync.
///
/// The subscription is released when the component is unmounted or dropped, on every exit path.
#[derive(Debug)]
pub struct Mounted<S> {
  state: Rc<RefCell<S>>,
  subscription: Subscription,
}

impl<S: 'static> Mounted<S> {
  /// Mount `initial` and re-derive it with `on_swap` after every swap, passing the path read from
  /// the navigation environment.
  pub fn mount<F>(events: &SwapEvents, initial: S, on_swap: F) -> Self
  where
    F: Fn(&mut S, &str) + 'static,
  {
    let state = Rc::new(RefCell::new(initial));
    let handle = Rc::downgrade(&state);
    let subscription = events.subscribe(move |environment| {
      let Some(state) = handle.upgrade() else {
        return;
      };
      let path = environment.current_path();
      match state.try_borrow_mut() {
        Ok(mut state) => on_swap(&mut *state, &path),
        Err(_) => warn!(path = %path, "component state borrowed during swap, skipping update"),
      };
    });

    Self {
      state,
      subscription,
    }
  }

  /// Borrow the current state.
  ///
  /// Release the borrow before dispatching swaps. A swap that finds the state still borrowed is
  /// skipped and logged.
  pub fn state(&self) -> Ref<'_, S> {
    self.state.borrow()
  }

  /// Apply a local interaction to the state.
  pub fn update<R>(&self, change: impl FnOnce(&mut S) -> R) -> R {
    change(&mut self.state.borrow_mut())
  }

  /// Identifier of the handler registered at mount.
  pub fn listener_id(&self) -> ListenerId {
    self.subscription.id()
  }

  /// Tear the component down, removing its handler.
  pub fn unmount(self) {
    debug!(listener = ?self.subscription.id(), "unmounting component");
  }
}
