use std::sync::atomic::{AtomicBool, Ordering};

use crate::events::{DeployEvent, DeployObserver};

/// Whether a deploy run is active.
///
/// Acquisition is a compare-and-swap, so two tasks racing for a run cannot
/// both win even on a multi-threaded runtime. The winner gets a [`RunGuard`];
/// everyone else learns a run is already active and backs off.
#[derive(Debug, Default)]
pub struct RunState {
  deploying: AtomicBool,
}

impl RunState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether a run currently holds the guard.
  pub fn is_deploying(&self) -> bool {
    self.deploying.load(Ordering::Acquire)
  }

  /// Try to begin a run. Returns `None` when one is already active, without
  /// touching any other state.
  pub fn try_begin<'a>(&'a self, observer: &'a dyn DeployObserver) -> Option<RunGuard<'a>> {
    self
      .deploying
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .ok()
      .map(|_| RunGuard {
        state: self,
        observer,
      })
  }
}

/// Clears the deploying flag and restores the UI when dropped.
///
/// Dropping emits [`DeployEvent::RunFinished`], which re-enables the submit
/// control and hides the progress indicator. Because this happens in `Drop`,
/// it runs on every exit path out of a run.
pub struct RunGuard<'a> {
  state: &'a RunState,
  observer: &'a dyn DeployObserver,
}

impl Drop for RunGuard<'_> {
  fn drop(&mut self) {
    self.state.deploying.store(false, Ordering::Release);
    self.observer.notify(DeployEvent::RunFinished);
  }
}
