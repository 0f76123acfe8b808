//! Deploy run events and observers.
//!
//! The orchestrator emits events; UI layers derive their control state from
//! them. The projection here mirrors the deploy modal: submit button,
//! progress indicator, status line.

use std::sync::atomic::{AtomicBool, Ordering};

use zinnia_notify::{NoticeKind, StatusLine, StatusMessage};

use crate::orchestrator::DeployOutcome;

/// Status text shown while a run is in flight.
const DEPLOYING_TEXT: &str =
  "Deploying... This will take a while, don't close this window. You can check the progress on your Creator Dashboard.";

/// Events emitted during a deploy run.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
  /// A run has begun: submit locked, progress shown.
  RunStarted,

  /// The run produced an outcome.
  RunCompleted { outcome: DeployOutcome },

  /// The run is over, on every exit path: submit unlocked, progress hidden.
  RunFinished,
}

/// Trait for receiving deploy events.
///
/// The orchestrator calls `notify` for each event - implementations decide
/// what to do with them (drive a modal, log, ignore).
pub trait DeployObserver: Send + Sync {
  /// Called when a deploy event occurs.
  fn notify(&self, event: DeployEvent);
}

/// A no-op observer that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl DeployObserver for NoopObserver {
  fn notify(&self, _event: DeployEvent) {
    // Intentionally empty
  }
}

/// Modal control state, derived purely from deploy events.
#[derive(Debug, Default)]
pub struct ModalProjection {
  submit_locked: AtomicBool,
  progress_visible: AtomicBool,
  status: StatusLine,
}

impl ModalProjection {
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether the submit control accepts clicks.
  pub fn submit_enabled(&self) -> bool {
    !self.submit_locked.load(Ordering::Acquire)
  }

  /// Whether the progress indicator is shown.
  pub fn progress_visible(&self) -> bool {
    self.progress_visible.load(Ordering::Acquire)
  }

  /// The status line content, if visible.
  pub fn status(&self) -> Option<StatusMessage> {
    self.status.current()
  }
}

impl DeployObserver for ModalProjection {
  fn notify(&self, event: DeployEvent) {
    match event {
      DeployEvent::RunStarted => {
        self.submit_locked.store(true, Ordering::Release);
        self.progress_visible.store(true, Ordering::Release);
        self.status.set_progress(DEPLOYING_TEXT);
      }
      DeployEvent::RunCompleted { outcome } => {
        let kind = if outcome.is_success() {
          NoticeKind::Success
        } else {
          NoticeKind::Error
        };
        self.status.set_outcome(kind, outcome.message());
      }
      DeployEvent::RunFinished => {
        self.submit_locked.store(false, Ordering::Release);
        self.progress_visible.store(false, Ordering::Release);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_projection_follows_run_lifecycle() {
    let projection = ModalProjection::new();
    assert!(projection.submit_enabled());
    assert!(!projection.progress_visible());
    assert!(projection.status().is_none());

    projection.notify(DeployEvent::RunStarted);
    assert!(!projection.submit_enabled());
    assert!(projection.progress_visible());
    assert_eq!(projection.status().unwrap().kind, None);

    projection.notify(DeployEvent::RunCompleted {
      outcome: DeployOutcome::Failure {
        message: "quota exceeded".to_string(),
      },
    });
    let status = projection.status().unwrap();
    assert_eq!(status.kind, Some(NoticeKind::Error));
    assert_eq!(status.text, "quota exceeded");

    projection.notify(DeployEvent::RunFinished);
    assert!(projection.submit_enabled());
    assert!(!projection.progress_visible());
    // The outcome text stays after the controls unlock.
    assert!(projection.status().is_some());
  }
}
