use std::sync::Mutex;

use crate::banner::NoticeKind;

/// The modal's status line content.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
  /// Outcome color, if any. `None` renders in the neutral progress color.
  pub kind: Option<NoticeKind>,
  pub text: String,
}

/// In-modal status line.
///
/// Hidden while `current` is `None`; shows a neutral progress message during
/// a run and the colored outcome message after it. Unlike the banner there
/// is no auto-dismiss - the text stays until replaced or cleared.
#[derive(Debug, Default)]
pub struct StatusLine {
  current: Mutex<Option<StatusMessage>>,
}

impl StatusLine {
  /// Create a hidden status line.
  pub fn new() -> Self {
    Self::default()
  }

  /// Show a neutral progress message.
  pub fn set_progress(&self, text: impl Into<String>) {
    *self.current.lock().unwrap() = Some(StatusMessage {
      kind: None,
      text: text.into(),
    });
  }

  /// Show a colored outcome message.
  pub fn set_outcome(&self, kind: NoticeKind, text: impl Into<String>) {
    *self.current.lock().unwrap() = Some(StatusMessage {
      kind: Some(kind),
      text: text.into(),
    });
  }

  /// Hide the status line.
  pub fn clear(&self) {
    self.current.lock().unwrap().take();
  }

  /// The current message, if visible.
  pub fn current(&self) -> Option<StatusMessage> {
    self.current.lock().unwrap().clone()
  }

  /// Whether the status line is visible.
  pub fn is_visible(&self) -> bool {
    self.current.lock().unwrap().is_some()
  }
}
