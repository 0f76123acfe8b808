use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

/// Kind of a user-facing notice. Drives the banner color (error red,
/// success green).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Success,
  Error,
}

/// A banner currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
  pub kind: NoticeKind,
  pub message: String,
  /// Set when the dismissal timer has fired and the banner is fading out.
  pub fading: bool,
}

/// How long a banner stays fully visible.
const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Fade-out span between the dismissal firing and removal.
const FADE_DELAY: Duration = Duration::from_millis(300);

/// Single-slot transient banner.
///
/// `show` replaces whatever banner is visible rather than stacking, and
/// schedules a detached dismissal timer: 5 seconds visible, then a short
/// fade, then removal. Timers are fire-and-forget and not cancelable.
///
/// NOTE: every `show` call schedules its own timer, and a timer acts on
/// whatever banner is visible when it fires - not the one that scheduled it.
/// Overlapping shows therefore let an earlier call's timer remove a later
/// banner before its own five seconds are up. That interleaving is the
/// shipped behavior and is pinned by tests; changing it means changing the
/// tests first.
///
/// Must be used within a tokio runtime (dismissal uses `tokio::spawn`).
#[derive(Debug, Clone, Default)]
pub struct BannerHost {
  current: Arc<Mutex<Option<Banner>>>,
}

impl BannerHost {
  /// Create a banner host with no banner visible.
  pub fn new() -> Self {
    Self::default()
  }

  /// Show a banner, replacing any visible one, and schedule its dismissal.
  pub fn show(&self, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();

    {
      let mut slot = self.current.lock().unwrap();
      *slot = Some(Banner {
        kind,
        message,
        fading: false,
      });
    }

    let slot = Arc::clone(&self.current);
    tokio::spawn(async move {
      sleep(DISMISS_AFTER).await;
      if let Some(banner) = slot.lock().unwrap().as_mut() {
        banner.fading = true;
      }

      sleep(FADE_DELAY).await;
      slot.lock().unwrap().take();
    });
  }

  /// The banner currently visible, if any.
  pub fn current(&self) -> Option<Banner> {
    self.current.lock().unwrap().clone()
  }

  /// Whether any banner is visible.
  pub fn is_visible(&self) -> bool {
    self.current.lock().unwrap().is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(start_paused = true)]
  async fn test_show_then_auto_dismiss() {
    let banners = BannerHost::new();
    banners.show(NoticeKind::Success, "Deployment initiated successfully!");

    let banner = banners.current().unwrap();
    assert_eq!(banner.kind, NoticeKind::Success);
    assert!(!banner.fading);

    // Past the dismissal point but inside the fade window.
    sleep(DISMISS_AFTER + Duration::from_millis(100)).await;
    assert!(banners.current().unwrap().fading);

    // Past the fade window: gone.
    sleep(FADE_DELAY).await;
    assert!(!banners.is_visible());
  }

  #[tokio::test(start_paused = true)]
  async fn test_second_show_replaces_not_stacks() {
    let banners = BannerHost::new();
    banners.show(NoticeKind::Error, "quota exceeded");
    banners.show(NoticeKind::Success, "started");

    let banner = banners.current().unwrap();
    assert_eq!(banner.kind, NoticeKind::Success);
    assert_eq!(banner.message, "started");
  }

  #[tokio::test(start_paused = true)]
  async fn test_earlier_timer_removes_later_banner() {
    // Pins the overlapping-show interleaving: the first show's timer fires
    // five seconds after the FIRST show and removes whatever is visible,
    // even a banner shown later.
    let banners = BannerHost::new();
    banners.show(NoticeKind::Error, "first");

    sleep(Duration::from_secs(2)).await;
    banners.show(NoticeKind::Success, "second");

    // t = 5.4s: first timer has fired (5s) and finished its fade (5.3s).
    // The second banner's own timer would not fire until t = 7s.
    sleep(Duration::from_secs(3) + Duration::from_millis(400)).await;
    assert!(!banners.is_visible());
  }
}
