//! Zinnia Notify
//!
//! Notification state for the deploy flow. Nothing here draws pixels - these
//! types hold what a UI layer renders: a single transient banner slot with
//! timed dismissal, and the modal status line. UI frameworks (or tests)
//! observe the state; the deploy orchestrator mutates it.

mod banner;
mod status;

pub use banner::{Banner, BannerHost, NoticeKind};
pub use status::{StatusLine, StatusMessage};
