use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::HostError;

/// A control to be placed in the editor's toolbar region.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuControl {
  pub label: String,
  pub tooltip: String,
}

/// The host's toolbar surface.
///
/// Implementations decide where the control lands (the editor inserts it
/// before its settings group).
pub trait MenuSurface: Send + Sync {
  /// Insert a control into the toolbar.
  fn install_menu_control(&self, control: MenuControl) -> Result<(), HostError>;
}

/// A host extension: a name plus a setup hook.
///
/// Mirrors the editor's registration descriptor - setup runs once when the
/// extension is registered and typically installs UI controls.
#[async_trait]
pub trait Extension: Send + Sync {
  /// Unique extension name, e.g. "zinnia.menu.button".
  fn name(&self) -> &str;

  /// Set up the extension against the host surface.
  async fn setup(&self, surface: &dyn MenuSurface) -> Result<(), HostError>;
}

/// Tracks registered extensions and guards against double registration.
///
/// A session registers each extension name at most once: re-registering is a
/// logged no-op. A setup failure is logged and swallowed - the host keeps
/// running without the extension, and a later register call may retry.
#[derive(Default)]
pub struct ExtensionRegistrar {
  registered: Mutex<HashSet<String>>,
}

impl ExtensionRegistrar {
  /// Create a new registrar with no registered extensions.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an extension, running its setup hook.
  ///
  /// Returns `true` if setup ran and the name was recorded.
  pub async fn register(&self, surface: &dyn MenuSurface, extension: &dyn Extension) -> bool {
    let name = extension.name().to_string();

    if self.is_registered(&name) {
      debug!(extension = %name, "extension already registered");
      return false;
    }

    match extension.setup(surface).await {
      Ok(()) => {
        self.registered.lock().unwrap().insert(name);
        true
      }
      Err(e) => {
        warn!(extension = %name, error = %e, "extension setup failed");
        false
      }
    }
  }

  /// Check whether an extension name has been registered.
  pub fn is_registered(&self, name: &str) -> bool {
    self.registered.lock().unwrap().contains(name)
  }
}
