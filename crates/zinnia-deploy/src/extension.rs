use async_trait::async_trait;

use zinnia_host::{Extension, HostError, MenuControl, MenuSurface};

/// Registered extension name.
pub const EXTENSION_NAME: &str = "zinnia.menu.button";

/// The editor-facing entry point: an extension whose setup installs the
/// "Deploy" control in the toolbar. Registered through the host's
/// [`zinnia_host::ExtensionRegistrar`], which keeps it to once per session.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuButtonExtension;

#[async_trait]
impl Extension for MenuButtonExtension {
  fn name(&self) -> &str {
    EXTENSION_NAME
  }

  async fn setup(&self, surface: &dyn MenuSurface) -> Result<(), HostError> {
    surface.install_menu_control(MenuControl {
      label: "Deploy".to_string(),
      tooltip: "Deploy the current workflow".to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;
  use zinnia_host::ExtensionRegistrar;

  #[derive(Default)]
  struct RecordingSurface {
    installed: Mutex<Vec<MenuControl>>,
  }

  impl MenuSurface for RecordingSurface {
    fn install_menu_control(&self, control: MenuControl) -> Result<(), HostError> {
      self.installed.lock().unwrap().push(control);
      Ok(())
    }
  }

  #[tokio::test]
  async fn test_installs_deploy_control_once() {
    let registrar = ExtensionRegistrar::new();
    let surface = RecordingSurface::default();

    assert!(registrar.register(&surface, &MenuButtonExtension).await);
    assert!(!registrar.register(&surface, &MenuButtonExtension).await);

    let installed = surface.installed.lock().unwrap();
    assert_eq!(installed.len(), 1);
    assert_eq!(installed[0].label, "Deploy");
  }
}
