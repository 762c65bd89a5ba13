use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutEvent, ShortcutState};
use taskswitch_core::{Accelerator, HotkeyError, ShortcutHost};

use crate::state::AppState;

/// Global shortcuts through the Tauri plugin. Ids are the plugin's hotkey ids,
/// which is what the plugin hands back when a shortcut fires.
pub struct TauriShortcuts {
    app_handle: AppHandle,
}

impl TauriShortcuts {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ShortcutHost for TauriShortcuts {
    type Id = u32;

    fn register(&mut self, accelerator: &Accelerator) -> Result<u32, HotkeyError> {
        let literal = accelerator.to_string();
        let shortcut: Shortcut = literal
            .parse()
            .map_err(|err| HotkeyError::Backend(format!("{literal}: {err}")))?;

        self.app_handle
            .global_shortcut()
            .register(shortcut)
            .map_err(|err| HotkeyError::Unavailable {
                accelerator: literal,
                reason: err.to_string(),
            })?;
        Ok(shortcut.id())
    }

    fn unregister_all(&mut self) -> Result<(), HotkeyError> {
        self.app_handle
            .global_shortcut()
            .unregister_all()
            .map_err(|err| HotkeyError::Backend(err.to_string()))
    }
}

/// Plugin-wide shortcut handler: every registered shortcut lands here.
pub fn on_shortcut(app_handle: &AppHandle, shortcut: &Shortcut, event: ShortcutEvent) {
    if event.state != ShortcutState::Pressed {
        return;
    }

    let Some(state) = app_handle.try_state::<AppState>() else {
        return;
    };
    if let Err(err) = state.with_controller(|controller| controller.on_hotkey(&shortcut.id())) {
        log::warn!("failed to dispatch shortcut {shortcut:?}: {err}");
    }
}
