use std::sync::Mutex;

use tauri::AppHandle;

use crate::{hotkey::TauriShortcuts, notify::TauriNotifier, windows::TauriWindows};

pub type Controller = taskswitch_core::Controller<TauriWindows, TauriShortcuts, TauriNotifier>;

/// Managed state. The mutex serializes every handler, so each one runs to
/// completion against the controller before the next.
pub struct AppState {
    controller: Mutex<Controller>,
}

impl AppState {
    pub fn new(app_handle: &AppHandle) -> Self {
        Self {
            controller: Mutex::new(Controller::new(
                TauriWindows::new(app_handle.clone()),
                TauriShortcuts::new(app_handle.clone()),
                TauriNotifier::new(app_handle.clone()),
            )),
        }
    }

    pub fn with_controller<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Result<T, String> {
        let mut guard = self
            .controller
            .lock()
            .map_err(|_| "controller state is poisoned".to_string())?;
        Ok(f(&mut *guard))
    }
}
