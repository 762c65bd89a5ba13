use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;
use taskswitch_core::{Notifier, NotifyError};

pub struct TauriNotifier {
    app_handle: AppHandle,
}

impl TauriNotifier {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl Notifier for TauriNotifier {
    fn notify(&mut self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.app_handle
            .notification()
            .builder()
            .title(title)
            .body(body)
            .show()
            .map_err(|err| NotifyError(err.to_string()))
    }
}
