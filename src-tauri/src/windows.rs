use std::path::PathBuf;

use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use taskswitch_core::{HostError, UiEvent, WindowHost, WindowKind, WindowSpec};

/// Window operations backed by Tauri webview windows, addressed by label.
pub struct TauriWindows {
    app_handle: AppHandle,
}

impl TauriWindows {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }

    fn window(&self, kind: WindowKind) -> Result<WebviewWindow, HostError> {
        self.app_handle
            .get_webview_window(kind.label())
            .ok_or(HostError::Missing(kind))
    }
}

impl WindowHost for TauriWindows {
    fn create(&mut self, spec: &WindowSpec) -> Result<(), HostError> {
        WebviewWindowBuilder::new(
            &self.app_handle,
            spec.kind.label(),
            WebviewUrl::App(PathBuf::from(spec.document)),
        )
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .decorations(!spec.frameless)
        .transparent(spec.transparent)
        .always_on_top(spec.always_on_top)
        .visible(false)
        .build()
        .map_err(HostError::backend)?;
        Ok(())
    }

    fn show(&mut self, kind: WindowKind) -> Result<(), HostError> {
        let window = self.window(kind)?;
        window.show().map_err(HostError::backend)?;
        window.unminimize().map_err(HostError::backend)
    }

    fn focus(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.window(kind)?.set_focus().map_err(HostError::backend)
    }

    fn hide(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.window(kind)?.hide().map_err(HostError::backend)
    }

    fn minimize(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.window(kind)?.minimize().map_err(HostError::backend)
    }

    fn close(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.window(kind)?.destroy().map_err(HostError::backend)
    }

    fn emit(&mut self, kind: WindowKind, event: UiEvent) -> Result<(), HostError> {
        self.app_handle
            .emit_to(kind.label(), event.name(), ())
            .map_err(HostError::backend)
    }
}
