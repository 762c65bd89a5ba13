use log::{debug, info, warn};

use crate::{
    hotkey::{HotkeyDispatcher, RebuildReport, ShortcutHost},
    notify::Notifier,
    relay::{UiReply, UiRequest, SETTINGS_SAVED_MESSAGE},
    settings::Settings,
    window::{WindowHost, WindowKind, WindowRegistry},
    NOTIFICATION_TITLE,
};

/// Owns all mutable application state. Every entry point runs to completion
/// before the next one starts; the shell serializes access.
pub struct Controller<W: WindowHost, S: ShortcutHost, N: Notifier> {
    windows: WindowRegistry<W>,
    hotkeys: HotkeyDispatcher<S>,
    notifier: N,
    settings: Settings,
}

impl<W: WindowHost, S: ShortcutHost, N: Notifier> Controller<W, S, N> {
    pub fn new(windows: W, shortcuts: S, notifier: N) -> Self {
        Self {
            windows: WindowRegistry::new(windows),
            hotkeys: HotkeyDispatcher::new(shortcuts),
            notifier,
            settings: Settings::default(),
        }
    }

    pub fn windows(&self) -> &WindowRegistry<W> {
        &self.windows
    }

    pub fn hotkeys(&self) -> &HotkeyDispatcher<S> {
        &self.hotkeys
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Creates the eagerly-built windows and binds the default hotkeys.
    pub fn start(&mut self) -> RebuildReport {
        for kind in WindowKind::ALL.into_iter().filter(|kind| kind.spec().eager) {
            if let Err(err) = self.windows.get_or_create(kind) {
                warn!("failed to create window {}: {err}", kind.label());
            }
        }
        self.rebuild_hotkeys()
    }

    pub fn handle(&mut self, request: UiRequest) -> UiReply {
        debug!("relay {}", request.name());
        match request {
            UiRequest::GetSettings => UiReply::Settings(self.settings.clone()),
            UiRequest::SaveSettings(settings) => {
                info!("new settings: {settings:?}");
                self.settings = settings;
                self.rebuild_hotkeys();
                UiReply::SettingsSaved(SETTINGS_SAVED_MESSAGE.to_string())
            }
            UiRequest::HideWindow => self.hide(WindowKind::Main),
            UiRequest::HideSettingsWindow => self.hide(WindowKind::Settings),
            UiRequest::HideTodoWindow => self.hide(WindowKind::Todo),
            UiRequest::HidePomodoroWindow => self.hide(WindowKind::Pomodoro),
            UiRequest::CloseSettingsWindow => {
                self.windows.close(WindowKind::Settings);
                UiReply::Ack
            }
            UiRequest::MinimizeWindow => {
                self.windows.minimize(WindowKind::Main);
                UiReply::Ack
            }
            UiRequest::ShowNotification(body) => {
                if let Err(err) = self.notifier.notify(NOTIFICATION_TITLE, &body) {
                    warn!("{err}");
                }
                UiReply::Ack
            }
        }
    }

    /// Runs the action bound to a fired shortcut. Returns the window shown.
    pub fn on_hotkey(&mut self, id: &S::Id) -> Option<WindowKind> {
        let Some(kind) = self.hotkeys.target_for(id) else {
            debug!("no binding for shortcut {id:?}");
            return None;
        };
        self.windows.show(kind);
        Some(kind)
    }

    pub fn show(&mut self, kind: WindowKind) {
        self.windows.show(kind);
    }

    pub fn on_focus_lost(&mut self, kind: WindowKind) {
        self.windows.on_focus_lost(kind);
    }

    pub fn on_destroyed(&mut self, kind: WindowKind) {
        self.windows.forget(kind);
    }

    pub fn shutdown(&mut self) {
        self.hotkeys.release_all();
        info!("released global shortcuts");
    }

    fn hide(&mut self, kind: WindowKind) -> UiReply {
        self.windows.hide(kind);
        UiReply::Ack
    }

    fn rebuild_hotkeys(&mut self) -> RebuildReport {
        self.hotkeys.rebuild(self.settings.hotkey_bindings())
    }
}
