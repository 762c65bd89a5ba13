//! The closed set of messages exchanged between window UIs and the main process.
//!
//! Requests arrive as `{ "message": "<name>", "payload": ... }`. Names outside
//! the set fail to deserialize, so a typo surfaces as an error at the boundary
//! instead of a handler that never runs.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved successfully";

/// Main process to UI. These carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    FocusSearchInput,
    ClearSearchInput,
    WindowShown,
}

impl UiEvent {
    pub fn name(self) -> &'static str {
        match self {
            UiEvent::FocusSearchInput => "focus-search-input",
            UiEvent::ClearSearchInput => "clear-search-input",
            UiEvent::WindowShown => "window-shown",
        }
    }
}

/// UI to main process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", content = "payload", rename_all = "kebab-case")]
pub enum UiRequest {
    GetSettings,
    SaveSettings(Settings),
    /// Hides the app switcher.
    HideWindow,
    HideSettingsWindow,
    HideTodoWindow,
    HidePomodoroWindow,
    CloseSettingsWindow,
    MinimizeWindow,
    ShowNotification(String),
}

impl UiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            UiRequest::GetSettings => "get-settings",
            UiRequest::SaveSettings(_) => "save-settings",
            UiRequest::HideWindow => "hide-window",
            UiRequest::HideSettingsWindow => "hide-settings-window",
            UiRequest::HideTodoWindow => "hide-todo-window",
            UiRequest::HidePomodoroWindow => "hide-pomodoro-window",
            UiRequest::CloseSettingsWindow => "close-settings-window",
            UiRequest::MinimizeWindow => "minimize-window",
            UiRequest::ShowNotification(_) => "show-notification",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", content = "payload", rename_all = "kebab-case")]
pub enum UiReply {
    Settings(Settings),
    SettingsSaved(String),
    /// Reply to requests that only trigger a side effect.
    Ack,
}
