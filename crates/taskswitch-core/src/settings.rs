use serde::{Deserialize, Serialize};

use crate::window::WindowKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

/// User-facing settings. Kept in memory only; every launch starts from
/// [`Settings::default`].
///
/// Hotkey fields are stored as entered. A malformed accelerator is not
/// rejected here; only its own binding fails when hotkeys are rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub app_switcher_hotkey: String,
    pub todo_hotkey: String,
    pub pomodoro_hotkey: String,
    pub settings_hotkey: String,
    pub theme: Theme,
    pub start_at_login: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_switcher_hotkey: "CommandOrControl+Shift+P".to_string(),
            todo_hotkey: "CommandOrControl+Shift+T".to_string(),
            pomodoro_hotkey: "CommandOrControl+Shift+M".to_string(),
            settings_hotkey: "CommandOrControl+Shift+O".to_string(),
            theme: Theme::Dark,
            start_at_login: false,
        }
    }
}

impl Settings {
    /// The configured hotkeys in registration order. Later entries win when
    /// two of them name the same accelerator.
    pub fn hotkey_bindings(&self) -> [(WindowKind, &str); 4] {
        [
            (WindowKind::Main, self.app_switcher_hotkey.as_str()),
            (WindowKind::Todo, self.todo_hotkey.as_str()),
            (WindowKind::Pomodoro, self.pomodoro_hotkey.as_str()),
            (WindowKind::Settings, self.settings_hotkey.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_switcher_hotkey, "CommandOrControl+Shift+P");
        assert_eq!(settings.todo_hotkey, "CommandOrControl+Shift+T");
        assert_eq!(settings.pomodoro_hotkey, "CommandOrControl+Shift+M");
        assert_eq!(settings.settings_hotkey, "CommandOrControl+Shift+O");
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.start_at_login);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(value["appSwitcherHotkey"], "CommandOrControl+Shift+P");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["startAtLogin"], false);
    }

    #[test]
    fn test_partial_payload_keeps_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{ "appSwitcherHotkey": "Ctrl+Shift+9", "theme": "light" }"#,
        )
        .unwrap();
        assert_eq!(settings.app_switcher_hotkey, "Ctrl+Shift+9");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.todo_hotkey, Settings::default().todo_hotkey);
        assert_eq!(settings.settings_hotkey, Settings::default().settings_hotkey);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let parsed = serde_json::from_str::<Settings>(r#"{ "theme": "neon" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_hotkey_binding_order() {
        let settings = Settings::default();
        let kinds: Vec<_> = settings.hotkey_bindings().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                WindowKind::Main,
                WindowKind::Todo,
                WindowKind::Pomodoro,
                WindowKind::Settings
            ]
        );
    }
}
