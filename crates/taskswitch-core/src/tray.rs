use crate::window::WindowKind;

/// Entries of the tray context menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayItem {
    ShowApp,
    Settings,
    Pomodoro,
    Quit,
}

impl TrayItem {
    pub const ALL: [TrayItem; 4] = [
        TrayItem::ShowApp,
        TrayItem::Settings,
        TrayItem::Pomodoro,
        TrayItem::Quit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TrayItem::ShowApp => "tray-show",
            TrayItem::Settings => "tray-settings",
            TrayItem::Pomodoro => "tray-pomodoro",
            TrayItem::Quit => "tray-quit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrayItem::ShowApp => "Show App",
            TrayItem::Settings => "Settings",
            TrayItem::Pomodoro => "Pomodoro Timer",
            TrayItem::Quit => "Quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }

    /// Window the entry brings up; `None` for Quit.
    pub fn window(self) -> Option<WindowKind> {
        match self {
            TrayItem::ShowApp => Some(WindowKind::Main),
            TrayItem::Settings => Some(WindowKind::Settings),
            TrayItem::Pomodoro => Some(WindowKind::Pomodoro),
            TrayItem::Quit => None,
        }
    }
}
