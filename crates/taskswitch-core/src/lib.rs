//! Headless core of TaskSwitch.
//!
//! Everything here is independent of the GUI runtime: the desktop shell plugs
//! its windows, global shortcuts and notifications in through the
//! [`WindowHost`], [`ShortcutHost`] and [`Notifier`] traits.

mod accelerator;
mod controller;
mod hotkey;
mod notify;
mod relay;
mod settings;
mod tray;
mod window;

#[cfg(test)]
mod fakes;

pub use accelerator::{Accelerator, AcceleratorError};
pub use controller::Controller;
pub use hotkey::{FailedBinding, HotkeyDispatcher, HotkeyError, RebuildReport, ShortcutHost};
pub use notify::{NotifyError, Notifier};
pub use relay::{UiEvent, UiReply, UiRequest, SETTINGS_SAVED_MESSAGE};
pub use settings::{Settings, Theme};
pub use tray::TrayItem;
pub use window::{HostError, WindowEntry, WindowHost, WindowKind, WindowRegistry, WindowSpec};

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Title of every notification raised by the pomodoro panel.
pub const NOTIFICATION_TITLE: &str = "Pomodoro Timer";
