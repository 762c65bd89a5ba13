//! Process-wide window registry.
//!
//! The registry is the only owner of window bookkeeping. Windows are created
//! once through the [`WindowHost`] and reused; the host is only asked to act
//! when the tracked state says something actually changes.

use std::collections::HashMap;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relay::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Main,
    Todo,
    Pomodoro,
    Settings,
}

impl WindowKind {
    pub const ALL: [WindowKind; 4] = [
        WindowKind::Main,
        WindowKind::Todo,
        WindowKind::Pomodoro,
        WindowKind::Settings,
    ];

    /// Window label used by the host runtime.
    pub fn label(self) -> &'static str {
        match self {
            WindowKind::Main => "main",
            WindowKind::Todo => "todo",
            WindowKind::Pomodoro => "pomodoro",
            WindowKind::Settings => "settings",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    pub fn spec(self) -> WindowSpec {
        let (title, document, width, height, eager) = match self {
            WindowKind::Main => ("App Switcher", "index.html", 800.0, 600.0, true),
            WindowKind::Todo => ("Todo", "todo.html", 800.0, 600.0, true),
            WindowKind::Pomodoro => ("Pomodoro Timer", "pomodoro.html", 400.0, 300.0, true),
            WindowKind::Settings => ("Settings", "settings.html", 400.0, 600.0, false),
        };
        WindowSpec {
            kind: self,
            title,
            document,
            width,
            height,
            frameless: true,
            transparent: true,
            always_on_top: true,
            hide_on_blur: true,
            eager,
        }
    }

    /// Events sent to the window's UI each time it goes from hidden to shown.
    pub fn show_events(self) -> &'static [UiEvent] {
        match self {
            WindowKind::Main => &[
                UiEvent::FocusSearchInput,
                UiEvent::ClearSearchInput,
                UiEvent::WindowShown,
            ],
            _ => &[],
        }
    }
}

/// Fixed geometry and style of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub kind: WindowKind,
    pub title: &'static str,
    /// Page rendered by the window, relative to the frontend dist directory.
    pub document: &'static str,
    pub width: f64,
    pub height: f64,
    pub frameless: bool,
    pub transparent: bool,
    pub always_on_top: bool,
    pub hide_on_blur: bool,
    /// Created at startup rather than on first show.
    pub eager: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("window {0:?} is not open")]
    Missing(WindowKind),
    #[error("{0}")]
    Backend(String),
}

impl HostError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// The GUI runtime's window operations. Windows are always created hidden.
pub trait WindowHost {
    fn create(&mut self, spec: &WindowSpec) -> Result<(), HostError>;
    /// Makes the window visible, restoring it if minimized.
    fn show(&mut self, kind: WindowKind) -> Result<(), HostError>;
    fn focus(&mut self, kind: WindowKind) -> Result<(), HostError>;
    fn hide(&mut self, kind: WindowKind) -> Result<(), HostError>;
    fn minimize(&mut self, kind: WindowKind) -> Result<(), HostError>;
    fn close(&mut self, kind: WindowKind) -> Result<(), HostError>;
    fn emit(&mut self, kind: WindowKind, event: UiEvent) -> Result<(), HostError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowEntry {
    pub spec: WindowSpec,
    pub visible: bool,
    pub minimized: bool,
}

pub struct WindowRegistry<H: WindowHost> {
    host: H,
    open: HashMap<WindowKind, WindowEntry>,
    /// Destroy notifications still owed for windows closed through
    /// [`close`](Self::close). They refer to the old window, never to one
    /// created since.
    closing: HashMap<WindowKind, usize>,
}

impl<H: WindowHost> WindowRegistry<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            open: HashMap::new(),
            closing: HashMap::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn get(&self, kind: WindowKind) -> Option<&WindowEntry> {
        self.open.get(&kind)
    }

    pub fn is_visible(&self, kind: WindowKind) -> bool {
        self.open.get(&kind).is_some_and(|entry| entry.visible)
    }

    pub fn get_or_create(&mut self, kind: WindowKind) -> Result<&WindowEntry, HostError> {
        if !self.open.contains_key(&kind) {
            let spec = kind.spec();
            self.host.create(&spec)?;
            debug!("created window {}", kind.label());
            self.open.insert(
                kind,
                WindowEntry {
                    spec,
                    visible: false,
                    minimized: false,
                },
            );
        }
        self.open.get(&kind).ok_or(HostError::Missing(kind))
    }

    /// Shows and focuses the window, creating it on first use.
    pub fn show(&mut self, kind: WindowKind) {
        let was_visible = match self.get_or_create(kind) {
            Ok(entry) => entry.visible && !entry.minimized,
            Err(err) => {
                error!("failed to create window {}: {err}", kind.label());
                return;
            }
        };

        if !was_visible {
            if let Err(err) = self.host.show(kind) {
                warn!("failed to show window {}: {err}", kind.label());
                return;
            }
        }
        if let Err(err) = self.host.focus(kind) {
            warn!("failed to focus window {}: {err}", kind.label());
        }

        let Some(entry) = self.open.get_mut(&kind) else {
            return;
        };
        let shown_from_hidden = !entry.visible;
        entry.visible = true;
        entry.minimized = false;

        if shown_from_hidden {
            for event in kind.show_events() {
                if let Err(err) = self.host.emit(kind, *event) {
                    warn!("failed to send {} to {}: {err}", event.name(), kind.label());
                }
            }
        }
    }

    /// Hides a visible window. Returns `false` without touching the host when
    /// the window is not open or already hidden.
    pub fn hide(&mut self, kind: WindowKind) -> bool {
        let Some(entry) = self.open.get_mut(&kind) else {
            return false;
        };
        if !entry.visible {
            return false;
        }
        if let Err(err) = self.host.hide(kind) {
            warn!("failed to hide window {}: {err}", kind.label());
            return false;
        }
        entry.visible = false;
        entry.minimized = false;
        true
    }

    pub fn minimize(&mut self, kind: WindowKind) -> bool {
        let Some(entry) = self.open.get_mut(&kind) else {
            return false;
        };
        if entry.minimized {
            return false;
        }
        if let Err(err) = self.host.minimize(kind) {
            warn!("failed to minimize window {}: {err}", kind.label());
            return false;
        }
        entry.minimized = true;
        true
    }

    /// Destroys the window. The next [`show`](Self::show) creates it again.
    pub fn close(&mut self, kind: WindowKind) -> bool {
        if !self.open.contains_key(&kind) {
            return false;
        }
        match self.host.close(kind) {
            Ok(()) => *self.closing.entry(kind).or_default() += 1,
            Err(err) => warn!("failed to close window {}: {err}", kind.label()),
        }
        self.open.remove(&kind);
        true
    }

    /// Blur-to-hide. Minimized windows count as visible, so they hide too.
    pub fn on_focus_lost(&mut self, kind: WindowKind) -> bool {
        let should_hide = self
            .open
            .get(&kind)
            .is_some_and(|entry| entry.visible && entry.spec.hide_on_blur);
        should_hide && self.hide(kind)
    }

    /// Handles the runtime's destroy notification for `kind`.
    ///
    /// The notification for a window we closed ourselves may arrive after the
    /// window was created again; it is consumed without touching the new one.
    pub fn forget(&mut self, kind: WindowKind) {
        if let Some(pending) = self.closing.get_mut(&kind) {
            *pending -= 1;
            if *pending == 0 {
                self.closing.remove(&kind);
            }
            debug!("window {} close confirmed", kind.label());
            return;
        }
        if self.open.remove(&kind).is_some() {
            debug!("window {} destroyed", kind.label());
        }
    }
}
