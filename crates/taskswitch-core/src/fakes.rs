//! Recording hosts for unit tests.

use std::collections::{BTreeSet, HashSet};

use crate::{
    accelerator::Accelerator,
    hotkey::{HotkeyError, ShortcutHost},
    notify::{Notifier, NotifyError},
    relay::UiEvent,
    window::{HostError, WindowHost, WindowKind, WindowSpec},
};

#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    Create(WindowKind),
    Show(WindowKind),
    Focus(WindowKind),
    Hide(WindowKind),
    Minimize(WindowKind),
    Close(WindowKind),
    Emit(WindowKind, UiEvent),
}

#[derive(Debug, Default)]
pub struct FakeWindows {
    pub calls: Vec<WindowCall>,
    fail_create: bool,
}

impl FakeWindows {
    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<WindowKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                WindowCall::Create(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &WindowCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl WindowHost for FakeWindows {
    fn create(&mut self, spec: &WindowSpec) -> Result<(), HostError> {
        if self.fail_create {
            return Err(HostError::Backend("webview unavailable".into()));
        }
        self.calls.push(WindowCall::Create(spec.kind));
        Ok(())
    }

    fn show(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.calls.push(WindowCall::Show(kind));
        Ok(())
    }

    fn focus(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.calls.push(WindowCall::Focus(kind));
        Ok(())
    }

    fn hide(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.calls.push(WindowCall::Hide(kind));
        Ok(())
    }

    fn minimize(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.calls.push(WindowCall::Minimize(kind));
        Ok(())
    }

    fn close(&mut self, kind: WindowKind) -> Result<(), HostError> {
        self.calls.push(WindowCall::Close(kind));
        Ok(())
    }

    fn emit(&mut self, kind: WindowKind, event: UiEvent) -> Result<(), HostError> {
        self.calls.push(WindowCall::Emit(kind, event));
        Ok(())
    }
}

/// Shortcut ids are the hotkey ids, as the runtime reports them.
#[derive(Debug, Default)]
pub struct FakeShortcuts {
    pub registered: BTreeSet<u32>,
    pub register_calls: usize,
    claimed_elsewhere: HashSet<u32>,
}

impl FakeShortcuts {
    /// Accelerators already owned by another application.
    pub fn claimed(accelerators: &[&str]) -> Self {
        Self {
            claimed_elsewhere: accelerators
                .iter()
                .map(|raw| Accelerator::parse(raw).unwrap().id())
                .collect(),
            ..Self::default()
        }
    }
}

impl ShortcutHost for FakeShortcuts {
    type Id = u32;

    fn register(&mut self, accelerator: &Accelerator) -> Result<u32, HotkeyError> {
        self.register_calls += 1;
        let id = accelerator.id();
        if self.claimed_elsewhere.contains(&id) || self.registered.contains(&id) {
            return Err(HotkeyError::Unavailable {
                accelerator: accelerator.to_string(),
                reason: "already registered".into(),
            });
        }
        self.registered.insert(id);
        Ok(id)
    }

    fn unregister_all(&mut self) -> Result<(), HotkeyError> {
        self.registered.clear();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeNotifier {
    pub shown: Vec<(String, String)>,
}

impl Notifier for FakeNotifier {
    fn notify(&mut self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.shown.push((title.to_string(), body.to_string()));
        Ok(())
    }
}
