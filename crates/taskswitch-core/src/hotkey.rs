//! Global hotkey dispatch.
//!
//! The dispatcher owns the table from host shortcut ids to windows. The host
//! only registers bare accelerators; whatever fires is routed back through
//! [`HotkeyDispatcher::target_for`], so rebinding never leaves a stale callback
//! behind.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    accelerator::{Accelerator, AcceleratorError},
    window::WindowKind,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotkeyError {
    #[error(transparent)]
    Invalid(#[from] AcceleratorError),
    #[error("accelerator {accelerator} is unavailable: {reason}")]
    Unavailable { accelerator: String, reason: String },
    #[error("{0}")]
    Backend(String),
}

/// The runtime's global shortcut registry.
pub trait ShortcutHost {
    /// Identifies a registered shortcut when it fires.
    type Id: Clone + Eq + Hash + Debug;

    fn register(&mut self, accelerator: &Accelerator) -> Result<Self::Id, HotkeyError>;
    /// Releases every shortcut this process registered. Must succeed when
    /// nothing is registered.
    fn unregister_all(&mut self) -> Result<(), HotkeyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedBinding {
    pub target: WindowKind,
    pub accelerator: String,
    pub error: HotkeyError,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    pub registered: Vec<(Accelerator, WindowKind)>,
    pub failed: Vec<FailedBinding>,
}

#[derive(Debug, Clone)]
struct Binding {
    accelerator: Accelerator,
    target: WindowKind,
}

pub struct HotkeyDispatcher<S: ShortcutHost> {
    host: S,
    bindings: HashMap<S::Id, Binding>,
}

impl<S: ShortcutHost> HotkeyDispatcher<S> {
    pub fn new(host: S) -> Self {
        Self {
            host,
            bindings: HashMap::new(),
        }
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn target_for(&self, id: &S::Id) -> Option<WindowKind> {
        self.bindings.get(id).map(|binding| binding.target)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Releases everything and registers `bindings` in order.
    ///
    /// A binding that fails to parse or register is logged and skipped. When
    /// two bindings share an accelerator the later target wins.
    pub fn rebuild<'a, I>(&mut self, bindings: I) -> RebuildReport
    where
        I: IntoIterator<Item = (WindowKind, &'a str)>,
    {
        self.release_all();

        let mut report = RebuildReport::default();
        for (target, raw) in bindings {
            match self.bind(target, raw) {
                Ok(accelerator) => report.registered.push((accelerator, target)),
                Err(error) => {
                    warn!(
                        "failed to register shortcut {raw} for {}: {error}",
                        target.label()
                    );
                    report.failed.push(FailedBinding {
                        target,
                        accelerator: raw.to_string(),
                        error,
                    });
                }
            }
        }

        info!(
            "registered {} global shortcut(s), {} failed",
            self.bindings.len(),
            report.failed.len()
        );
        report
    }

    fn bind(&mut self, target: WindowKind, raw: &str) -> Result<Accelerator, HotkeyError> {
        let accelerator = Accelerator::parse(raw)?;

        if let Some(existing) = self
            .bindings
            .values_mut()
            .find(|binding| binding.accelerator == accelerator)
        {
            debug!(
                "shortcut {accelerator} rebound from {} to {}",
                existing.target.label(),
                target.label()
            );
            existing.target = target;
            return Ok(accelerator);
        }

        let id = self.host.register(&accelerator)?;
        self.bindings.insert(id, Binding { accelerator, target });
        Ok(accelerator)
    }

    /// Idempotent; safe to call with nothing registered.
    pub fn release_all(&mut self) {
        if let Err(err) = self.host.unregister_all() {
            warn!("failed to unregister global shortcuts: {err}");
        }
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeShortcuts;

    fn dispatcher() -> HotkeyDispatcher<FakeShortcuts> {
        HotkeyDispatcher::new(FakeShortcuts::default())
    }

    fn id(raw: &str) -> u32 {
        Accelerator::parse(raw).unwrap().id()
    }

    #[test]
    fn registers_each_binding() {
        let mut hotkeys = dispatcher();
        let report = hotkeys.rebuild([
            (WindowKind::Main, "Ctrl+Shift+P"),
            (WindowKind::Todo, "Ctrl+Shift+T"),
        ]);
        assert!(report.failed.is_empty());
        assert_eq!(hotkeys.len(), 2);
        assert_eq!(hotkeys.target_for(&id("Ctrl+Shift+T")), Some(WindowKind::Todo));
    }

    #[test]
    fn invalid_accelerator_does_not_block_others() {
        let mut hotkeys = dispatcher();
        let report = hotkeys.rebuild([
            (WindowKind::Main, "Ctrl+Shift+"),
            (WindowKind::Todo, "Ctrl+Shift+T"),
        ]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].target, WindowKind::Main);
        assert!(matches!(report.failed[0].error, HotkeyError::Invalid(_)));
        assert_eq!(hotkeys.target_for(&id("Ctrl+Shift+T")), Some(WindowKind::Todo));
    }

    #[test]
    fn claimed_accelerator_is_skipped() {
        let mut hotkeys = HotkeyDispatcher::new(FakeShortcuts::claimed(&["Ctrl+Shift+P"]));
        let report = hotkeys.rebuild([
            (WindowKind::Main, "Ctrl+Shift+P"),
            (WindowKind::Pomodoro, "Ctrl+Shift+M"),
        ]);
        assert!(matches!(
            report.failed[0].error,
            HotkeyError::Unavailable { .. }
        ));
        assert_eq!(hotkeys.target_for(&id("Ctrl+Shift+P")), None);
        assert_eq!(
            hotkeys.target_for(&id("Ctrl+Shift+M")),
            Some(WindowKind::Pomodoro)
        );
    }

    #[test]
    fn duplicate_accelerator_last_writer_wins() {
        let mut hotkeys = dispatcher();
        let report = hotkeys.rebuild([
            (WindowKind::Todo, "Ctrl+Shift+X"),
            (WindowKind::Pomodoro, "shift+ctrl+x"),
        ]);
        assert!(report.failed.is_empty());
        assert_eq!(hotkeys.len(), 1);
        assert_eq!(hotkeys.host().register_calls, 1);
        assert_eq!(
            hotkeys.target_for(&id("Ctrl+Shift+X")),
            Some(WindowKind::Pomodoro)
        );
    }

    #[test]
    fn rebuild_twice_keeps_one_binding_per_accelerator() {
        let mut hotkeys = dispatcher();
        let bindings = [
            (WindowKind::Main, "Ctrl+Shift+P"),
            (WindowKind::Todo, "Ctrl+Shift+T"),
        ];
        hotkeys.rebuild(bindings);
        hotkeys.rebuild(bindings);
        assert_eq!(hotkeys.len(), 2);
        assert_eq!(hotkeys.host().registered.len(), 2);
    }

    #[test]
    fn registers_any_key_the_runtime_accepts() {
        let mut hotkeys = dispatcher();
        let report = hotkeys.rebuild([
            (WindowKind::Main, "Ctrl+Shift+PrintScreen"),
            (WindowKind::Todo, "Alt+Numpad1"),
            (WindowKind::Pomodoro, "Ctrl+Shift+KeyA"),
            (WindowKind::Settings, "Ctrl+Digit1"),
        ]);
        assert!(report.failed.is_empty(), "{:?}", report.failed);
        assert_eq!(hotkeys.len(), 4);
        assert_eq!(
            hotkeys.target_for(&id("Alt+Numpad1")),
            Some(WindowKind::Todo)
        );
        assert_eq!(
            hotkeys.target_for(&id("ctrl+shift+a")),
            Some(WindowKind::Pomodoro)
        );
    }

    #[test]
    fn release_all_is_idempotent() {
        let mut hotkeys = dispatcher();
        hotkeys.release_all();
        hotkeys.rebuild([(WindowKind::Main, "Alt+Space")]);
        hotkeys.release_all();
        hotkeys.release_all();
        assert!(hotkeys.is_empty());
        assert!(hotkeys.host().registered.is_empty());
    }
}
