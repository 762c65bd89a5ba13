//! Global shortcut strings such as `CommandOrControl+Shift+P`.
//!
//! Parsing is delegated to `global-hotkey`, the same grammar the runtime's
//! shortcut plugin registers with, so anything the runtime accepts is accepted
//! here and two spellings of the same keys compare equal.

use std::{fmt, str::FromStr};

use global_hotkey::hotkey::HotKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorError {
    #[error("accelerator is empty")]
    Empty,
    #[error("invalid accelerator `{accelerator}`: {reason}")]
    Invalid { accelerator: String, reason: String },
}

/// A parsed global shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accelerator(HotKey);

impl Accelerator {
    pub fn parse(input: &str) -> Result<Self, AcceleratorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AcceleratorError::Empty);
        }

        HotKey::from_str(trimmed)
            .map(Self)
            .map_err(|err| AcceleratorError::Invalid {
                accelerator: trimmed.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn hotkey(&self) -> HotKey {
        self.0
    }

    /// Id the runtime reports when this shortcut fires.
    pub fn id(&self) -> u32 {
        self.0.id()
    }
}

impl FromStr for Accelerator {
    type Err = AcceleratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.into_string())
    }
}
