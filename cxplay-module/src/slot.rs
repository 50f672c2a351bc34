//! Module readiness guard
//!
//! The compiler module is loaded once at start-up and shared for the rest
//! of the process. [`ModuleSlot`] makes the "loaded" state explicit: stage
//! actions go through [`ModuleSlot::get`], and an empty slot is observable
//! instead of being a latent crash on first use.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::CompilerModule;

/// Returned when a second module is installed into the same slot
#[derive(Error, Debug, PartialEq, Eq)]
#[error("a compiler module is already installed")]
pub struct AlreadyInstalled;

/// Once-settable holder for the shared compiler module
#[derive(Default)]
pub struct ModuleSlot {
    cell: OnceCell<Arc<dyn CompilerModule>>,
}

impl ModuleSlot {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Install the loaded module. Fails if one is already installed.
    pub fn install(&self, module: Arc<dyn CompilerModule>) -> Result<(), AlreadyInstalled> {
        self.cell.set(module).map_err(|_| AlreadyInstalled)
    }

    /// Get the module, if loading has completed
    pub fn get(&self) -> Option<Arc<dyn CompilerModule>> {
        self.cell.get().cloned()
    }

    /// Check whether a module is installed
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for ModuleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSlot")
            .field("ready", &self.is_ready())
            .finish()
    }
}
