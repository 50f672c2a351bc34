//! The Stage Runner
//!
//! Invoke one action's composed pipeline once, synchronously, with the
//! wall clock around it, and classify the result. Actions against a slot
//! that has no module yet never reach the adapter.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use cxplay_module::{CompilerModule, ModuleSlot, Stage};

use crate::classify::classify;
use crate::error::RunnerError;
use crate::pipeline;
use crate::report::StageReport;

/// Runs stage actions against the shared compiler module
pub struct StageRunner {
    slot: Arc<ModuleSlot>,
}

impl StageRunner {
    /// Create a runner over a module slot (possibly still empty)
    pub fn new(slot: Arc<ModuleSlot>) -> Self {
        Self { slot }
    }

    /// Create a runner over an already-loaded module
    pub fn with_module(module: Arc<dyn CompilerModule>) -> Self {
        let slot = ModuleSlot::new();
        // A fresh slot cannot already hold a module.
        let _ = slot.install(module);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Check whether stage actions are enabled
    pub fn is_ready(&self) -> bool {
        self.slot.is_ready()
    }

    /// Run one stage action on the given source text.
    ///
    /// Returns [`RunnerError::ModuleNotReady`] without invoking anything if
    /// module loading has not completed.
    pub fn run(&self, stage: Stage, source: &str) -> Result<StageReport, RunnerError> {
        let module = self.slot.get().ok_or(RunnerError::ModuleNotReady)?;

        let started = Instant::now();
        let text = pipeline::run(module.as_ref(), stage, source)?;
        let elapsed = started.elapsed();
        let verdict = classify(&text);

        debug!(
            target: "cxplay::runner",
            stage = %stage,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            success = verdict.is_success(),
            "stage action finished"
        );

        Ok(StageReport {
            stage,
            text,
            elapsed,
            verdict,
        })
    }
}
