//! Headless panel surface
//!
//! The display state of the playground as plain data: two text panes and
//! the status strip. Front-ends render this however they like; the logic
//! here is testable without any rendering surface. Codegen results land in
//! their own pane, every other stage writes the general output pane.

use cxplay_module::Stage;

use crate::error::RunnerError;
use crate::report::{StageReport, SPACE_COMPLEXITY, TIME_COMPLEXITY};

/// Placeholder shown before any action has run
const EMPTY: &str = "-";

/// Display state of the playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    /// General output pane (lexer, AST, IR, optimized IR, errors)
    pub output: String,
    /// Dedicated pane for final generated code
    pub codegen: String,
    /// "Success" / "Error" / "-"
    pub status: String,
    /// Formatted elapsed time, e.g. "0.42 ms"
    pub time: String,
    /// "100%" / "0%" / "-"
    pub success_rate: String,
    /// Fixed label, never computed
    pub time_complexity: String,
    /// Fixed label, never computed
    pub space_complexity: String,
}

impl Default for Panels {
    fn default() -> Self {
        Self::new()
    }
}

impl Panels {
    /// Fresh surface with placeholder status fields
    pub fn new() -> Self {
        Self {
            output: String::new(),
            codegen: String::new(),
            status: EMPTY.to_string(),
            time: EMPTY.to_string(),
            success_rate: EMPTY.to_string(),
            time_complexity: TIME_COMPLEXITY.to_string(),
            space_complexity: SPACE_COMPLEXITY.to_string(),
        }
    }

    /// Fold a finished action into the surface
    pub fn apply_report(&mut self, report: &StageReport) {
        match report.stage {
            Stage::Codegen => self.codegen = report.text.clone(),
            _ => self.output = report.text.clone(),
        }
        self.status = report.status_label().to_string();
        self.time = format!("{:.2} ms", report.elapsed_ms());
        self.success_rate = report.success_rate().to_string();
    }

    /// Fold a failed action into the surface. Errors are recovered here —
    /// they are displayed, never fatal to the session.
    pub fn apply_error(&mut self, error: &RunnerError) {
        self.output = error.to_string();
        self.status = "Error".to_string();
        self.time = EMPTY.to_string();
        self.success_rate = "0%".to_string();
    }
}
