//! cxplay Runner
//!
//! Orchestration above the external compiler module: compose the stage
//! pipeline, time one action, classify its outcome, and fold the result
//! into a headless panel surface. No compiler logic lives here.

pub mod classify;
pub mod error;
pub mod panel;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod theme;

pub use classify::{classify, Verdict};
pub use error::RunnerError;
pub use panel::Panels;
pub use report::{StageReport, SPACE_COMPLEXITY, TIME_COMPLEXITY};
pub use runner::StageRunner;
pub use theme::{Palette, Theme};
