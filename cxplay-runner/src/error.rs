//! Error types for the stage runner

use thiserror::Error;

use cxplay_module::{ModuleError, Stage};

/// Error raised while running a stage action
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The compiler module has not finished loading; no stage was invoked.
    #[error("compiler module is not loaded yet")]
    ModuleNotReady,

    #[error("stage {stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: ModuleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_carries_the_failing_stage() {
        let err = RunnerError::Stage {
            stage: Stage::Ir,
            source: ModuleError::NullResult { stage: Stage::Ir },
        };
        assert!(err.to_string().starts_with("stage ir failed"));
    }
}
