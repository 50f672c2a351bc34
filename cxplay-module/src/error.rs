//! Error types for the module boundary
//!
//! The original front-end had no error channel at all — a throwing or
//! misbehaving module was unspecified behavior. Everything the module can
//! do wrong at the call boundary is a variant here instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::stage::Stage;

/// Error raised while loading or invoking the external compiler module
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("failed to read compiler module {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to instantiate compiler module: {0}")]
    Instantiate(String),

    #[error("compiler module is missing export '{name}'")]
    MissingExport { name: String },

    #[error("source text too large for module memory")]
    SourceTooLarge,

    #[error("allocation failed inside compiler module")]
    AllocFailed,

    #[error("memory access failed in stage {stage}: {message}")]
    Memory { stage: Stage, message: String },

    #[error("stage {stage} trapped: {message}")]
    Trap { stage: Stage, message: String },

    #[error("stage {stage} returned a null result")]
    NullResult { stage: Stage },

    #[error("stage {stage} returned an unterminated string")]
    Unterminated { stage: Stage },

    #[error("stage {stage} returned invalid UTF-8")]
    InvalidUtf8 { stage: Stage },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_stage() {
        let err = ModuleError::NullResult { stage: Stage::Ast };
        assert_eq!(err.to_string(), "stage ast returned a null result");

        let err = ModuleError::Trap {
            stage: Stage::Codegen,
            message: "unreachable".to_string(),
        };
        assert!(err.to_string().contains("codegen"));
        assert!(err.to_string().contains("unreachable"));
    }
}
