//! Stage names
//!
//! One variant per entry point of the external compiler module. The later
//! stages are not independent of the earlier ones — the runner composes them
//! — but at this boundary each is a single export taking one string.

use std::fmt;

/// One phase of compilation exposed by the external module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Tokenization
    Lex,
    /// Parse to AST
    Ast,
    /// IR construction
    Ir,
    /// Optimizer output
    OptimizedIr,
    /// Final code generation
    Codegen,
}

impl Stage {
    /// All stages, in pipeline order
    pub const ALL: [Stage; 5] = [
        Stage::Lex,
        Stage::Ast,
        Stage::Ir,
        Stage::OptimizedIr,
        Stage::Codegen,
    ];

    /// Get the short string name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lex => "lexer",
            Stage::Ast => "ast",
            Stage::Ir => "ir",
            Stage::OptimizedIr => "optimized-ir",
            Stage::Codegen => "codegen",
        }
    }

    /// Human-facing label used in the panel surface
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Lex => "Lexer",
            Stage::Ast => "AST",
            Stage::Ir => "IR",
            Stage::OptimizedIr => "Optimized IR",
            Stage::Codegen => "Codegen",
        }
    }

    /// Name of the wasm export this stage maps to
    pub fn export_name(&self) -> &'static str {
        match self {
            Stage::Lex => "run_lexer",
            Stage::Ast => "run_ast",
            Stage::Ir => "run_ir",
            Stage::OptimizedIr => "run_optimized_ir",
            Stage::Codegen => "run_codegen",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
