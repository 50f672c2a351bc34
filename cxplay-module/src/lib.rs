//! cxplay Module - boundary with the external Cx compiler
//!
//! The compiler toolchain itself (lexer, parser, IR builder, optimizer,
//! code generator) lives in a precompiled WebAssembly module; this crate
//! only defines the vocabulary for talking to it: the [`Stage`] names, the
//! [`CompilerModule`] trait every front-end depends on, the typed error
//! channel, and the wasmi-backed adapter that turns the module's exports
//! into plain `&str -> String` calls.

pub mod error;
pub mod slot;
pub mod stage;
pub mod wasm;

pub use error::ModuleError;
pub use slot::{AlreadyInstalled, ModuleSlot};
pub use stage::Stage;
pub use wasm::WasmCompiler;

/// The five entry points of the external compiler module.
///
/// This is the injected dependency of the whole playground: everything above
/// this trait is orchestration, everything below it is the opaque module.
/// Each method is synchronous, takes one string, and returns the module's
/// raw text verbatim (no sanitization, no truncation). Anything the module
/// can do wrong at the call boundary surfaces as a [`ModuleError`].
pub trait CompilerModule: Send + Sync {
    /// Tokenize source text.
    fn lex(&self, source: &str) -> Result<String, ModuleError>;

    /// Parse source text into an AST dump.
    fn parse_ast(&self, source: &str) -> Result<String, ModuleError>;

    /// Lower source text to IR.
    fn build_ir(&self, source: &str) -> Result<String, ModuleError>;

    /// Run the optimizer over IR text.
    fn optimize_ir(&self, ir: &str) -> Result<String, ModuleError>;

    /// Generate code from optimized IR text.
    fn generate_code(&self, optimized_ir: &str) -> Result<String, ModuleError>;

    /// Dispatch a single stage by name.
    fn run_stage(&self, stage: Stage, input: &str) -> Result<String, ModuleError> {
        match stage {
            Stage::Lex => self.lex(input),
            Stage::Ast => self.parse_ast(input),
            Stage::Ir => self.build_ir(input),
            Stage::OptimizedIr => self.optimize_ir(input),
            Stage::Codegen => self.generate_code(input),
        }
    }
}
