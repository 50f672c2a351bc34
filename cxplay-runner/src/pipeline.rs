//! Pipeline composition
//!
//! The later stages are not independent: optimizing re-runs IR
//! construction on the current source, and code generation re-runs both IR
//! construction and optimization. Nothing is cached between actions — every
//! action recomputes its full prefix from the raw source. That always-fresh
//! policy is the contract of the surface; a memoizing variant (keyed by
//! source hash) would replace this function without touching any caller.

use cxplay_module::{CompilerModule, Stage};

use crate::error::RunnerError;

/// Run one action's composed computation against the module.
///
/// | Action      | Computes                                       |
/// |-------------|------------------------------------------------|
/// | Lex         | lex(source)                                    |
/// | Ast         | parse_ast(source)                              |
/// | Ir          | build_ir(source)                               |
/// | OptimizedIr | optimize_ir(build_ir(source))                  |
/// | Codegen     | generate_code(optimize_ir(build_ir(source)))   |
///
/// A failing prefix stage aborts the action; later stages never see
/// garbage input. The error names the stage that actually failed.
pub fn run(module: &dyn CompilerModule, action: Stage, source: &str) -> Result<String, RunnerError> {
    let call = |stage: Stage, input: &str| {
        module
            .run_stage(stage, input)
            .map_err(|source| RunnerError::Stage { stage, source })
    };

    match action {
        Stage::Lex | Stage::Ast | Stage::Ir => call(action, source),
        Stage::OptimizedIr => {
            let ir = call(Stage::Ir, source)?;
            call(Stage::OptimizedIr, &ir)
        }
        Stage::Codegen => {
            let ir = call(Stage::Ir, source)?;
            let optimized = call(Stage::OptimizedIr, &ir)?;
            call(Stage::Codegen, &optimized)
        }
    }
}
