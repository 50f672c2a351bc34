//! Stage runner behavior against scripted compiler modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cxplay_module::{CompilerModule, ModuleError, ModuleSlot, Stage};
use cxplay_runner::{Panels, RunnerError, StageRunner, Verdict};

/// Scripted module: fixed output per stage, call counts, optional delay.
#[derive(Default)]
struct ScriptedCompiler {
    lex: String,
    ast: String,
    ir: String,
    optimized_ir: String,
    codegen: String,
    delay: Option<Duration>,
    calls: [AtomicUsize; 5],
}

impl ScriptedCompiler {
    fn with_output(stage: Stage, text: &str) -> Self {
        let mut fake = Self::default();
        match stage {
            Stage::Lex => fake.lex = text.to_string(),
            Stage::Ast => fake.ast = text.to_string(),
            Stage::Ir => fake.ir = text.to_string(),
            Stage::OptimizedIr => fake.optimized_ir = text.to_string(),
            Stage::Codegen => fake.codegen = text.to_string(),
        }
        fake
    }

    fn calls_to(&self, stage: Stage) -> usize {
        self.calls[stage as usize].load(Ordering::SeqCst)
    }

    fn respond(&self, stage: Stage, text: &str) -> Result<String, ModuleError> {
        self.calls[stage as usize].fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        Ok(text.to_string())
    }
}

impl CompilerModule for ScriptedCompiler {
    fn lex(&self, _source: &str) -> Result<String, ModuleError> {
        self.respond(Stage::Lex, &self.lex)
    }

    fn parse_ast(&self, _source: &str) -> Result<String, ModuleError> {
        self.respond(Stage::Ast, &self.ast)
    }

    fn build_ir(&self, _source: &str) -> Result<String, ModuleError> {
        self.respond(Stage::Ir, &self.ir)
    }

    fn optimize_ir(&self, _ir: &str) -> Result<String, ModuleError> {
        self.respond(Stage::OptimizedIr, &self.optimized_ir)
    }

    fn generate_code(&self, _optimized_ir: &str) -> Result<String, ModuleError> {
        self.respond(Stage::Codegen, &self.codegen)
    }
}

/// Optimizer always traps; counts whether codegen was still attempted.
#[derive(Default)]
struct BrokenOptimizer {
    codegen_calls: AtomicUsize,
}

impl CompilerModule for BrokenOptimizer {
    fn lex(&self, _source: &str) -> Result<String, ModuleError> {
        Ok(String::new())
    }

    fn parse_ast(&self, _source: &str) -> Result<String, ModuleError> {
        Ok(String::new())
    }

    fn build_ir(&self, _source: &str) -> Result<String, ModuleError> {
        Ok("ir".to_string())
    }

    fn optimize_ir(&self, _ir: &str) -> Result<String, ModuleError> {
        Err(ModuleError::Trap {
            stage: Stage::OptimizedIr,
            message: "unreachable".to_string(),
        })
    }

    fn generate_code(&self, _optimized_ir: &str) -> Result<String, ModuleError> {
        self.codegen_calls.fetch_add(1, Ordering::SeqCst);
        Ok(String::new())
    }
}

#[test]
fn test_displayed_text_is_identity_pass_through() {
    let token_text = "KW(int) IDENT(x) OP(=) NUM(1) SEMI";
    let fake = Arc::new(ScriptedCompiler::with_output(Stage::Lex, token_text));
    let runner = StageRunner::with_module(fake);

    let report = runner.run(Stage::Lex, "int x = 1;").unwrap();
    assert_eq!(report.text, token_text);
}

#[test]
fn test_elapsed_covers_injected_delay() {
    let mut fake = ScriptedCompiler::with_output(Stage::Lex, "tokens");
    fake.delay = Some(Duration::from_millis(25));
    let runner = StageRunner::with_module(Arc::new(fake));

    let report = runner.run(Stage::Lex, "x").unwrap();
    assert!(
        report.elapsed >= Duration::from_millis(25),
        "elapsed {:?} should cover the injected 25 ms delay",
        report.elapsed
    );
}

#[test]
fn test_error_output_classifies_as_error() {
    let fake = ScriptedCompiler::with_output(Stage::Ast, "Error: unexpected token");
    let runner = StageRunner::with_module(Arc::new(fake));

    let report = runner.run(Stage::Ast, "int x =").unwrap();
    assert_eq!(report.verdict, Verdict::Error);
    assert_eq!(report.success_rate(), "0%");
}

#[test]
fn test_optimize_recomputes_ir_exactly_once() {
    let fake = Arc::new(ScriptedCompiler::default());
    let runner = StageRunner::with_module(fake.clone());

    runner.run(Stage::OptimizedIr, "int x = 1;").unwrap();
    assert_eq!(fake.calls_to(Stage::Ir), 1);
    assert_eq!(fake.calls_to(Stage::OptimizedIr), 1);
    assert_eq!(fake.calls_to(Stage::Codegen), 0);
}

#[test]
fn test_codegen_recomputes_full_prefix_each_action() {
    let fake = Arc::new(ScriptedCompiler::default());
    let runner = StageRunner::with_module(fake.clone());

    runner.run(Stage::Codegen, "int x = 1;").unwrap();
    runner.run(Stage::Codegen, "int x = 1;").unwrap();

    // No caching between actions: the whole prefix runs again.
    assert_eq!(fake.calls_to(Stage::Ir), 2);
    assert_eq!(fake.calls_to(Stage::OptimizedIr), 2);
    assert_eq!(fake.calls_to(Stage::Codegen), 2);
    assert_eq!(fake.calls_to(Stage::Lex), 0);
}

#[test]
fn test_failing_prefix_aborts_the_action() {
    let fake = Arc::new(BrokenOptimizer::default());
    let runner = StageRunner::with_module(fake.clone());

    match runner.run(Stage::Codegen, "int x = 1;") {
        Err(RunnerError::Stage { stage, .. }) => assert_eq!(stage, Stage::OptimizedIr),
        other => panic!("expected stage error, got {other:?}"),
    }
    assert_eq!(fake.codegen_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unloaded_module_never_reaches_the_adapter() {
    let slot = Arc::new(ModuleSlot::new());
    let runner = StageRunner::new(slot.clone());

    assert!(matches!(
        runner.run(Stage::Codegen, "int x = 1;"),
        Err(RunnerError::ModuleNotReady)
    ));

    // Loading completes later; the same runner starts working.
    let fake = Arc::new(ScriptedCompiler::with_output(Stage::Codegen, "mov eax, 1"));
    slot.install(fake).unwrap();
    assert_eq!(runner.run(Stage::Codegen, "x").unwrap().text, "mov eax, 1");
}

#[test]
fn test_end_to_end_lex_action_fills_the_output_pane() {
    let token_text = "KW(int) IDENT(x) OP(=) NUM(1) SEMI";
    let fake = Arc::new(ScriptedCompiler::with_output(Stage::Lex, token_text));
    let runner = StageRunner::with_module(fake);
    let mut panels = Panels::new();

    let report = runner.run(Stage::Lex, "int x = 1;").unwrap();
    panels.apply_report(&report);

    assert_eq!(panels.output, token_text);
    assert_eq!(panels.status, "Success");
    assert_eq!(panels.success_rate, "100%");
}
