//! wasmi-backed compiler module adapter
//!
//! The external toolchain is an emscripten-style wasm binary whose stage
//! exports each take a pointer to a NUL-terminated source string and return
//! a pointer to a NUL-terminated result string. This adapter owns the
//! instantiated module and presents those exports as plain `&str -> String`
//! calls behind [`CompilerModule`].
//!
//! Required exports: `memory`, `malloc`, and the five stage entry points
//! (`run_lexer`, `run_ast`, `run_ir`, `run_optimized_ir`, `run_codegen`).
//! All of them are resolved at construction, so a malformed module fails at
//! load time rather than on the first user action.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace};
use wasmi::{Engine, Instance, Linker, Memory, Module, Store, TypedFunc};

use crate::error::ModuleError;
use crate::stage::Stage;
use crate::CompilerModule;

/// The external compiler toolchain, loaded from a `.wasm` file
pub struct WasmCompiler {
    inner: Mutex<Inner>,
}

struct Inner {
    store: Store<()>,
    memory: Memory,
    malloc: TypedFunc<i32, i32>,
    stages: StageFuncs,
}

struct StageFuncs {
    lex: TypedFunc<i32, i32>,
    ast: TypedFunc<i32, i32>,
    ir: TypedFunc<i32, i32>,
    optimized_ir: TypedFunc<i32, i32>,
    codegen: TypedFunc<i32, i32>,
}

impl StageFuncs {
    fn get(&self, stage: Stage) -> TypedFunc<i32, i32> {
        match stage {
            Stage::Lex => self.lex,
            Stage::Ast => self.ast,
            Stage::Ir => self.ir,
            Stage::OptimizedIr => self.optimized_ir,
            Stage::Codegen => self.codegen,
        }
    }
}

impl WasmCompiler {
    /// Load and instantiate the compiler module from a file
    pub fn from_file(path: &Path) -> Result<Self, ModuleError> {
        let bytes = fs::read(path).map_err(|source| ModuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let compiler = Self::from_bytes(&bytes)?;
        debug!(
            target: "cxplay::module",
            path = %path.display(),
            size = bytes.len(),
            "compiler module loaded"
        );
        Ok(compiler)
    }

    /// Instantiate the compiler module from raw wasm bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        let engine = Engine::default();
        let module = Module::new(&engine, bytes)
            .map_err(|e| ModuleError::Instantiate(e.to_string()))?;
        let linker = Linker::new(&engine);
        let mut store = Store::new(&engine, ());
        let instance = linker
            .instantiate(&mut store, &module)
            .map_err(|e| ModuleError::Instantiate(e.to_string()))?
            .start(&mut store)
            .map_err(|e| ModuleError::Instantiate(e.to_string()))?;

        let memory = instance
            .get_memory(&store, "memory")
            .ok_or_else(|| ModuleError::MissingExport {
                name: "memory".to_string(),
            })?;
        let malloc = typed_export(&instance, &store, "malloc")?;
        let stages = StageFuncs {
            lex: typed_export(&instance, &store, Stage::Lex.export_name())?,
            ast: typed_export(&instance, &store, Stage::Ast.export_name())?,
            ir: typed_export(&instance, &store, Stage::Ir.export_name())?,
            optimized_ir: typed_export(&instance, &store, Stage::OptimizedIr.export_name())?,
            codegen: typed_export(&instance, &store, Stage::Codegen.export_name())?,
        };

        Ok(Self {
            inner: Mutex::new(Inner {
                store,
                memory,
                malloc,
                stages,
            }),
        })
    }

    /// Write the input into module memory, invoke the stage export, and
    /// copy the result string back out verbatim.
    fn call(&self, stage: Stage, input: &str) -> Result<String, ModuleError> {
        // The store is single-threaded state; the mutex serializes callers
        // without supporting concurrent stage invocations.
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Inner {
            store,
            memory,
            malloc,
            stages,
        } = &mut *inner;

        let bytes = input.as_bytes();
        let len = i32::try_from(bytes.len() + 1).map_err(|_| ModuleError::SourceTooLarge)?;
        let ptr = malloc
            .call(&mut *store, len)
            .map_err(|e| ModuleError::Trap {
                stage,
                message: e.to_string(),
            })?;
        if ptr == 0 {
            return Err(ModuleError::AllocFailed);
        }

        let base = ptr as u32 as usize;
        memory
            .write(&mut *store, base, bytes)
            .map_err(|e| ModuleError::Memory {
                stage,
                message: e.to_string(),
            })?;
        memory
            .write(&mut *store, base + bytes.len(), &[0])
            .map_err(|e| ModuleError::Memory {
                stage,
                message: e.to_string(),
            })?;

        let result = stages
            .get(stage)
            .call(&mut *store, ptr)
            .map_err(|e| ModuleError::Trap {
                stage,
                message: e.to_string(),
            })?;
        if result == 0 {
            return Err(ModuleError::NullResult { stage });
        }

        let data = memory.data(&*store);
        let start = result as u32 as usize;
        let tail = data.get(start..).ok_or_else(|| ModuleError::Memory {
            stage,
            message: format!("result pointer {start:#x} is out of bounds"),
        })?;
        let end = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or(ModuleError::Unterminated { stage })?;
        let text = std::str::from_utf8(&tail[..end])
            .map_err(|_| ModuleError::InvalidUtf8 { stage })?
            .to_string();

        trace!(
            target: "cxplay::module",
            stage = %stage,
            input_len = bytes.len(),
            output_len = text.len(),
            "stage export returned"
        );
        Ok(text)
    }
}

impl CompilerModule for WasmCompiler {
    fn lex(&self, source: &str) -> Result<String, ModuleError> {
        self.call(Stage::Lex, source)
    }

    fn parse_ast(&self, source: &str) -> Result<String, ModuleError> {
        self.call(Stage::Ast, source)
    }

    fn build_ir(&self, source: &str) -> Result<String, ModuleError> {
        self.call(Stage::Ir, source)
    }

    fn optimize_ir(&self, ir: &str) -> Result<String, ModuleError> {
        self.call(Stage::OptimizedIr, ir)
    }

    fn generate_code(&self, optimized_ir: &str) -> Result<String, ModuleError> {
        self.call(Stage::Codegen, optimized_ir)
    }
}

fn typed_export(
    instance: &Instance,
    store: &Store<()>,
    name: &str,
) -> Result<TypedFunc<i32, i32>, ModuleError> {
    instance
        .get_typed_func::<i32, i32>(store, name)
        .map_err(|_| ModuleError::MissingExport {
            name: name.to_string(),
        })
}
