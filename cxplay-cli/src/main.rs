//! cxplay CLI - command line interface
//!
//! Project-based startup: the compiler `.wasm` path and session defaults
//! come from `playground.json`. One-shot subcommands run a single stage
//! action; without a subcommand the interactive session starts.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use cxplay_config::{ProjectConfig, ThemeChoice};
use cxplay_module::{ModuleSlot, Stage, WasmCompiler};
use cxplay_runner::{Panels, StageRunner, Theme};

mod config;
mod logging;
mod render;
mod session;

use crate::config::{parse_level, to_level, LogConfig};
use crate::render::render;
use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "cxplay",
    about = "Stage-by-stage playground for a precompiled Cx compiler module",
    version
)]
struct Cli {
    /// Project file path
    #[arg(value_name = "CONFIG", default_value = "playground.json")]
    config: PathBuf,

    /// Compiler module path (overrides the project file)
    #[arg(long)]
    module: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize source text
    Lex(StageArgs),
    /// Parse source text to an AST dump
    Ast(StageArgs),
    /// Lower source text to IR
    Ir(StageArgs),
    /// Optimize (re-runs IR construction on the source)
    Opt(StageArgs),
    /// Generate code (re-runs IR construction and optimization)
    Codegen(StageArgs),
    /// Interactive session (the default)
    Repl,
}

#[derive(Args)]
struct StageArgs {
    /// Source file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(message) => {
            eprintln!("error: {message}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, String> {
    let project = load_project(&cli)?;

    let level = cli
        .log_level
        .as_deref()
        .map(|s| parse_level(s).ok_or_else(|| format!("unknown log level '{s}'")))
        .transpose()?
        .or(project.log_level.map(to_level));
    let log_config = level.map(LogConfig::with_global).unwrap_or_default();
    logging::init(&log_config);

    // Stage actions stay disabled until this install completes.
    let module_path = cli.module.clone().unwrap_or_else(|| project.module.clone());
    let slot = Arc::new(ModuleSlot::new());
    let runner = StageRunner::new(slot.clone());
    let compiler = WasmCompiler::from_file(&module_path).map_err(|e| e.to_string())?;
    slot.install(Arc::new(compiler)).map_err(|e| e.to_string())?;
    info!(target: "cxplay::cli", module = %module_path.display(), "compiler module ready");

    let theme = match project.theme {
        Some(ThemeChoice::Light) => Theme::Light,
        _ => Theme::Dark,
    };

    match cli.command {
        Some(Command::Lex(args)) => one_shot(&runner, Stage::Lex, &args, theme),
        Some(Command::Ast(args)) => one_shot(&runner, Stage::Ast, &args, theme),
        Some(Command::Ir(args)) => one_shot(&runner, Stage::Ir, &args, theme),
        Some(Command::Opt(args)) => one_shot(&runner, Stage::OptimizedIr, &args, theme),
        Some(Command::Codegen(args)) => one_shot(&runner, Stage::Codegen, &args, theme),
        Some(Command::Repl) | None => interactive(runner, theme, project.entry.as_deref()),
    }
}

/// Read the project file; a `--module` override works without one
fn load_project(cli: &Cli) -> Result<ProjectConfig, String> {
    if cli.config.exists() {
        let text = fs::read_to_string(&cli.config)
            .map_err(|e| format!("cannot read '{}': {e}", cli.config.display()))?;
        ProjectConfig::from_json(&text)
            .map_err(|e| format!("failed to parse '{}': {e}", cli.config.display()))
    } else if let Some(module) = cli.module.clone() {
        Ok(ProjectConfig {
            module,
            entry: None,
            theme: None,
            log_level: None,
        })
    } else {
        Err(format!(
            "'{}' not found\n\nthis directory is not a cxplay project.\nhint: create '{}' with a \"module\" field, or pass --module",
            cli.config.display(),
            cli.config.display()
        ))
    }
}

/// Run one stage action and exit; the exit code follows the verdict
fn one_shot(
    runner: &StageRunner,
    stage: Stage,
    args: &StageArgs,
    theme: Theme,
) -> Result<i32, String> {
    let source = read_source(args)?;
    let mut panels = Panels::new();
    match runner.run(stage, &source) {
        Ok(report) => {
            panels.apply_report(&report);
            println!("{}", render(&panels, theme));
            Ok(if report.is_success() { 0 } else { 1 })
        }
        Err(error) => {
            panels.apply_error(&error);
            println!("{}", render(&panels, theme));
            Ok(1)
        }
    }
}

fn read_source(args: &StageArgs) -> Result<String, String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

fn interactive(runner: StageRunner, theme: Theme, entry: Option<&Path>) -> Result<i32, String> {
    let mut session = Session::new(runner, theme);
    if let Some(path) = entry {
        match fs::read_to_string(path) {
            Ok(text) => session.set_source(text),
            Err(e) => eprintln!("cannot read entry '{}': {e}", path.display()),
        }
    }

    println!("cxplay - stage playground (:help for commands)");
    print_prompt();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("stdin error: {e}"))?;
        let reply = session.handle_line(&line);
        if !reply.text.is_empty() {
            println!("{}", reply.text);
        }
        if reply.quit {
            break;
        }
        print_prompt();
    }
    Ok(0)
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
