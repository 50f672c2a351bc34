//! Interactive session
//!
//! The terminal analog of the original playground page: a persistent
//! source buffer, one command per stage action, a theme toggle, and a
//! re-rendered panel surface after every action. Lines starting with `:`
//! are session commands, the five action words trigger the pipeline, and
//! any other line is appended to the source buffer.

use std::fs;

use cxplay_module::Stage;
use cxplay_runner::{Panels, StageRunner, Theme};

use crate::render::render;

const HELP: &str = "\
commands:
  lex | ast | ir | opt | codegen   run a stage on the current source
  :load FILE                       replace the source with a file's contents
  :show                            print the current source
  :clear                           clear the source
  :theme                           toggle dark/light
  :help                            this text
  :quit                            leave
anything else is appended to the source buffer";

/// One reply of the session loop
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Reply {
            text: String::new(),
            quit: true,
        }
    }
}

/// Interactive playground session state
pub struct Session {
    runner: StageRunner,
    panels: Panels,
    theme: Theme,
    source: String,
}

impl Session {
    pub fn new(runner: StageRunner, theme: Theme) -> Self {
        Self {
            runner,
            panels: Panels::new(),
            theme,
            source: String::new(),
        }
    }

    /// Replace the source buffer
    pub fn set_source(&mut self, source: String) {
        self.source = source;
    }

    /// Handle one input line
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::say("");
        }

        if let Some(stage) = parse_action(line) {
            return self.run_action(stage);
        }

        match line {
            ":quit" | ":q" => Reply::quit(),
            ":help" => Reply::say(HELP),
            ":theme" => {
                self.theme.toggle();
                Reply::say(format!("theme: {}", self.theme.name()))
            }
            ":clear" => {
                self.source.clear();
                Reply::say("source cleared")
            }
            ":show" => {
                if self.source.is_empty() {
                    Reply::say("(source is empty)")
                } else {
                    Reply::say(self.source.clone())
                }
            }
            _ if line.starts_with(":load ") => self.load_file(line[":load ".len()..].trim()),
            _ if line.starts_with(':') => Reply::say(format!(
                "unknown command '{line}' (:help for commands)"
            )),
            _ => {
                self.source.push_str(line);
                self.source.push('\n');
                Reply::say("")
            }
        }
    }

    fn load_file(&mut self, path: &str) -> Reply {
        match fs::read_to_string(path) {
            Ok(text) => {
                let lines = text.lines().count();
                self.source = text;
                Reply::say(format!("loaded {path} ({lines} lines)"))
            }
            Err(e) => Reply::say(format!("cannot read '{path}': {e}")),
        }
    }

    /// Run one stage action and re-render the full surface. Errors are
    /// folded into the panels, never fatal to the session.
    fn run_action(&mut self, stage: Stage) -> Reply {
        match self.runner.run(stage, &self.source) {
            Ok(report) => self.panels.apply_report(&report),
            Err(error) => self.panels.apply_error(&error),
        }
        Reply::say(render(&self.panels, self.theme))
    }
}

/// Map an action word to its stage
pub fn parse_action(word: &str) -> Option<Stage> {
    match word {
        "lex" => Some(Stage::Lex),
        "ast" => Some(Stage::Ast),
        "ir" => Some(Stage::Ir),
        "opt" => Some(Stage::OptimizedIr),
        "codegen" => Some(Stage::Codegen),
        _ => None,
    }
}
