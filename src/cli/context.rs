//! Shell state and command dispatch.

use strsim::levenshtein;
use thiserror::Error;
use tracing::warn;

use crate::config::EngineConfig;
use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::commands;
use super::registry::{CommandEntry, CommandRegistry};

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{name}`{hint}")]
    UnknownCommand { name: String, hint: String },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("exit requested")]
    ExitRequested,
}

/// Owns the engine for one session and routes protocol lines to handlers.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config: EngineConfig,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: EngineConfig) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            ledger: Ledger::with_config(&config),
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Runs one protocol line. Returns the response to print, or `None` for a
    /// blank line or `EXIT` (which also stops the session). Failures never
    /// escape: they become an `ERROR|<message>` response.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let tokens = tokenize(line);
        let (raw, rest) = tokens.split_first()?;
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(raw, &args) {
            Ok(response) => Some(response),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                None
            }
            Err(err) => {
                warn!(command = %raw, error = %err, "command failed");
                Some(error_response(&err))
            }
        }
    }

    pub(crate) fn dispatch(&mut self, raw: &str, args: &[&str]) -> Result<String, CommandError> {
        let handler = match self.registry.get(raw) {
            Some(entry) => entry.handler,
            None => {
                return Err(CommandError::UnknownCommand {
                    name: raw.to_string(),
                    hint: self.suggest_command(raw),
                })
            }
        };
        handler(self, args)
    }

    fn suggest_command(&self, input: &str) -> String {
        let needle = input.to_ascii_uppercase();
        self.registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, best)| format!(" (did you mean `{best}`?)"))
            .unwrap_or_default()
    }
}

const BACKSLASH_MARK: char = '\u{1}';
const APOSTROPHE_MARK: char = '\u{2}';

/// Splits on whitespace. Balanced double quotes group words; apostrophes
/// and backslashes are always literal.
fn tokenize(line: &str) -> Vec<String> {
    if line.contains('"') {
        let masked = line
            .replace('\\', &BACKSLASH_MARK.to_string())
            .replace('\'', &APOSTROPHE_MARK.to_string());
        if let Ok(tokens) = shell_words::split(&masked) {
            return tokens
                .into_iter()
                .map(|token| {
                    token
                        .replace(BACKSLASH_MARK, "\\")
                        .replace(APOSTROPHE_MARK, "'")
                })
                .collect();
        }
    }
    line.split_whitespace().map(str::to_string).collect()
}

fn error_response(err: &CommandError) -> String {
    format!("ERROR|{err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ShellContext {
        ShellContext::new(CliMode::Script, EngineConfig::default())
    }

    #[test]
    fn blank_lines_produce_no_response() {
        let mut shell = context();
        assert_eq!(shell.process_line("   "), None);
        assert!(shell.running);
    }

    #[test]
    fn unknown_command_suggests_closest_name() {
        let mut shell = context();
        assert_eq!(
            shell.process_line("FRUAD").as_deref(),
            Some("ERROR|Unknown command `FRUAD` (did you mean `FRAUD`?)")
        );
        assert_eq!(
            shell.process_line("xyzzyplugh").as_deref(),
            Some("ERROR|Unknown command `xyzzyplugh`")
        );
    }

    #[test]
    fn exit_stops_the_session() {
        let mut shell = context();
        assert_eq!(shell.process_line("exit"), None);
        assert!(!shell.running);
    }

    #[test]
    fn unbalanced_quotes_fall_back_to_whitespace_split() {
        let mut shell = context();
        assert_eq!(
            shell.process_line("ADD 5 Food \"lunch 2024-01-01 expense").as_deref(),
            Some("SUCCESS|-5.000000")
        );
        assert_eq!(shell.ledger.list_all()[0].description, "\"lunch");
    }

    #[test]
    fn apostrophes_and_backslashes_stay_literal() {
        assert_eq!(
            tokenize("ADD 5 Food Joe's 2024-01-01 expense"),
            vec!["ADD", "5", "Food", "Joe's", "2024-01-01", "expense"]
        );
        assert_eq!(tokenize(r"SUGGEST a\b"), vec!["SUGGEST", r"a\b"]);
        assert_eq!(
            tokenize(r#"ADD 5 Food "Joe's \ diner" 2024-01-01 expense"#),
            vec!["ADD", "5", "Food", r"Joe's \ diner", "2024-01-01", "expense"]
        );
    }
}
