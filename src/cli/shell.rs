use std::{
    borrow::Cow,
    env,
    io::{self, BufRead, IsTerminal},
};

use dialoguer::Confirm;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use tracing::info;

use crate::cli::context::{CliMode, ShellContext};
use crate::cli::output;
use crate::config::ConfigManager;
use crate::errors::CliError;

const PROMPT: &str = "ledger> ";

/// Runs a session on stdin/stdout. Script mode is used when
/// `LEDGER_ENGINE_CLI_SCRIPT` is set or stdin is not a terminal.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os("LEDGER_ENGINE_CLI_SCRIPT").is_some() || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let manager = ConfigManager::new();
    let config = match mode {
        CliMode::Interactive => manager.load_or_init()?,
        CliMode::Script => manager.load()?,
    };
    info!(?mode, config = %manager.path().display(), "session started");

    let mut context = ShellContext::new(mode, config);
    let result = match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    };
    info!(transactions = context.ledger.len(), "session ended");
    result
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    output::banner();

    while context.running {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if let Some(response) = context.process_line(trimmed) {
                    output::respond(context.mode, &response);
                }
            }
            Err(ReadlineError::Interrupted) => {
                if Confirm::new().with_prompt("Exit shell?").default(true).interact()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        if let Some(response) = context.process_line(&line?) {
            output::respond(context.mode, &response);
        }
    }
    Ok(())
}

/// Completes command names at the start of the line.
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        if prefix[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let needle = prefix[start..].to_ascii_uppercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}
