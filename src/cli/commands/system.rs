use crate::cli::context::{CommandError, ShellContext};
use crate::cli::help;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "HELP",
            "Show available commands",
            "HELP [command]",
            cmd_help,
        ),
        CommandEntry::new("VERSION", "Show build metadata", "VERSION", cmd_version),
        CommandEntry::new("EXIT", "End the session", "EXIT", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    match args.first() {
        Some(name) => match context.command(name) {
            Some(entry) => Ok(help::command(entry)),
            None => Err(CommandError::InvalidArguments(format!(
                "No help for unknown command `{name}`"
            ))),
        },
        None => Ok(help::overview(&context.registry)),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Ok(build_info::current().summary())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Err(CommandError::ExitRequested)
}
