use colored::Colorize;

use crate::cli::context::CliMode;

/// Prints one response. Script mode writes the protocol line verbatim;
/// interactive mode highlights error responses.
pub fn respond(mode: CliMode, response: &str) {
    match mode {
        CliMode::Script => println!("{response}"),
        CliMode::Interactive if response.starts_with("ERROR|") => {
            println!("{}", response.bright_red())
        }
        CliMode::Interactive => println!("{response}"),
    }
}

pub fn banner() {
    println!("{}", "Ledger Engine".bold());
    println!("Type `HELP` to list commands, `EXIT` to quit.");
}

pub fn info(message: &str) {
    println!("{}", message.bright_cyan());
}
