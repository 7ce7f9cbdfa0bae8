use crate::cli::registry::{CommandEntry, CommandRegistry};

/// One `NAME|description;` item per registered command, on a single line.
pub fn overview(registry: &CommandRegistry) -> String {
    registry
        .list()
        .map(|entry| format!("{}|{};", entry.name, entry.description))
        .collect()
}

pub fn command(entry: &CommandEntry) -> String {
    format!("{}|{}|{}", entry.name, entry.description, entry.usage)
}

#[cfg(test)]
mod tests {
    use crate::cli::context::{CliMode, ShellContext};
    use crate::config::EngineConfig;

    #[test]
    fn overview_lists_protocol_commands() {
        let mut shell = ShellContext::new(CliMode::Script, EngineConfig::default());
        let text = shell.process_line("HELP").unwrap();
        for name in ["ADD", "BALANCE", "TOP_EXPENSES", "FRAUD", "SUGGEST", "EXIT"] {
            assert!(text.contains(&format!("{name}|")), "missing {name} in {text}");
        }
        assert!(!text.contains('\n'));
        assert!(text.starts_with("ADD|Record a transaction;"));
    }

    #[test]
    fn command_help_is_case_insensitive() {
        let mut shell = ShellContext::new(CliMode::Script, EngineConfig::default());
        assert_eq!(
            shell.process_line("help budget").as_deref(),
            Some("BUDGET|Compare total spending against a budget|BUDGET <amount>")
        );
    }
}
