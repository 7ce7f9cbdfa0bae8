/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub revision: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        revision: option_env!("LEDGER_ENGINE_BUILD_REVISION").unwrap_or("unknown"),
        timestamp: option_env!("LEDGER_ENGINE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("LEDGER_ENGINE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("LEDGER_ENGINE_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("LEDGER_ENGINE_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    /// Single-line rendering used by the `VERSION` command.
    pub fn summary(&self) -> String {
        format!(
            "ledger_engine {}|{}|{}|{}|{}|{}",
            self.version, self.revision, self.timestamp, self.target, self.profile, self.rustc
        )
    }
}
