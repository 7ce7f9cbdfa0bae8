use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let revision = capture("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    let tree = match capture("git", &["status", "--porcelain"]) {
        Some(status) if status.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let rustc = capture("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());

    emit("REVISION", &format!("{revision} ({tree})"));
    emit("TIMESTAMP", &built_at);
    emit("TARGET", &env::var("TARGET").unwrap_or_default());
    emit("PROFILE", &env::var("PROFILE").unwrap_or_default());
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=LEDGER_ENGINE_BUILD_{key}={value}");
}

/// Runs a tool and returns its trimmed stdout when it exits successfully.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
