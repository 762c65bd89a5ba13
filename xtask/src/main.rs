use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

const CORE_PACKAGE: &str = "taskswitch-core";
const SHELL_PACKAGE: &str = "taskswitch";

#[derive(Parser)]
#[command(name = "cargo-xtask", version, about = "Project automation tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format Rust sources
    Fmt,
    /// Run format and lint checks
    Check {
        /// Also lint the Tauri shell (needs the platform webview toolchain)
        #[arg(long)]
        desktop: bool,
    },
    /// Run the headless core test suite
    Test,
    /// Build the release bundle with the Tauri CLI
    Package,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let shell = Shell::new()?;
    shell.change_dir(project_root()?);

    match cli.command {
        Command::Fmt => run_fmt(&shell),
        Command::Check { desktop } => run_check(&shell, desktop),
        Command::Test => run_test(&shell),
        Command::Package => run_package(&shell),
    }
}

fn run_fmt(shell: &Shell) -> Result<()> {
    cmd!(shell, "cargo fmt --all")
        .run()
        .context("failed to run cargo fmt")
}

fn run_check(shell: &Shell, desktop: bool) -> Result<()> {
    cmd!(shell, "cargo fmt --all -- --check")
        .run()
        .context("cargo fmt --check failed")?;

    let packages: &[&str] = if desktop {
        &[CORE_PACKAGE, SHELL_PACKAGE]
    } else {
        &[CORE_PACKAGE]
    };
    for package in packages {
        cmd!(
            shell,
            "cargo clippy --package {package} --all-targets -- -D warnings"
        )
        .run()
        .with_context(|| format!("cargo clippy failed for {package}"))?;
    }
    Ok(())
}

fn run_test(shell: &Shell) -> Result<()> {
    cmd!(shell, "cargo test --package {CORE_PACKAGE}")
        .run()
        .context("core tests failed")
}

fn run_package(shell: &Shell) -> Result<()> {
    let _dir = shell.push_dir("src-tauri");
    cmd!(shell, "cargo tauri build")
        .run()
        .context("tauri build failed")
}

fn project_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .context("xtask manifest has no parent directory")
}
