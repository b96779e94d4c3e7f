use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use lfmt::LfmtError;
use lfmt::cli::{Cli, ColorMode};
use lfmt::config::Config;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when lfmt exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lfmt: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = io::BufWriter::new(stdout.lock());

    match lfmt::run(stdin.lock(), writer, &config, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LfmtError::Io(e)) => {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("lfmt: I/O error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("lfmt: {e}");
            ExitCode::from(1)
        }
    }
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `lfmt`, this causes the *upstream* writer (e.g. a
/// server process piping its logs) to receive a broken-pipe error when
/// `lfmt` exits. Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
