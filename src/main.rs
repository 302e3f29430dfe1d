use std::io::IsTerminal;

use clap::Parser;
use tracing::Level;

use dirlines::cli::{Cli, ColorChoice};
use dirlines::{DirLinesError, EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR, Walker};

const fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn use_ansi(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(cli.color))
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "run failed");
            eprintln!("Error: {}", e.detail());
            if e.is_usage() {
                EXIT_USAGE_ERROR
            } else {
                EXIT_RUNTIME_ERROR
            }
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> dirlines::Result<()> {
    let mut walker = build_walker(cli)?;
    walker.count_lines(&cli.dir)?;
    walker.print_with(cli.format)
}

fn build_walker(cli: &Cli) -> dirlines::Result<Walker> {
    if cli.dir.as_os_str().is_empty() {
        return Err(DirLinesError::Usage("Path cannot be blank".to_string()));
    }

    let mut walker = Walker::new();
    if let Some(exts) = cli.accepted_extensions() {
        walker.with_accepted_extensions(exts);
    }
    if cli.omit_blank {
        walker.with_omit_blank();
    }
    Ok(walker)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
