//! kts: locate top-level blocks in Kotlin build scripts.

mod commands;
mod options;

use std::process::ExitCode;
use std::sync::Once;

use commands::CommandError;
use options::ExtractOptions;

static TRACING_INIT: Once = Once::new();

/// Installs a subscriber when `RUST_LOG` is set.
///
/// `KTS_LOG_TREE` switches from flat lines to indented span trees. Output
/// goes to stderr so it never mixes with extracted text.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("KTS_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];
    let result = match command.as_str() {
        "extract" => ExtractOptions::from_env()
            .parse(&args[2..], true)
            .and_then(|options| commands::extract(&options))
            .map(|found| if found { ExitCode::SUCCESS } else { ExitCode::from(1) }),
        "strip" => ExtractOptions::from_env()
            .parse(&args[2..], false)
            .and_then(|options| commands::strip(&options))
            .map(|()| ExitCode::SUCCESS),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "version" | "--version" | "-V" => {
            println!("kts {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    result.unwrap_or_else(|err| report(command, &err))
}

fn report(command: &str, err: &CommandError) -> ExitCode {
    eprintln!("error: {err}");
    if err.is_usage() {
        let range = if command == "extract" { " [--range]" } else { "" };
        eprintln!("Usage: kts {command} <file> [--keyword=<name>]{range}");
    }
    ExitCode::from(2)
}

fn print_usage() {
    println!("kts: top-level block extraction for Kotlin build scripts");
    println!();
    println!("Usage: kts <command> [options]");
    println!();
    println!("Commands:");
    println!("  extract <file>       Print the top-level block (exit 1 if absent)");
    println!("  strip <file>         Print the script with the block blanked out");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --keyword=<name>     Block keyword (default: $KTS_KEYWORD or buildscript)");
    println!("  --range              extract: print start..end instead of the text");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing (e.g. RUST_LOG=kts_extract=debug)");
    println!("  KTS_LOG_TREE         Render tracing output as an indented tree");
    println!();
    println!("Examples:");
    println!("  kts extract build.gradle.kts");
    println!("  kts extract settings.gradle.kts --keyword=plugins --range");
    println!("  kts strip build.gradle.kts");
}
