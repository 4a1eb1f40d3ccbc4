//! tessel CLI
//!
//! Region scanning for code mixed with quoted and interpolating literals.

use std::path::{Path, PathBuf};

use tesselc::commands::{check_files, regions_file, stop_file};
use tesselc::CliError;

fn main() {
    tesselc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "regions" => match args.get(2) {
            Some(path) => regions_file(Path::new(path)),
            None => Err(CliError::Usage("usage: tessel regions <file>".to_owned())),
        },
        "check" => {
            let paths: Vec<PathBuf> = args[2..].iter().map(PathBuf::from).collect();
            check_files(&paths).map(|_| ())
        }
        "stop" => match (args.get(2), args.get(3)) {
            (Some(path), Some(needle)) => stop_file(Path::new(path), needle),
            _ => Err(CliError::Usage("usage: tessel stop <file> <char>".to_owned())),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("tessel {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(err.exit_code());
    }
}

fn print_usage() {
    println!("tessel - region scanner for code with quoted and interpolating literals");
    println!();
    println!("Usage: tessel <command> [args]");
    println!();
    println!("Commands:");
    println!("  regions <file>       Print the characters of each region");
    println!("  check <file>...      Fail if any file ends with open literals or braces");
    println!("  stop <file> <char>   Find the first occurrence of <char> in code");
    println!("  help                 Show this message");
    println!("  version              Show version");
    println!();
    println!("Set RUST_LOG=tessel_scan=trace to trace region transitions.");
}
