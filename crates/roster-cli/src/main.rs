//! Enrollment roster builder CLI.

use clap::Parser;
use roster_cli::commands::{RunConfig, run};
use roster_cli::logging::{LogConfig, init_logging};
use roster_ingest::SUPPORTED_EXTENSIONS;

mod cli;
mod summary;

use crate::cli::Cli;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::from_env()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let Some(input) = cli.input_path() else {
        print_usage();
        return;
    };
    // Input and export problems are reported, never turned into a failing status.
    match run(&input, &RunConfig::from_env()) {
        Ok(result) => print_summary(&result),
        Err(error) => eprintln!("error: {error:#}"),
    }
}

fn print_usage() {
    println!("Source document not specified.");
    println!();
    println!("Usage:\n  roster <PATH>");
    println!();
    println!("For example:\n  roster my_folder/survey.xlsx");
    println!();
    println!("Supported formats: {}", SUPPORTED_EXTENSIONS.join(", "));
}
