use bom_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("BOM Processor - Bureau of Meteorology Rainfall Data Converter");
    println!("=============================================================");
    println!();
    println!("Convert BOM daily rainfall CSV exports into yearly and monthly");
    println!("rainfall statistics rendered as JSON.");
    println!();
    println!("USAGE:");
    println!("    bom <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a rainfall CSV file to JSON statistics");
    println!("    validate    Check a rainfall CSV file without producing output");
    println!("    version     Print version information");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert to a file, one fractional digit, with a summary:");
    println!("    bom convert -i IDCJAC0009_066062.csv -o rainfall.json --precision 1 -v");
    println!();
    println!("    # Check a file and list every skipped row:");
    println!("    bom validate -i IDCJAC0009_066062.csv --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bom <COMMAND> --help");
}
