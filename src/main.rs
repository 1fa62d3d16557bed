//! rosbridge_launch CLI

use clap::{Parser, Subcommand};
use rosbridge_launch::{bridge, generate_record, write_record};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "rosbridge_launch")]
#[command(about = "Record generator for the rosbridge websocket + rosapi launch", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the launch description and write the process record
    Record {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// List the declared launch arguments
    Args,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Record { args, output } => {
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            generate_and_write(cli_args, &output)
        }
        Commands::Args => {
            print_arguments();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate_and_write(
    cli_args: HashMap<String, String>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = generate_record(cli_args)?;

    write_record(&record, output)?;

    log::info!("Generated record.json: {}", output.display());
    log::info!("  {} nodes", record.node.len());

    Ok(())
}

fn print_arguments() {
    let description = bridge::description();

    println!("Declared arguments:");
    for arg in description.arguments() {
        match &arg.default {
            Some(default) => println!("  {} (default: {})", arg.name, default),
            None => println!("  {} (required)", arg.name),
        }
        if let Some(text) = &arg.description {
            println!("      {}", text);
        }
    }
}
