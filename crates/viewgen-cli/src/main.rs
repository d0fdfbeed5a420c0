//! viewgen CLI - View controller scaffolding generator
//!
//! Usage:
//! - `viewgen <schema_file> <prefix> {short|long}` - Create missing view
//!   controller files and print factory declarations
//! - `viewgen scan <prefix>` - Print factory declarations for existing `.xib` files

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use viewgen_core::Mode;

mod generate;
mod logging;
mod scan;

#[derive(Parser)]
#[command(name = "viewgen")]
#[command(author, version, about = "Scaffolding generator for view factory controllers", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct GenerateArgs {
    /// Schema file listing sections and their views
    schema: Option<PathBuf>,

    /// Class prefix prepended to every generated name (e.g. WM)
    prefix: Option<String>,

    /// Suffix for names without one: short (VC) or long (ViewController)
    mode: Option<Mode>,

    /// Path to a viewgen.toml naming configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the *.template files (default: built-in templates)
    #[arg(short, long)]
    template_dir: Option<PathBuf>,

    /// Directory to create files in (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only print declarations, do not create any files
    #[arg(long)]
    no_files: bool,

    /// Surplus positionals; their presence prints the usage message
    #[arg(hide = true)]
    extra: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print declarations for view controllers found in existing .xib files
    Scan {
        /// Class prefix stripped from discovered names
        prefix: String,

        /// Directory to search (default: current directory)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Path to a viewgen.toml naming configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn print_usage() {
    println!("Usage: viewgen <schema_file> <file_prefix> {{short|long}}");
    println!("       where short suffix is VC and long suffix is ViewController");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Scan {
            prefix,
            root,
            config,
        }) => {
            scan::run(&prefix, &root, config)?;
        }
        None => {
            let GenerateArgs {
                schema,
                prefix,
                mode,
                config,
                template_dir,
                output_dir,
                no_files,
                extra,
            } = cli.generate;

            let (Some(schema), Some(prefix), Some(mode), true) =
                (schema, prefix, mode, extra.is_empty())
            else {
                print_usage();
                return Ok(());
            };

            generate::run(generate::GenerateOptions {
                schema,
                prefix,
                mode,
                config,
                template_dir,
                output_dir,
                write_files: !no_files,
            })?;
        }
    }

    Ok(())
}
