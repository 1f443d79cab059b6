//! `firstline-node` CLI entry-point.
//!
//! Available sub-commands:
//! - `describe` — print a descriptor as JSON (for host registration tooling).
//! - `check`    — validate the node descriptor.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "firstline-node",
    about = "Firstline company-search node for workflow hosts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a descriptor as JSON.
    Describe {
        #[arg(value_enum)]
        target: Target,
    },
    /// Validate the node descriptor.
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    /// The node descriptor.
    Node,
    /// The credential descriptor.
    Credentials,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Describe { target } => {
            let json = match target {
                Target::Node => serde_json::to_string_pretty(&firstline::firstline_node())?,
                Target::Credentials => serde_json::to_string_pretty(&firstline::firstline_api())?,
            };
            println!("{json}");
        }
        Command::Check => {
            let descriptor = firstline::firstline_node();
            match descriptor.validate() {
                Ok(()) => {
                    println!(
                        "✅ Node descriptor is valid ({} properties).",
                        descriptor.properties.len()
                    );
                }
                Err(e) => {
                    eprintln!("❌ Descriptor validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
