mod completions;
mod demo;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use demo::DemoCommand;
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gogen")]
#[command(version)]
#[command(about = "Render Go source files built with the gogen library")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Demo(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// `RUST_LOG` wins over `-v` when it is set.
    fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render one of the bundled demo programs
    Demo(DemoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
