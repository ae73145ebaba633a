use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use cli::{render_moves, render_summary, SideArg};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every pseudo-legal move of one side.
    Moves {
        layout: String,
        #[arg(long, value_enum, default_value_t = SideArg::First)]
        side: SideArg,
        /// Print the moves as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Count moves and captures per piece.
    Summary {
        layout: String,
        #[arg(long, value_enum, default_value_t = SideArg::First)]
        side: SideArg,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    enable_logging();

    let out = match cli.command {
        Commands::Moves { layout, side, json } => render_moves(&layout, side.into(), json)?,
        Commands::Summary { layout, side } => render_summary(&layout, side.into())?,
    };
    print!("{}", out);
    Ok(())
}

fn enable_logging() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );

    Registry::default().with(stderr_layer).init();
}
