pub mod init;
pub mod migrations;
pub mod serve;

use crate::libs::config::ConfigOverrides;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the web server")]
    Serve(serve::ServeArgs),
    #[command(about = "Write the configuration file and create the database")]
    Init(init::InitArgs),
    #[command(about = "Inspect database migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Flags overriding the configured listener and database.
#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Address to bind, e.g. 0.0.0.0
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Path of the SQLite database file
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        ConfigOverrides {
            host: args.host,
            port: args.port,
            db: args.db,
        }
    }
}
