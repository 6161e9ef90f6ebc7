//! Command-line interface for Vitrine.

use clap::{Parser, Subcommand};

/// Vitrine - portfolio and blog backend with an admin CMS API
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    #[command(alias = "-s", alias = "--serve")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}
