//! CLI argument definitions for the cafe API.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cafe & Wifi API -- laptop-friendly cafes over HTTP.
#[derive(Parser)]
#[command(
    name = "cafe",
    version,
    about = "Cafe & Wifi API -- laptop-friendly cafes over HTTP",
    long_about = "Serves a small JSON API for finding, adding, re-pricing and closing cafes, \
                  backed by a local SQLite file."
)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Address to bind the HTTP server to.
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on.
        #[arg(long, short)]
        port: Option<u16>,

        /// SQLite database file.
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Print stored cafes.
    List {
        /// Only cafes at this location (case does not matter).
        #[arg(long, short)]
        location: Option<String>,
    },

    /// Show configuration and database health.
    Status,
}
