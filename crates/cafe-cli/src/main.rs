//! CLI entry point for the cafe API.
//!
//! This binary provides the `cafe` command with subcommands for serving
//! the HTTP API, listing stored cafes, and checking system status.

mod cli;
mod config;
mod helpers;

use std::path::Path;

use anyhow::{Context, Result};
use cafe_store::{CafeStore, Database};
use cafe_web::WebServer;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::config::{CafeConfig, ENV_ADMIN_API_KEY};
use crate::helpers::{init_tracing, yes_no};

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            port,
            database,
        } => cmd_serve(&cli.config, bind, port, database).await,
        Commands::List { location } => cmd_list(&cli.config, location).await,
        Commands::Status => cmd_status(&cli.config).await,
    }
}

/// Load the config file and apply environment overrides.
fn load_config(path: &Path) -> Result<CafeConfig> {
    let mut config = CafeConfig::load(path)?;
    config.apply_env()?;
    Ok(config)
}

/// Open the configured database, creating its directory and table if needed.
async fn open_database(path: &Path) -> Result<Database> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let db = Database::open_and_init(path.to_path_buf())
        .await
        .with_context(|| format!("failed to open database at {}", path.display()))?;
    Ok(db)
}

// ---------------------------------------------------------------------------
// Subcommand: serve
// ---------------------------------------------------------------------------

async fn cmd_serve(
    config_path: &Path,
    bind: Option<String>,
    port: Option<u16>,
    database: Option<std::path::PathBuf>,
) -> Result<()> {
    init_tracing("info");

    let mut config = load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(database) = database {
        config.server.database = database;
    }
    info!(
        bind = %config.server.bind,
        port = config.server.port,
        admin_key = config.auth.admin_api_key.is_some(),
        "configuration loaded"
    );

    let db = open_database(&config.server.database).await?;
    info!(path = %config.server.database.display(), "store initialized");

    WebServer::new(config.web_config(), db)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("web server failed")
}

// ---------------------------------------------------------------------------
// Subcommand: list
// ---------------------------------------------------------------------------

async fn cmd_list(config_path: &Path, location: Option<String>) -> Result<()> {
    init_tracing("warn");

    let config = load_config(config_path)?;
    let store = CafeStore::new(open_database(&config.server.database).await?);

    let cafes = match &location {
        Some(loc) => store.find_by_location(loc).await,
        None => store.list_all().await,
    }
    .context("failed to read cafes")?;

    if cafes.is_empty() {
        match location {
            Some(loc) => println!("  No cafes at {loc}."),
            None => println!("  No cafes stored yet."),
        }
        return Ok(());
    }

    println!();
    for cafe in &cafes {
        println!("  #{:<4} {}  ({})", cafe.id, cafe.name, cafe.location);
        println!(
            "        seats {}  coffee {}  sockets {}  toilet {}  wifi {}  calls {}",
            cafe.seats,
            cafe.coffee_price.as_deref().unwrap_or("-"),
            yes_no(cafe.has_sockets),
            yes_no(cafe.has_toilet),
            yes_no(cafe.has_wifi),
            yes_no(cafe.can_take_calls),
        );
    }
    println!();
    println!("  {} cafe(s)", cafes.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: status
// ---------------------------------------------------------------------------

async fn cmd_status(config_path: &Path) -> Result<()> {
    init_tracing("warn");

    println!();
    println!("  Cafe API Status");
    println!("  ===============");
    println!();

    if config_path.exists() {
        println!("  Config:           OK ({})", config_path.display());
    } else {
        println!("  Config:           DEFAULTS ({} not found)", config_path.display());
    }

    let config = load_config(config_path)?;
    println!(
        "  Listen address:   {}:{}",
        config.server.bind, config.server.port
    );

    let db_path = &config.server.database;
    if db_path.exists() {
        let db = Database::open_and_init(db_path.clone())
            .await
            .context("failed to open database")?;
        if db.ping().await {
            let count = CafeStore::new(db).count().await?;
            println!("  Database:         OK ({}, {count} cafes)", db_path.display());
        } else {
            println!("  Database:         UNHEALTHY ({})", db_path.display());
        }
    } else {
        println!(
            "  Database:         NOT INITIALIZED ({} will be created on serve)",
            db_path.display()
        );
    }

    match config.auth.admin_api_key {
        Some(_) => println!("  Admin API key:    CONFIGURED"),
        None => println!("  Admin API key:    NOT SET (set {ENV_ADMIN_API_KEY} to allow deletes)"),
    }

    println!();

    Ok(())
}
