//! HTTP server command for the trivia API
//!
//! Picks a store (Postgres or in-memory), optionally bootstraps the schema,
//! then serves until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations, DEFAULT_MAX_CONNECTIONS};
use trivia_server::models::NewQuestion;
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig, TriviaStore};

/// Categories an `--in-memory` store starts with. Questions are left empty
/// and can be added through `POST /questions`.
const STARTER_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "TRIVIA_HOST")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', default_value_t = 5000, env = "TRIVIA_PORT")]
    pub port: u16,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled Postgres connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create the categories/questions tables if they are missing
    #[arg(long)]
    pub migrate: bool,

    /// Serve from an in-memory store with the six starter categories and no
    /// questions instead of Postgres (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build the store the server will run against.
async fn open_store(args: &ServeArgs) -> Result<Arc<dyn TriviaStore>> {
    if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        let store = MemoryStore::with_data(STARTER_CATEGORIES, std::iter::empty::<NewQuestion>());
        return Ok(Arc::new(store));
    }

    let Some(database_url) = args.database_url.as_deref() else {
        bail!("DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, or pass --in-memory");
    };

    let pool = create_pool_with_options(database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    Ok(Arc::new(PgStore::new(pool)))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = open_store(&args).await?;
    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
