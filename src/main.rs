use anyhow::Context as _;
use clap::Parser;

mod cfg;

#[derive(Debug, Parser)]
#[command(name = "tripbook", version, about = "Travel photo-journal web service")]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = cfg::Cfg::from_env_or_default();
    let db_url = args.db_url.unwrap_or(cfg.db_url);

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db_url,
        cfg.db_connection_pool_size
    );
    let connections =
        tripbook_db_sqlite::Connections::init(&db_url, cfg.db_connection_pool_size)
            .context("Unable to initialize the database connection pool")?;
    tripbook_db_sqlite::run_embedded_database_migrations(
        connections
            .exclusive()
            .context("Unable to obtain a database connection for migrations")?,
    );

    tripbook_webserver::run(connections, args.enable_cors).await;
    Ok(())
}
