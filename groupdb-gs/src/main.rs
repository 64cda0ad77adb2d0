//! groupdb-gs (Group Service) - REST microservice for the group catalog

use anyhow::Result;
use clap::Parser;
use groupdb_common::config;
use groupdb_gs::{build_router, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "groupdb-gs", about = "Group catalog REST microservice")]
struct Args {
    /// Root folder holding groups.db (overrides env/config/default)
    #[arg(long)]
    root_folder: Option<String>,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "GROUPDB_BIND", default_value = "127.0.0.1:5780")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber first so startup is observable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting groupdb Group Service (groupdb-gs) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Root folder: CLI > env > config file > OS default
    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    let db_path = config::prepare_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = groupdb_common::db::init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("groupdb-gs listening on http://{}", args.bind);
    info!("Health check: http://{}/health", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
