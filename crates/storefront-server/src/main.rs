use clap::{Parser, ValueEnum};
use log::LevelFilter;
use storefront_server::{AppState, router};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5050";

#[derive(Parser)]
#[command(name = "storefront-server")]
#[command(about = "Items CRUD, posts proxy and linux laptop listings over HTTP", long_about = None)]
struct Cli {
    #[arg(
        short = 'b',
        long = "bind",
        help = "Address to listen on (falls back to BIND_ADDRESS, then 127.0.0.1:5050)"
    )]
    bind: Option<String>,

    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let state = AppState::from_defaults()
        .inspect_err(|e| log::error!("Failed to initialise state: {e:?}"))?;
    log::info!("Loaded {} item(s)", state.store.len().await);

    let address = cli
        .bind
        .or_else(|| std::env::var("BIND_ADDRESS").ok())
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
    let tcp_listener = tokio::net::TcpListener::bind(&address).await?;

    log::info!("Server is listening on {}", address);

    axum::serve(tcp_listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {e}");
            }
            log::info!("Shutting down");
        })
        .await?;

    Ok(())
}
