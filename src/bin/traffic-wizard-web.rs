use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use traffic_wizard::api::{ContentApi, HttpContentApi};
use traffic_wizard::config::Config;
use traffic_wizard::logging;
use traffic_wizard::web::{self, AppState};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct WebArgs {
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Backend base URL (overrides `TRAFFIC_WIZARD_BACKEND_URL`).
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    logging::init(logging::SERVER_DIRECTIVE).context("init logging")?;

    let args = WebArgs::parse();
    tracing::info!(?args, "starting traffic-wizard-web");

    let config = Config::for_listener(args.addr, args.backend_url.as_deref()).context("load config")?;
    tracing::info!(
        backend = %config.backend_url(),
        public_origin = %config.public_origin(),
        timeout_secs = config.request_timeout().as_secs(),
        "using backend"
    );
    let api: Arc<dyn ContentApi> =
        Arc::new(HttpContentApi::new(config.clone()).context("build backend client")?);
    let app = web::router(AppState::new(api, config));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.addr))?;
    tracing::info!(addr = %args.addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(web::shutdown_signal())
        .await
        .context("serve")?;
    Ok(())
}
