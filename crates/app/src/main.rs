use std::net::SocketAddr;

use app::config::print_usage;
use app::telemetry::init_tracing;
use app::{AppConfig, AppState, Invocation, build_router};
use services::{AppServices, Clock};
use tracing::info;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::from_process().inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })? {
        Invocation::Serve(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing(config.log_json);

    let services = AppServices::new_json_file(&config.data_file, Clock::system()).await?;
    info!(data_file = %config.data_file.display(), "tracker loaded");

    let app = build_router(AppState::new(services, config.report_title.as_str()));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
