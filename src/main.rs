mod config;
mod data;
mod helpers;
mod models;
mod report;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "/etc/opt-report/config.yaml";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("opt_report=info,tower_http=info")),
        )
        .init();

    let explicit = std::env::args()
        .skip(1)
        .zip(std::env::args().skip(2))
        .find_map(|(k, v)| {
            if k == "-config" || k == "--config" {
                Some(v)
            } else {
                None
            }
        })
        .or_else(|| std::env::args().nth(1).filter(|a| !a.starts_with('-')));

    let cfg = match explicit {
        Some(path) => config::Config::load(&PathBuf::from(&path)).unwrap_or_else(|e| {
            eprintln!("error loading config: {}", e);
            std::process::exit(1);
        }),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if path.exists() {
                config::Config::load(&path).unwrap_or_else(|e| {
                    eprintln!("error loading config: {}", e);
                    std::process::exit(1);
                })
            } else {
                warn!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
                config::Config::default()
            }
        }
    };

    let cfg = Arc::new(cfg);
    let state = AppState {
        config: cfg.clone(),
    };

    let router = routes::build_router(state);

    let listen_addr = cfg.listen_addr();
    let listener = TcpListener::bind(&listen_addr).await.unwrap_or_else(|e| {
        eprintln!("failed to bind {}: {}", listen_addr, e);
        std::process::exit(1);
    });

    info!(
        "opt-report listening on {} (default report: {})",
        listen_addr, cfg.default_report
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| {
            eprintln!("server error: {}", e);
            std::process::exit(1);
        });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
