use anyhow::Result;
use fleetserver::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let secrets_repo = Arc::new(match &app_config.vendor.secrets_dir {
        Some(dir) => secrets_repo::SecretsRepo::with_base_dir(dir),
        None => secrets_repo::SecretsRepo::new(),
    });
    let vendor_repo = Arc::new(vendor_repo::VendorRepo::for_region(
        &app_config.vendor.region,
    )?);
    let inventory = Arc::new(inventory::InventoryService::new(
        secrets_repo.clone(),
        vendor_repo,
        app_config.vendor.force_mock,
    ));
    if app_config.vendor.force_mock {
        tracing::info!("force_mock enabled; vendor API will not be contacted");
    }

    let app = routes::app(inventory, secrets_repo);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
        }
    }

    Ok(())
}
