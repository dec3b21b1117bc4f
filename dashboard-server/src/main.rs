use std::process::ExitCode;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_server::config::AppConfig;
use dashboard_server::dashboard::Dashboard;
use dashboard_server::scheduler::UrgencyConfig;
use dashboard_server::sources::{
    ClientConfig, GoldPriceClient, GoldPriceSource, MockGoldSource, MockWeatherSource,
    StaticDevice, SystemClock, WeatherClient, WeatherSource,
};
use dashboard_server::timetable::dubai_shuttle;
use dashboard_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dashboard_server=debug,tower_http=info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let timetable = Arc::new(dubai_shuttle());
    info!(destinations = timetable.len(), "loaded timetable");

    let (gold, weather): (Arc<dyn GoldPriceSource>, Arc<dyn WeatherSource>) = if config.offline {
        info!("offline mode: live feeds disabled");
        (
            Arc::new(MockGoldSource::failing()),
            Arc::new(MockWeatherSource::failing()),
        )
    } else {
        let gold = match GoldPriceClient::new(ClientConfig::gold()) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "failed to create gold price client");
                return ExitCode::FAILURE;
            }
        };
        let weather = match WeatherClient::new(ClientConfig::weather()) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "failed to create weather client");
                return ExitCode::FAILURE;
            }
        };
        (Arc::new(gold), Arc::new(weather))
    };

    let clock = Arc::new(SystemClock);
    let device = Arc::new(StaticDevice::new(config.steps, config.battery_percent));
    let urgency = UrgencyConfig::default();

    let cancel = CancellationToken::new();
    let handle = Dashboard::new(timetable.clone(), clock.clone(), device, gold, weather)
        .with_urgency(urgency.clone())
        .with_pricing(config.pricing.clone())
        .with_driver_config(config.driver.clone())
        .spawn(cancel.clone());

    let state = AppState::new(
        timetable,
        clock,
        urgency,
        handle.market(),
        handle.schedule(),
    );
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.addr, "dashboard listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel.clone()))
        .await;

    handle.shutdown().await;

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server error");
            ExitCode::FAILURE
        }
    }
}

/// Resolves on Ctrl-C, or when the drivers are cancelled elsewhere.
async fn shutdown_signal(cancel: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "failed to listen for ctrl-c");
                cancel.cancelled().await;
            }
            info!("shutting down");
        }
        _ = cancel.cancelled() => {}
    }
}
