use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use rolodex_core::{ContactManager, Repository};
use rolodex_gateway::cli::{StorageBackendArg, CLI};
use rolodex_gateway::shutdown::shutdown_signal;
use rolodex_gateway::{telemetry, App, AppState};
use rolodex_storage::{InMemoryRepository, MongoRepository};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the settings may come from the real environment.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(format!("failed to load .env: {err}").into());
        }
    }

    let config = CLI::try_parse()?;
    telemetry::init(config.log_format).map_err(|e| e as Box<dyn std::error::Error>)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting contacts gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::MongoDb => {
            let mongo_uri = config
                .mongo_uri
                .ok_or("mongo uri is required when storage backend is mongodb")?;
            let repository = MongoRepository::connect(
                &mongo_uri,
                &config.mongo_database,
                &config.mongo_collection,
            )
            .await
            .inspect_err(|e| error!(error = %e, "failed to connect to mongodb"))?;

            let served = run_server(config.listen_addr, repository.clone()).await;
            repository.close().await;
            served?;
        }
    }

    info!("gateway shutdown complete");
    Ok(())
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    repository: R,
) -> Result<(), std::io::Error> {
    let state = AppState::new(Arc::new(ContactManager::new(repository)));
    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
