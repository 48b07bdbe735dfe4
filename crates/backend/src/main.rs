pub mod handlers;
pub mod routes;
pub mod shared;
pub mod usecases;

use std::sync::Arc;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_document::UploadDocument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    // Логи пишутся и в консоль, и в target/logs/backend.log
    let log_dir = std::path::Path::new("target").join("logs");
    shared::logger::init_tracing(&log_dir)?;

    let config = shared::config::load_config()?;

    let upload_dir = shared::config::get_upload_dir(&config);
    tokio::fs::create_dir_all(&upload_dir).await?;
    tracing::info!(
        "{}: storing uploads in {}",
        UploadDocument::full_name(),
        upload_dir.display()
    );

    let state = routes::AppState {
        upload: Arc::new(usecases::u501_upload_document::UploadExecutor::new(
            upload_dir,
            &config.upload,
        )),
    };

    let app = routes::configure_routes(state, &config.cors);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    tracing::info!("Quiz backend listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
