use std::sync::Arc;
use tonic::transport::Server;

use matrix_server::{config::Config, db, grpc, storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let pool = db::init_pool(&config.database_url).await?;
    let storage = Arc::new(storage::Storage::new(pool));
    let server = grpc::create_server(storage, config.history_limit);

    tracing::info!(addr = %config.addr, database = %config.database_url, "matrix server listening");
    Server::builder().add_service(server).serve(config.addr).await?;

    Ok(())
}
