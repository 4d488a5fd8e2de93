use std::sync::Arc;

use tokio::sync::Mutex;

use playtop::{config, error, info, management::TokenManager, server};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    info!("Starting playlist top-tracks service...");

    let token_manager = Arc::new(Mutex::new(TokenManager::new()));
    server::start_api_server(token_manager).await;
}
