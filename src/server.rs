use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, info, management::TokenManager};

pub async fn start_api_server(token_manager: Arc<Mutex<TokenManager>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route(
            "/get_top_5_from_playlist",
            post(api::top_tracks).layer(Extension(token_manager)),
        );

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
