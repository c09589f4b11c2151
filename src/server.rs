use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, info, insight::groq::GroqProvider};

pub async fn start_api_server() {
    let provider = Arc::new(GroqProvider::from_env());

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/analyze", get(api::analyze).layer(Extension(provider)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
