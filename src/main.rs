use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use guestlist_server::config::Config;
use guestlist_server::handlers::AppState;
use guestlist_server::routes::create_routes;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = AppState::new();

    let app: Router = create_routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Guest list server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
