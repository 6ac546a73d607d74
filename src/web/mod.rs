pub mod dashboard;
pub mod views;

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;

use crate::board::ActivityBoard;
use crate::client::ActivitiesClient;

#[derive(Clone)]
pub(crate) struct AppState {
    // Async mutex: the board holds the lock across its API calls, and every
    // request mutates it (even GET / reloads).
    pub(crate) board: Arc<Mutex<ActivityBoard>>,
}

pub async fn serve(base_url: &str, addr: &str) -> Result<()> {
    let mut board = ActivityBoard::new(ActivitiesClient::new(base_url)?);
    board.load_activities().await;

    let state = AppState {
        board: Arc::new(Mutex::new(board)),
    };

    let app = Router::new()
        .route("/", get(dashboard::board_page))
        .route("/signup", post(dashboard::submit_signup))
        .route("/remove", post(dashboard::submit_removal))
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Sign-up board listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
