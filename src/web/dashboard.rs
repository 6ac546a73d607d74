use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::views;
use super::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct SignupForm {
    #[serde(default)]
    pub(crate) activity: String,
    #[serde(default)]
    pub(crate) email: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemovalForm {
    #[serde(default)]
    pub(crate) activity: String,
    #[serde(default)]
    pub(crate) email: String,
}

/// Every page view reloads from the server first, so what renders is always
/// the server's current state plus at most the pending feedback message.
pub(crate) async fn board_page(State(state): State<AppState>) -> Html<String> {
    let mut board = state.board.lock().await;
    board.load_activities().await;
    Html(views::render_page(&board))
}

pub(crate) async fn submit_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Redirect {
    let mut board = state.board.lock().await;
    board.sign_up(&form.activity, &form.email).await;
    Redirect::to("/")
}

pub(crate) async fn submit_removal(
    State(state): State<AppState>,
    Form(form): Form<RemovalForm>,
) -> Redirect {
    let mut board = state.board.lock().await;
    board.remove_participant(&form.activity, &form.email).await;
    Redirect::to("/")
}
