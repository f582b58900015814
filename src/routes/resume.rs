use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::routes::AppState;

/// GET /resume - sends the visitor to the hosted resume
pub async fn redirect(State(app_state): State<AppState>) -> impl IntoResponse {
    Redirect::to(&app_state.config.site.resume_url)
}
