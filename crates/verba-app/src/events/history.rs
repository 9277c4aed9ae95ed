use verba_types::{DataResponse, Response};

use crate::state::AppState;

pub async fn handle_load_history(state: &AppState) -> Response {
    match state.store.list_history().await {
        Ok(entries) => Response::History(DataResponse::ok(entries)),
        Err(e) => {
            tracing::error!("Failed to load history: {}", e);
            Response::History(DataResponse::failed(e.to_string()))
        }
    }
}
