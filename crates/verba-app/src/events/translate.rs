use verba_translator::Translator;
use verba_types::Response;

use crate::state::AppState;

pub async fn handle_translate(state: &AppState, text: String) -> Response {
    tracing::debug!("Translate: {} chars", text.chars().count());

    match state.orchestrator.translate(&text).await {
        Ok(result) => Response::Translate(result.into()),
        Err(e) => {
            tracing::info!("Rejected translate request: {}", e);
            Response::error(e.to_string())
        }
    }
}
