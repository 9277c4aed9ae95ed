use verba_types::{GrammarResponse, Response};

use crate::state::AppState;

pub fn handle_grammar(state: &AppState, text: String) -> Response {
    match state.orchestrator.grammar(&text) {
        Ok(grammar) => Response::Grammar(GrammarResponse { grammar }),
        Err(e) => {
            tracing::info!("Rejected grammar request: {}", e);
            Response::error(e.to_string())
        }
    }
}
