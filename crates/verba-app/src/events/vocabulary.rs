use verba_types::{DataResponse, Response, SaveVocabularyResponse, VocabularyEntry};

use crate::state::AppState;

pub async fn handle_load_vocabulary(state: &AppState) -> Response {
    match state.store.list_vocabulary().await {
        Ok(entries) => Response::Vocabulary(DataResponse::ok(entries)),
        Err(e) => {
            tracing::error!("Failed to load vocabulary: {}", e);
            Response::Vocabulary(DataResponse::failed(e.to_string()))
        }
    }
}

pub async fn handle_save_vocabulary_item(state: &AppState, item: VocabularyEntry) -> Response {
    let outcome = match state.store.add_vocabulary(item).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Failed to save vocabulary item: {}", e);
            return Response::SaveVocabulary(SaveVocabularyResponse {
                success: false,
                message: None,
                error: Some(e.to_string()),
                vocabulary: Vec::new(),
            });
        }
    };

    // The save already happened; a failed re-read only loses the echo
    let (vocabulary, read_error) = match state.store.list_vocabulary().await {
        Ok(vocabulary) => (vocabulary, None),
        Err(e) => {
            tracing::warn!("Saved vocabulary item but could not list vocabulary: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    Response::SaveVocabulary(SaveVocabularyResponse {
        success: outcome.inserted,
        message: outcome.reason,
        error: read_error,
        vocabulary,
    })
}
