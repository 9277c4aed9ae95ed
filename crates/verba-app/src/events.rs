use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use verba_types::{Request, Response};

use crate::state::AppState;

pub mod grammar;
pub mod history;
pub mod translate;
pub mod vocabulary;

use grammar::handle_grammar;
use history::handle_load_history;
use translate::handle_translate;
use vocabulary::{handle_load_vocabulary, handle_save_vocabulary_item};

pub const TIMEOUT_MESSAGE: &str = "Request timed out";

pub enum AppEvent {
    Request(RequestEnvelope),
}

/// A request plus the channel its response goes back on
pub struct RequestEnvelope {
    pub id: Uuid,
    pub request: Request,
    pub reply: oneshot::Sender<Response>,
}

impl RequestEnvelope {
    pub fn new(request: Request) -> (Self, oneshot::Receiver<Response>) {
        let (reply, rx) = oneshot::channel();
        let envelope = Self {
            id: Uuid::new_v4(),
            request,
            reply,
        };
        (envelope, rx)
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    request_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let request_timeout = {
        let config = state.config.read().await;
        Duration::from_millis(config.request_timeout_ms)
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for requests");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = request_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] Request channel closed");
                    break;
                }
            },
        };

        match event {
            AppEvent::Request(envelope) => {
                spawn_request(state.clone(), envelope, request_timeout);
            }
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Each request runs on its own task so a slow store never blocks the loop
fn spawn_request(state: Arc<AppState>, envelope: RequestEnvelope, request_timeout: Duration) {
    tokio::spawn(async move {
        let RequestEnvelope { id, request, reply } = envelope;
        let kind = request.kind();
        tracing::debug!("[{}] {} received", id, kind);

        let response = match tokio::time::timeout(request_timeout, handle_request(&state, request)).await {
            Ok(response) => response,
            Err(_) => {
                tracing::warn!("[{}] {} timed out after {:?}", id, kind, request_timeout);
                Response::error(TIMEOUT_MESSAGE)
            }
        };

        if reply.send(response).is_err() {
            tracing::debug!("[{}] requester went away before the response", id);
        }
    });
}

pub async fn handle_request(state: &AppState, request: Request) -> Response {
    match request {
        Request::Translate { text } => handle_translate(state, text).await,
        Request::GetGrammar { text } => handle_grammar(state, text),
        Request::LoadHistory => handle_load_history(state).await,
        Request::LoadVocabulary => handle_load_vocabulary(state).await,
        Request::SaveVocabularyItem { item } => handle_save_vocabulary_item(state, item).await,
    }
}
