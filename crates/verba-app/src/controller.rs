use std::sync::Arc;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use verba_types::{Request, Response};

use crate::events::{AppEvent, RequestEnvelope, event_loop};
use crate::io::stdio_server;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub requests: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            requests: kanal::bounded_async(capacity),
        }
    }
}

/// Sending half of the request boundary, shared by every transport
#[derive(Clone)]
pub struct RequestClient {
    tx: AsyncSender<AppEvent>,
}

impl RequestClient {
    pub fn new(tx: AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }

    pub async fn send(&self, request: Request) -> anyhow::Result<Response> {
        let (envelope, reply) = RequestEnvelope::new(request);
        let id = envelope.id;
        self.tx
            .send(AppEvent::Request(envelope))
            .await
            .context("event loop is not running")?;

        reply
            .await
            .with_context(|| format!("request {id} was dropped without a response"))
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the event loop, plus the stdio transport when `serve_stdio` is set
    pub fn spawn_tasks(&self, serve_stdio: bool) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.requests.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Stdio transport
        if serve_stdio {
            tasks.spawn(stdio_server(self.client(), self.cancel_token.child_token()));
        }

        tasks
    }

    pub fn client(&self) -> RequestClient {
        RequestClient::new(self.channels.requests.0.clone())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
