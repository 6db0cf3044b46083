//! Application state for the TUI.
//!
//! Requests run on tokio tasks and report back over an unbounded channel as
//! [`AppMessage`]s; the event loop in `main.rs` feeds those into
//! [`App::handle_message`]. The loading indicator reads nothing but the
//! [`LoadingObserver`], so it reflects every request made through the
//! intercepted client, not just the ones the app keeps handles for.

mod client;
mod handlers;
mod requests;

pub use client::{build_client, SharedClient};
pub use handlers::KeyAction;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::UsersApi;
use crate::config::AppConfig;
use crate::loading::{LoadingObserver, LoadingTracker};
use crate::models::{RequestRecord, User};
use crate::traits::HttpClient;
use crate::ui::loading_indicator::next_spinner_frame;

/// Maximum number of entries kept in the request log.
pub const MAX_REQUEST_LOG: usize = 50;

/// Messages sent from request tasks back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A user was fetched successfully
    UserLoaded { request_id: Uuid, user: User },
    /// The request ended with an error
    RequestFailed { request_id: Uuid, error: String },
}

/// A request task the app can still cancel.
#[derive(Debug)]
pub(crate) struct PendingRequest {
    pub id: Uuid,
    pub handle: JoinHandle<()>,
}

/// Main application state.
pub struct App {
    /// Shared loading counter for every request
    pub tracker: LoadingTracker,
    /// Subscription driving the loading indicator
    loading: LoadingObserver,
    /// Last observed loading state
    pub is_loading: bool,
    /// Users API over the intercepted client
    api: Arc<UsersApi<SharedClient>>,
    /// Fetched users, oldest first
    pub users: Vec<User>,
    /// Request log, oldest first
    pub requests: Vec<RequestRecord>,
    pub(crate) pending: Vec<PendingRequest>,
    /// Last error shown in the status line
    pub last_error: Option<String>,
    /// Spinner animation frame
    pub spinner_frame: usize,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app over `transport`, wrapped in the configured interceptors.
    pub fn new<C>(config: &AppConfig, transport: C) -> Self
    where
        C: HttpClient + 'static,
    {
        let tracker = LoadingTracker::new();
        let client = build_client(transport, config, tracker.clone());
        let api = Arc::new(UsersApi::new(client, config.api_url.clone()));
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            loading: tracker.observe(),
            is_loading: tracker.is_loading(),
            tracker,
            api,
            users: Vec::new(),
            requests: Vec::new(),
            pending: Vec::new(),
            last_error: None,
            spinner_frame: 0,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mark that the UI needs to be redrawn.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Number of requests the app is still waiting on.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance animations and pick up loading state changes.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.sync_loading();

        if self.is_loading {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }
    }

    /// Apply the latest published loading state.
    pub fn sync_loading(&mut self) {
        if let Some(loading) = self.loading.poll_change() {
            tracing::debug!(loading, "loading indicator updated");
            self.is_loading = loading;
            if !loading {
                self.spinner_frame = 0;
            }
            self.mark_dirty();
        }
    }

    /// Forget fetched users and finished log entries.
    pub fn clear_users(&mut self) {
        self.users.clear();
        self.requests.retain(|record| record.outcome.is_pending());
        self.last_error = None;
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.cancel_all();
        self.should_quit = true;
    }

    pub(crate) fn api(&self) -> Arc<UsersApi<SharedClient>> {
        Arc::clone(&self.api)
    }

    pub(crate) fn push_record(&mut self, record: RequestRecord) {
        self.requests.push(record);
        if self.requests.len() > MAX_REQUEST_LOG {
            // Prefer the oldest finished entry, else the oldest entry
            let index = self
                .requests
                .iter()
                .position(|record| !record.outcome.is_pending())
                .unwrap_or(0);
            self.requests.remove(index);
        }
    }

    pub(crate) fn record_mut(&mut self, id: Uuid) -> Option<&mut RequestRecord> {
        self.requests.iter_mut().find(|record| record.id == id)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for request in self.pending.drain(..) {
            request.handle.abort();
        }
    }
}
