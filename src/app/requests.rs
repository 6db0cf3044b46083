//! Issuing, cancelling and completing user requests.

use uuid::Uuid;

use super::{App, AppMessage, PendingRequest};
use crate::api::random_user_id;
use crate::models::{RequestOutcome, RequestRecord};

impl App {
    /// Request a random user, as the demo button does.
    pub fn call_api(&mut self) -> Uuid {
        self.request_user(random_user_id())
    }

    /// Spawn a task fetching `user_id`. Must be called inside a tokio runtime.
    ///
    /// The result arrives later as an [`AppMessage`] on `message_tx`.
    pub fn request_user(&mut self, user_id: u32) -> Uuid {
        let record = RequestRecord::new(user_id);
        let request_id = record.id;
        self.push_record(record);

        let api = self.api();
        let message_tx = self.message_tx.clone();
        tracing::info!(%request_id, user_id, "requesting user");

        let handle = tokio::spawn(async move {
            let message = match api.fetch_user(user_id).await {
                Ok(user) => AppMessage::UserLoaded { request_id, user },
                Err(err) => {
                    tracing::warn!(
                        %request_id,
                        code = err.error_code(),
                        category = %err.category(),
                        "request failed: {}",
                        err
                    );
                    AppMessage::RequestFailed {
                        request_id,
                        error: err.user_message(),
                    }
                }
            };
            // The receiver is gone only when the app is shutting down
            let _ = message_tx.send(message);
        });

        self.pending.push(PendingRequest {
            id: request_id,
            handle,
        });
        self.mark_dirty();
        request_id
    }

    /// Cancel the most recently issued request that is still running.
    ///
    /// Requests whose task already finished are skipped; their result is
    /// queued and will be applied by [`handle_message`](Self::handle_message).
    /// Returns the cancelled request id, if any.
    pub fn cancel_latest(&mut self) -> Option<Uuid> {
        let index = self
            .pending
            .iter()
            .rposition(|request| !request.handle.is_finished())?;
        let request = self.pending.remove(index);
        Some(self.cancel(request))
    }

    /// Cancel every request that is still running. Returns how many were
    /// cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let (running, finished): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|request| !request.handle.is_finished());
        self.pending = finished;

        let count = running.len();
        for request in running {
            self.cancel(request);
        }
        count
    }

    fn cancel(&mut self, request: PendingRequest) -> Uuid {
        // Aborting drops the request future, which ends its loading guard
        request.handle.abort();
        tracing::info!(request_id = %request.id, "request cancelled");
        if let Some(record) = self.record_mut(request.id) {
            record.finish(RequestOutcome::Cancelled);
        }
        self.mark_dirty();
        request.id
    }

    /// Apply a message from a request task.
    ///
    /// Messages for requests that were already cancelled are ignored.
    pub fn handle_message(&mut self, message: AppMessage) {
        let request_id = match &message {
            AppMessage::UserLoaded { request_id, .. } => *request_id,
            AppMessage::RequestFailed { request_id, .. } => *request_id,
        };
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != request_id);
        let was_pending = self.pending.len() != before;

        let outcome = match &message {
            AppMessage::UserLoaded { .. } => RequestOutcome::Loaded,
            AppMessage::RequestFailed { error, .. } => RequestOutcome::Failed(error.clone()),
        };
        // A record evicted from the log still counts while its task is pending
        let accepted = match self.record_mut(request_id) {
            Some(record) => record.finish(outcome),
            None => was_pending,
        };
        if !accepted {
            tracing::debug!(%request_id, "ignoring result of finished request");
            return;
        }

        match message {
            AppMessage::UserLoaded { user, .. } => {
                tracing::info!(%request_id, user_id = user.id, "user loaded");
                self.users.push(user);
                self.last_error = None;
            }
            AppMessage::RequestFailed { error, .. } => {
                self.last_error = Some(error);
            }
        }
        self.mark_dirty();
    }
}
