//! Client for the demo users API.

use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::traits::{Headers, HttpClient, HttpError};

/// Public placeholder API the demo talks to by default.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Highest user id served by the default API.
pub const MAX_USER_ID: u32 = 10;

/// Pick a user id in `1..=MAX_USER_ID`.
pub fn random_user_id() -> u32 {
    rand::thread_rng().gen_range(1..=MAX_USER_ID)
}

/// Fetches users through any [`HttpClient`], usually an interceptor chain.
#[derive(Debug, Clone)]
pub struct UsersApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> UsersApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn user_url(&self, id: u32) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// `GET /users/{id}`.
    pub async fn fetch_user(&self, id: u32) -> AppResult<User> {
        let url = self.user_url(id);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.client.get(&url, &headers).await?;
        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HttpError::ServerError {
                status: response.status,
                message,
            }
            .into());
        }

        response.json().map_err(|source| AppError::Decode {
            what: "user",
            source,
        })
    }
}
