use serde::{Deserialize, Serialize};

/// Street address of a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

/// Employer of a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// A user record as returned by `GET /users/{id}`.
///
/// Only `id` and `name` are required; everything else defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

impl User {
    /// One-line summary used by the users list.
    pub fn summary(&self) -> String {
        if self.email.is_empty() {
            format!("#{} {}", self.id, self.name)
        } else {
            format!("#{} {} <{}>", self.id, self.name, self.email)
        }
    }
}
