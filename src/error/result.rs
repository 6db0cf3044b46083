//! Result type alias for application operations.

use super::app_error::AppError;

/// Type alias for Results using [`AppError`].
///
/// # Example
///
/// ```ignore
/// use inflight::error::AppResult;
///
/// async fn load(api: &UsersApi<impl HttpClient>) -> AppResult<User> {
///     api.fetch_user(1).await
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
