//! Interceptor chain used by the application.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::interceptor::InterceptorExt;
use crate::loading::LoadingTracker;
use crate::traits::HttpClient;

/// Shared, type-erased client handed to request tasks.
pub type SharedClient = Arc<dyn HttpClient>;

/// Wrap `transport` in the application's interceptors.
///
/// The loading interceptor is outermost so the artificial delay counts as
/// in-flight time:
///
/// ```text
/// LoadingInterceptor -> DelayInterceptor -> transport
/// ```
pub fn build_client<C>(transport: C, config: &AppConfig, tracker: LoadingTracker) -> SharedClient
where
    C: HttpClient + 'static,
{
    Arc::new(
        transport
            .with_delay(config.delay_policy())
            .with_loading(tracker),
    )
}
