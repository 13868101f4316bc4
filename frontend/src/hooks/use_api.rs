use yew::prelude::*;

use crate::services::api::ApiClient;

/// API client provided by `App`; falls back to the build-time configuration
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
