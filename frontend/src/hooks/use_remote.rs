use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_api::use_api;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

/// Lifecycle of data fetched for a view
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// Holds the message shown in the error panel
    Failed(String),
}

/// Token a form bumps after a successful create so a sibling list refetches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSignal(u32);

impl RefreshSignal {
    pub fn next(self) -> Self {
        RefreshSignal(self.0.wrapping_add(1))
    }
}

pub struct UseRemoteResult<T> {
    pub state: LoadState<T>,
    /// Manual retry; refetches without waiting for the refresh signal
    pub reload: Callback<()>,
}

/// Fetch data on mount and again whenever `refresh` changes or `reload` fires.
///
/// Failures are logged under `component` and surface as
/// `LoadState::Failed(failure_message)`.
#[hook]
pub fn use_remote<T, F, Fut>(
    refresh: RefreshSignal,
    fetch: F,
    component: &'static str,
    failure_message: &'static str,
) -> UseRemoteResult<T>
where
    T: Clone + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = use_api();
    let state = use_state(|| LoadState::<T>::Loading);
    let attempt = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with((refresh, *attempt), move |_| {
            state.set(LoadState::Loading);
            let request = fetch(api);
            spawn_local(async move {
                match request.await {
                    Ok(data) => state.set(LoadState::Loaded(data)),
                    Err(e) => {
                        Logger::error_with_component(
                            component,
                            &format!("{} ({})", failure_message, e),
                        );
                        state.set(LoadState::Failed(failure_message.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let reload = {
        let attempt = attempt.clone();
        Callback::from(move |_: ()| attempt.set(attempt.wrapping_add(1)))
    };

    UseRemoteResult {
        state: (*state).clone(),
        reload,
    }
}
