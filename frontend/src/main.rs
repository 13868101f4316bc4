use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::header::Header;
use components::notification::NotificationProvider;
use components::pages::render_route;
use config::ClientConfig;
use hooks::use_route::use_route;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::from_env());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });
    let router = use_route();

    html! {
        <ContextProvider<ApiClient> context={(*api_client).clone()}>
            <NotificationProvider duration_ms={config.notification_duration_ms}>
                <div class="app">
                    <Header route={router.route} on_navigate={router.navigate.clone()} />
                    <main class="main-content">
                        <div class="container">
                            {render_route(router.route)}
                        </div>
                    </main>
                </div>
            </NotificationProvider>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    Logger::info_with_component(
        "main",
        &format!("starting with API at {}", ApiClient::default().base_url()),
    );
    yew::Renderer::<App>::new().render();
}
