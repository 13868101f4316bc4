use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::routes::Route;

#[derive(Clone, PartialEq)]
pub struct UseRouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

/// Track the browser path as a `Route`; `/` and unknown paths are replaced with `/pessoas`
#[hook]
pub fn use_route() -> UseRouteHandle {
    let history = use_memo((), |_| BrowserHistory::new());
    let route = {
        let history = history.clone();
        use_state(move || Route::resolve(history.location().path()))
    };

    {
        let history = history.clone();
        let route = route.clone();
        use_effect_with((), move |_| {
            let current = history.location().path().to_string();
            if Route::from_path(&current).is_none() {
                Logger::debug_with_component(
                    "router",
                    &format!("redirecting {} to {}", current, Route::default().path()),
                );
                history.replace(Route::default().path());
            }

            let listener = {
                let browser = (*history).clone();
                history.listen(move || route.set(Route::resolve(browser.location().path())))
            };
            move || drop(listener)
        });
    }

    let navigate = {
        let history = history.clone();
        let route = route.clone();
        Callback::from(move |target: Route| {
            if *route != target {
                history.push(target.path());
            }
        })
    };

    UseRouteHandle {
        route: *route,
        navigate,
    }
}
