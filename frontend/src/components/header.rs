use yew::prelude::*;

use crate::services::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let sidebar_open = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };

    // Selecting a tab also collapses the mobile sidebar
    let menu_item = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        let sidebar_open = sidebar_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            sidebar_open.set(false);
            on_navigate.emit(route);
        });

        html! {
            <li key={route.path()}>
                <a
                    href={route.path()}
                    class={classes!("nav-link", (props.route == route).then_some("active"))}
                    onclick={onclick}
                >
                    <i class={route.icon()}></i>
                    <span>{route.label()}</span>
                </a>
            </li>
        }
    };

    html! {
        <>
            <header class="navbar">
                <div class="container">
                    <button
                        type="button"
                        class="sidebar-toggle"
                        aria-label="Abrir menu"
                        onclick={toggle_sidebar}
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                    <h1 class="brand">
                        <i class="fas fa-wallet"></i>
                        {"Controle de Gastos Residenciais"}
                    </h1>
                    <nav class="nav-tabs">
                        <ul>
                            {for Route::MENU.into_iter().map(&menu_item)}
                        </ul>
                    </nav>
                </div>
            </header>

            <aside class={classes!("sidebar", (*sidebar_open).then_some("open"))}>
                <ul>
                    {for Route::MENU.into_iter().map(&menu_item)}
                </ul>
            </aside>
            {if *sidebar_open {
                html! { <div class="sidebar-backdrop" onclick={close_sidebar}></div> }
            } else { html! {} }}
        </>
    }
}
