use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Font Awesome classes, e.g. `fas fa-users`
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    {if let Some(icon) = &props.icon {
                        html! { <i class={icon.to_string()}></i> }
                    } else { html! {} }}
                    {&props.title}
                </h2>
                {if let Some(subtitle) = &props.subtitle {
                    html! { <p class="card-subtitle">{subtitle}</p> }
                } else { html! {} }}
            </div>
            <div class="card-body">
                {props.children.clone()}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::Static("Carregando..."))]
    pub message: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    /// Shows a retry button when present
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="error-panel" role="alert">
            <i class="fas fa-exclamation-triangle"></i>
            <p>{&props.message}</p>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={Callback::from(move |_: MouseEvent| on_retry.emit(()))}
                    >
                        <i class="fas fa-redo"></i>
                        {"Tentar novamente"}
                    </button>
                }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <i class="fas fa-inbox"></i>
            <p>{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    /// `id` of the control, used by the label's `for`
    pub input_id: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.input_id.clone()}>
                {&props.label}
                {if props.required {
                    html! { <span class="required">{" *"}</span> }
                } else { html! {} }}
            </label>
            {props.children.clone()}
            {if let Some(error) = &props.error {
                html! { <span class="field-error">{error}</span> }
            } else { html! {} }}
        </div>
    }
}
