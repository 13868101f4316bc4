use std::str::FromStr;

use shared::{purpose_label, Category, CategoryDraft, CategoryField, CategoryPurpose, FieldErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{clear_field_errors, field_error};
use crate::components::layout::{Card, FormField};
use crate::components::notification::use_notifier;
use crate::hooks::use_api::use_api;
use crate::services::logging::Logger;

const COMPONENT: &str = "CategoryForm";

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub on_success: Callback<Category>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let draft = use_state(CategoryDraft::default);
    let errors = use_state(FieldErrors::<CategoryField>::new);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(|| false);

    let on_description_input = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(CategoryDraft {
                description: input.value(),
                ..(*draft).clone()
            });
            clear_field_errors(&errors, &[CategoryField::Description]);
        })
    };

    let on_purpose_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match CategoryPurpose::from_str(&select.value()) {
                Ok(purpose) => draft.set(CategoryDraft {
                    purpose,
                    ..(*draft).clone()
                }),
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }

            let request = match draft.prepare() {
                Ok(request) => request,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            submitting.set(true);

            let api = api.clone();
            let notifier = notifier.clone();
            let draft = draft.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let in_flight = in_flight.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match api.create_category(&request).await {
                    Ok(category) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("created category {}", category.id),
                        );
                        draft.set(CategoryDraft::default());
                        errors.set(FieldErrors::new());
                        notifier.success("Categoria cadastrada com sucesso!");
                        on_success.emit(category);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to create category: {}", e),
                        );
                        notifier.error(
                            e.user_message("Erro ao cadastrar categoria. Tente novamente."),
                        );
                    }
                }
                *in_flight.borrow_mut() = false;
                submitting.set(false);
            });
        })
    };

    html! {
        <Card
            title="Cadastrar Categoria"
            subtitle="Crie categorias para organizar suas transações"
            icon="fas fa-tag"
        >
            <form class="entity-form" onsubmit={on_submit} novalidate={true}>
                <FormField
                    label="Descrição"
                    input_id="category-description"
                    required=true
                    error={field_error(&errors, CategoryField::Description)}
                >
                    <input
                        type="text"
                        id="category-description"
                        placeholder="Ex.: Alimentação, Salário"
                        value={draft.description.clone()}
                        oninput={on_description_input}
                        disabled={*submitting}
                    />
                </FormField>

                <FormField label="Finalidade" input_id="category-purpose" required=true>
                    <select
                        id="category-purpose"
                        onchange={on_purpose_change}
                        disabled={*submitting}
                    >
                        {for CategoryPurpose::ALL.iter().map(|purpose| html! {
                            <option
                                value={purpose.as_str()}
                                selected={*purpose == draft.purpose}
                            >
                                {purpose_label(*purpose)}
                            </option>
                        })}
                    </select>
                </FormField>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting {
                        html! { <><i class="fas fa-spinner fa-spin"></i>{" Cadastrando..."}</> }
                    } else {
                        html! { <><i class="fas fa-save"></i>{" Cadastrar"}</> }
                    }}
                </button>
            </form>
        </Card>
    }
}
