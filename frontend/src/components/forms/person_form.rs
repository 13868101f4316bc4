use shared::{FieldErrors, Person, PersonDraft, PersonField};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{clear_field_errors, field_error};
use crate::components::layout::{Card, FormField};
use crate::components::notification::use_notifier;
use crate::hooks::use_api::use_api;
use crate::services::logging::Logger;

const COMPONENT: &str = "PersonForm";

#[derive(Properties, PartialEq)]
pub struct PersonFormProps {
    /// Fired with the created person so the list can refresh
    pub on_success: Callback<Person>,
}

#[function_component(PersonForm)]
pub fn person_form(props: &PersonFormProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let draft = use_state(PersonDraft::default);
    let errors = use_state(FieldErrors::<PersonField>::new);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(|| false);

    let on_name_input = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PersonDraft {
                name: input.value(),
                ..(*draft).clone()
            });
            clear_field_errors(&errors, &[PersonField::Name]);
        })
    };

    let on_age_input = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PersonDraft {
                age: input.value(),
                ..(*draft).clone()
            });
            clear_field_errors(&errors, &[PersonField::Age]);
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
                match api.create_person(&request).await {
                    Ok(person) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("created person {}", person.id),
                        );
                        draft.set(PersonDraft::default());
                        errors.set(FieldErrors::new());
                        notifier.success("Pessoa cadastrada com sucesso!");
                        on_success.emit(person);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to create person: {}", e),
                        );
                        notifier.error(
                            e.user_message("Erro ao cadastrar pessoa. Tente novamente."),
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
            title="Cadastrar Pessoa"
            subtitle="Adicione uma nova pessoa para controlar os gastos"
            icon="fas fa-user-plus"
        >
            <form class="entity-form" onsubmit={on_submit} novalidate={true}>
                <FormField
                    label="Nome"
                    input_id="person-name"
                    required=true
                    error={field_error(&errors, PersonField::Name)}
                >
                    <input
                        type="text"
                        id="person-name"
                        placeholder="Digite o nome"
                        value={draft.name.clone()}
                        oninput={on_name_input}
                        disabled={*submitting}
                    />
                </FormField>

                <FormField
                    label="Idade"
                    input_id="person-age"
                    required=true
                    error={field_error(&errors, PersonField::Age)}
                >
                    <input
                        type="number"
                        id="person-age"
                        placeholder="Digite a idade"
                        min="1"
                        step="1"
                        value={draft.age.clone()}
                        oninput={on_age_input}
                        disabled={*submitting}
                    />
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
