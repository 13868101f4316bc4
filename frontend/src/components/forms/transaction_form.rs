use std::str::FromStr;

use futures::future::try_join;
use shared::validation::{parse_amount_input, selected_person_is_minor};
use shared::{
    categories_for_kind, submit_transaction, Category, EntityId, FieldErrors, Person,
    Transaction, TransactionDraft, TransactionField, TransactionKind,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{clear_field_errors, field_error};
use crate::components::layout::{Card, ErrorPanel, FormField, LoadingSpinner};
use crate::components::notification::use_notifier;
use crate::hooks::use_api::use_api;
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

const COMPONENT: &str = "TransactionForm";
const FORM_SUBTITLE: &str = "Adicione uma nova transação ao sistema";
const MINOR_HINT: &str = "Esta pessoa é menor de idade. Apenas despesas são permitidas.";

/// People and categories the form validates against
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceData {
    pub people: Vec<Person>,
    pub categories: Vec<Category>,
}

/// Parse a select value holding an entity id; the placeholder option is empty
fn parse_selected_id(value: &str) -> Option<EntityId> {
    value.parse::<EntityId>().ok().filter(|id| *id != 0)
}

/// Apply a person selection; picking a minor forces the kind back to expense
fn select_person(draft: &mut TransactionDraft, person_id: Option<EntityId>, data: &ReferenceData) {
    draft.person_id = person_id;
    if selected_person_is_minor(&data.people, person_id) && draft.kind != TransactionKind::Expense {
        draft.change_kind(TransactionKind::Expense, &data.categories);
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub on_success: Callback<Transaction>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let draft = use_state(TransactionDraft::default);
    let amount_text = use_state(String::new);
    let errors = use_state(FieldErrors::<TransactionField>::new);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(|| false);

    let reference = use_remote(
        RefreshSignal::default(),
        |api: ApiClient| async move {
            let (people, categories) = try_join(api.list_people(), api.list_categories()).await?;
            Ok::<_, ApiError>(ReferenceData { people, categories })
        },
        COMPONENT,
        "Erro ao carregar pessoas e categorias. Tente novamente.",
    );

    let data = match &reference.state {
        LoadState::Loading => {
            return html! {
                <Card
                    title="Cadastrar Transação"
                    subtitle={FORM_SUBTITLE}
                    icon="fas fa-plus-circle"
                >
                    <LoadingSpinner />
                </Card>
            };
        }
        LoadState::Failed(message) => {
            return html! {
                <Card
                    title="Cadastrar Transação"
                    subtitle={FORM_SUBTITLE}
                    icon="fas fa-plus-circle"
                >
                    <ErrorPanel message={message.clone()} on_retry={reference.reload.clone()} />
                </Card>
            };
        }
        LoadState::Loaded(data) => data.clone(),
    };

    let on_description_input = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(TransactionDraft {
                description: input.value(),
                ..(*draft).clone()
            });
            clear_field_errors(&errors, &[TransactionField::Description]);
        })
    };

    let on_amount_input = {
        let draft = draft.clone();
        let amount_text = amount_text.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            draft.set(TransactionDraft {
                amount: parse_amount_input(&text),
                ..(*draft).clone()
            });
            amount_text.set(text);
            clear_field_errors(&errors, &[TransactionField::Amount]);
        })
    };

    let on_kind_change = {
        let draft = draft.clone();
        let errors = errors.clone();
        let categories = data.categories.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match TransactionKind::from_str(&select.value()) {
                Ok(kind) => {
                    let mut next = (*draft).clone();
                    next.change_kind(kind, &categories);
                    draft.set(next);
                    clear_field_errors(
                        &errors,
                        &[TransactionField::Kind, TransactionField::Category],
                    );
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_category_change = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(TransactionDraft {
                category_id: parse_selected_id(&select.value()),
                ..(*draft).clone()
            });
            clear_field_errors(&errors, &[TransactionField::Category]);
        })
    };

    let on_person_change = {
        let draft = draft.clone();
        let errors = errors.clone();
        let data = data.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            select_person(&mut next, parse_selected_id(&select.value()), &data);
            draft.set(next);
            clear_field_errors(&errors, &[TransactionField::Person, TransactionField::Kind]);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let amount_text = amount_text.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        let data = data.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }

            let outcome = submit_transaction(&draft, &data.people, &data.categories, |request| {
                *in_flight.borrow_mut() = true;
                submitting.set(true);

                let api = api.clone();
                let notifier = notifier.clone();
                let draft = draft.clone();
                let amount_text = amount_text.clone();
                let errors = errors.clone();
                let submitting = submitting.clone();
                let in_flight = in_flight.clone();
                let on_success = on_success.clone();
                spawn_local(async move {
                    match api.create_transaction(&request).await {
                        Ok(transaction) => {
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("created transaction {}", transaction.id),
                            );
                            draft.set(TransactionDraft::default());
                            amount_text.set(String::new());
                            errors.set(FieldErrors::new());
                            notifier.success("Transação cadastrada com sucesso!");
                            on_success.emit(transaction);
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("Failed to create transaction: {}", e),
                            );
                            notifier.error(
                                e.user_message("Erro ao cadastrar transação. Tente novamente."),
                            );
                        }
                    }
                    *in_flight.borrow_mut() = false;
                    submitting.set(false);
                });
            });

            if let Err(field_errors) = outcome {
                errors.set(field_errors);
            }
        })
    };

    let is_minor = selected_person_is_minor(&data.people, draft.person_id);
    let available_categories = categories_for_kind(&data.categories, draft.kind);
    let selected_category = draft.selected_category();
    let selected_person = draft.selected_person();

    html! {
        <Card
            title="Cadastrar Transação"
            subtitle={FORM_SUBTITLE}
            icon="fas fa-plus-circle"
        >
            <form class="entity-form" onsubmit={on_submit} novalidate={true}>
                <FormField
                    label="Descrição"
                    input_id="transaction-description"
                    required=true
                    error={field_error(&errors, TransactionField::Description)}
                >
                    <input
                        type="text"
                        id="transaction-description"
                        placeholder="Ex.: Supermercado"
                        value={draft.description.clone()}
                        oninput={on_description_input}
                        disabled={*submitting}
                    />
                </FormField>

                <FormField
                    label="Valor"
                    input_id="transaction-amount"
                    required=true
                    error={field_error(&errors, TransactionField::Amount)}
                >
                    <input
                        type="number"
                        id="transaction-amount"
                        placeholder="0,00"
                        min="0.01"
                        step="0.01"
                        value={(*amount_text).clone()}
                        oninput={on_amount_input}
                        disabled={*submitting}
                    />
                </FormField>

                <FormField
                    label="Pessoa"
                    input_id="transaction-person"
                    required=true
                    error={field_error(&errors, TransactionField::Person)}
                >
                    <select
                        id="transaction-person"
                        onchange={on_person_change}
                        disabled={*submitting}
                    >
                        <option value="" selected={selected_person.is_none()}>
                            {"Selecione uma pessoa"}
                        </option>
                        {for data.people.iter().map(|person| html! {
                            <option
                                key={person.id}
                                value={person.id.to_string()}
                                selected={selected_person == Some(person.id)}
                            >
                                {format!("{} ({} anos)", person.name, person.age)}
                            </option>
                        })}
                    </select>
                </FormField>

                {if is_minor {
                    html! {
                        <div class="form-message info">
                            <i class="fas fa-info-circle"></i>
                            {" "}{MINOR_HINT}
                        </div>
                    }
                } else { html! {} }}

                <FormField
                    label="Tipo"
                    input_id="transaction-kind"
                    required=true
                    error={field_error(&errors, TransactionField::Kind)}
                >
                    <select
                        id="transaction-kind"
                        onchange={on_kind_change}
                        disabled={*submitting || is_minor}
                    >
                        {for TransactionKind::ALL.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={*kind == draft.kind}>
                                {kind.as_str()}
                            </option>
                        })}
                    </select>
                </FormField>

                <FormField
                    label="Categoria"
                    input_id="transaction-category"
                    required=true
                    error={field_error(&errors, TransactionField::Category)}
                >
                    <select
                        id="transaction-category"
                        onchange={on_category_change}
                        disabled={*submitting}
                    >
                        <option value="" selected={selected_category.is_none()}>
                            {"Selecione uma categoria"}
                        </option>
                        {for available_categories.iter().map(|category| html! {
                            <option
                                key={category.id}
                                value={category.id.to_string()}
                                selected={selected_category == Some(category.id)}
                            >
                                {&category.description}
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

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategoryPurpose;

    fn reference_data() -> ReferenceData {
        ReferenceData {
            people: vec![
                Person {
                    id: 1,
                    name: "Ana".to_string(),
                    age: 34,
                },
                Person {
                    id: 2,
                    name: "Lucas".to_string(),
                    age: 15,
                },
            ],
            categories: vec![
                Category {
                    id: 10,
                    description: "Salário".to_string(),
                    purpose: CategoryPurpose::Income,
                },
                Category {
                    id: 11,
                    description: "Mercado".to_string(),
                    purpose: CategoryPurpose::Expense,
                },
            ],
        }
    }

    #[test]
    fn test_parse_selected_id() {
        assert_eq!(parse_selected_id("7"), Some(7));
        assert_eq!(parse_selected_id(""), None);
        assert_eq!(parse_selected_id("0"), None);
    }

    #[test]
    fn test_selecting_minor_forces_expense() {
        let data = reference_data();
        let mut draft = TransactionDraft {
            kind: TransactionKind::Income,
            category_id: Some(10),
            ..TransactionDraft::default()
        };

        select_person(&mut draft, Some(2), &data);

        assert_eq!(draft.person_id, Some(2));
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.category_id, None);
    }

    #[test]
    fn test_selecting_adult_keeps_kind() {
        let data = reference_data();
        let mut draft = TransactionDraft {
            kind: TransactionKind::Income,
            category_id: Some(10),
            ..TransactionDraft::default()
        };

        select_person(&mut draft, Some(1), &data);

        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.category_id, Some(10));
    }
}
