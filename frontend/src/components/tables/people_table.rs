use gloo::dialogs::confirm;
use shared::{EntityId, Person};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::layout::{Card, EmptyState, ErrorPanel, LoadingSpinner};
use crate::components::notification::use_notifier;
use crate::hooks::use_api::use_api;
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "PeopleTable";
const DELETE_CONFIRMATION: &str =
    "Tem certeza que deseja deletar esta pessoa? Todas as transações relacionadas também serão deletadas.";

#[derive(Properties, PartialEq)]
pub struct PeopleTableProps {
    pub refresh: RefreshSignal,
}

#[function_component(PeopleTable)]
pub fn people_table(props: &PeopleTableProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let deleting = use_state(|| None::<EntityId>);

    let remote = use_remote(
        props.refresh,
        |api: ApiClient| async move { api.list_people().await },
        COMPONENT,
        "Erro ao carregar pessoas. Tente novamente.",
    );

    let on_delete = {
        let deleting = deleting.clone();
        let reload = remote.reload.clone();
        Callback::from(move |id: EntityId| {
            if deleting.is_some() || !confirm(DELETE_CONFIRMATION) {
                return;
            }

            deleting.set(Some(id));
            let api = api.clone();
            let notifier = notifier.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_person(id).await {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, &format!("deleted person {}", id));
                        notifier.success("Pessoa deletada com sucesso!");
                        reload.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to delete person {}: {}", id, e),
                        );
                        notifier.error(e.user_message("Erro ao deletar pessoa. Tente novamente."));
                    }
                }
                deleting.set(None);
            });
        })
    };

    let content = match &remote.state {
        LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={remote.reload.clone()} />
        },
        LoadState::Loaded(people) if people.is_empty() => html! {
            <EmptyState message="Nenhuma pessoa cadastrada." />
        },
        LoadState::Loaded(people) => html! {
            <div class="table-responsive">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Nome"}</th>
                            <th>{"Idade"}</th>
                            <th class="actions">{"Ações"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for people.iter().map(|person| person_row(person, *deleting, &on_delete))}
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <Card
            title="Pessoas Cadastradas"
            subtitle="Pessoas cadastradas no sistema"
            icon="fas fa-users"
        >
            {content}
        </Card>
    }
}

fn person_row(person: &Person, deleting: Option<EntityId>, on_delete: &Callback<EntityId>) -> Html {
    let id = person.id;
    let busy = deleting == Some(id);
    let onclick = {
        let on_delete = on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr key={id}>
            <td>{id}</td>
            <td>{&person.name}</td>
            <td>
                {format!("{} anos", person.age)}
                {if person.is_minor() {
                    html! { <span class="badge badge-minor">{"Menor"}</span> }
                } else { html! {} }}
            </td>
            <td class="actions">
                <button
                    type="button"
                    class="btn btn-danger btn-sm"
                    title="Deletar"
                    disabled={deleting.is_some()}
                    onclick={onclick}
                >
                    {if busy {
                        html! { <i class="fas fa-spinner fa-spin"></i> }
                    } else {
                        html! { <i class="fas fa-trash"></i> }
                    }}
                </button>
            </td>
        </tr>
    }
}
