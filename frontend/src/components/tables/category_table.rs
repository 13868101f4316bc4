use shared::purpose_label;
use yew::prelude::*;

use crate::components::layout::{Card, EmptyState, ErrorPanel, LoadingSpinner};
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct CategoryTableProps {
    pub refresh: RefreshSignal,
}

#[function_component(CategoryTable)]
pub fn category_table(props: &CategoryTableProps) -> Html {
    let remote = use_remote(
        props.refresh,
        |api: ApiClient| async move { api.list_categories().await },
        "CategoryTable",
        "Erro ao carregar categorias. Tente novamente.",
    );

    let content = match &remote.state {
        LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Failed(message) => html! { <ErrorPanel message={message.clone()} /> },
        LoadState::Loaded(categories) if categories.is_empty() => html! {
            <EmptyState message="Nenhuma categoria cadastrada." />
        },
        LoadState::Loaded(categories) => html! {
            <div class="table-responsive">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Descrição"}</th>
                            <th>{"Finalidade"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for categories.iter().map(|category| html! {
                            <tr key={category.id}>
                                <td>{category.id}</td>
                                <td>{&category.description}</td>
                                <td>
                                    <span class="badge">{purpose_label(category.purpose)}</span>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <Card
            title="Categorias Cadastradas"
            subtitle="Categorias cadastradas no sistema"
            icon="fas fa-tags"
        >
            {content}
        </Card>
    }
}
