use shared::{format_currency, kind_css_class, Transaction};
use yew::prelude::*;

use crate::components::layout::{Card, EmptyState, ErrorPanel, LoadingSpinner};
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub refresh: RefreshSignal,
}

/// Transactions as a table on wide screens and as cards on mobile
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let remote = use_remote(
        props.refresh,
        |api: ApiClient| async move { api.list_transactions().await },
        "TransactionTable",
        "Erro ao carregar transações. Tente novamente.",
    );

    let content = match &remote.state {
        LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Failed(message) => html! { <ErrorPanel message={message.clone()} /> },
        LoadState::Loaded(transactions) if transactions.is_empty() => html! {
            <EmptyState message="Nenhuma transação cadastrada." />
        },
        LoadState::Loaded(transactions) => html! {
            <>
                <div class="table-responsive desktop-only">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Descrição"}</th>
                                <th>{"Valor"}</th>
                                <th>{"Tipo"}</th>
                                <th>{"Categoria"}</th>
                                <th>{"Pessoa"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for transactions.iter().map(transaction_row)}
                        </tbody>
                    </table>
                </div>
                <div class="transaction-cards mobile-only">
                    {for transactions.iter().map(transaction_card)}
                </div>
            </>
        },
    };

    html! {
        <Card
            title="Transações Cadastradas"
            subtitle="Histórico de todas as transações"
            icon="fas fa-list"
        >
            {content}
        </Card>
    }
}

fn transaction_row(transaction: &Transaction) -> Html {
    let kind_class = kind_css_class(transaction.kind);
    html! {
        <tr key={transaction.id}>
            <td>{&transaction.description}</td>
            <td class={classes!("amount", kind_class)}>{format_currency(transaction.amount)}</td>
            <td><span class={classes!("badge", kind_class)}>{transaction.kind.as_str()}</span></td>
            <td>{transaction.category_label()}</td>
            <td>{transaction.person_label()}</td>
        </tr>
    }
}

fn transaction_card(transaction: &Transaction) -> Html {
    let kind_class = kind_css_class(transaction.kind);
    html! {
        <div key={transaction.id} class={classes!("transaction-card", kind_class)}>
            <div class="transaction-card-header">
                <span class="transaction-card-description">{&transaction.description}</span>
                <span class={classes!("amount", kind_class)}>{format_currency(transaction.amount)}</span>
            </div>
            <div class="transaction-card-details">
                <span><i class="fas fa-exchange-alt"></i>{" "}{transaction.kind.as_str()}</span>
                <span><i class="fas fa-tag"></i>{" "}{transaction.category_label()}</span>
                <span><i class="fas fa-user"></i>{" "}{transaction.person_label()}</span>
            </div>
        </div>
    }
}
