use std::collections::HashMap;

use futures::future::try_join;
use shared::format::transaction_count_label;
use shared::totals::{count_by_person, person_share};
use shared::{format_currency, EntityId, PersonTotals, PersonTotalsResponse};
use yew::prelude::*;

use super::{balance_class, LOAD_FAILURE, NO_DATA};
use crate::components::dashboard::{DashboardCard, ProgressBar};
use crate::components::layout::{Card, EmptyState, ErrorPanel, LoadingSpinner};
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq)]
struct PersonDashboard {
    totals: PersonTotalsResponse,
    transaction_counts: HashMap<EntityId, usize>,
}

#[function_component(TotalsByPerson)]
pub fn totals_by_person() -> Html {
    let remote = use_remote(
        RefreshSignal::default(),
        |api: ApiClient| async move {
            let (totals, transactions) =
                try_join(api.totals_by_person(), api.list_transactions()).await?;
            Ok::<_, ApiError>(PersonDashboard {
                transaction_counts: count_by_person(&transactions),
                totals,
            })
        },
        "TotalsByPerson",
        LOAD_FAILURE,
    );

    match &remote.state {
        LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={remote.reload.clone()} />
        },
        LoadState::Loaded(dashboard) => render_dashboard(dashboard),
    }
}

fn render_dashboard(dashboard: &PersonDashboard) -> Html {
    let totals = &dashboard.totals;

    html! {
        <div class="totals-page">
            <div class="dashboard-cards">
                <DashboardCard
                    title="Total de Receitas"
                    value={format_currency(totals.total_income)}
                    icon="fas fa-arrow-up"
                    variant="card-income"
                />
                <DashboardCard
                    title="Total de Despesas"
                    value={format_currency(totals.total_expense)}
                    icon="fas fa-arrow-down"
                    variant="card-expense"
                />
                <DashboardCard
                    title="Saldo Líquido"
                    value={format_currency(totals.net_balance)}
                    icon="fas fa-balance-scale"
                    caption="Receitas - Despesas"
                    variant={balance_class(totals.net_balance)}
                />
                <DashboardCard
                    title="Pessoas"
                    value={totals.people.len().to_string()}
                    icon="fas fa-users"
                />
            </div>

            <Card
                title="Totais por Pessoa"
                subtitle="Resumo de receitas e despesas organizados por pessoa"
                icon="fas fa-chart-pie"
            >
                {if totals.people.is_empty() {
                    html! { <EmptyState message={NO_DATA} /> }
                } else {
                    html! {
                        <div class="table-responsive">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Pessoa"}</th>
                                        <th>{"Transações"}</th>
                                        <th>{"Receitas"}</th>
                                        <th>{"Despesas"}</th>
                                        <th>{"Saldo"}</th>
                                        <th>{"Participação"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for totals.people.iter().map(|person| person_row(person, dashboard))}
                                </tbody>
                                <tfoot>
                                    <tr class="total-row">
                                        <td colspan="2">{"Total Geral"}</td>
                                        <td class="tipo-receita">{format_currency(totals.total_income)}</td>
                                        <td class="tipo-despesa">{format_currency(totals.total_expense)}</td>
                                        <td class={balance_class(totals.net_balance)}>
                                            {format_currency(totals.net_balance)}
                                        </td>
                                        <td></td>
                                    </tr>
                                </tfoot>
                            </table>
                        </div>
                    }
                }}
            </Card>
        </div>
    }
}

fn person_row(person: &PersonTotals, dashboard: &PersonDashboard) -> Html {
    let totals = &dashboard.totals;
    let count = dashboard
        .transaction_counts
        .get(&person.person_id)
        .copied()
        .unwrap_or(0);
    let share = person_share(person, totals.total_income, totals.total_expense);

    html! {
        <tr key={person.person_id}>
            <td>{&person.name}</td>
            <td>{transaction_count_label(count)}</td>
            <td class="tipo-receita">{format_currency(person.total_income)}</td>
            <td class="tipo-despesa">{format_currency(person.total_expense)}</td>
            <td class={balance_class(person.balance)}>{format_currency(person.balance)}</td>
            <td><ProgressBar percentage={share} /></td>
        </tr>
    }
}
