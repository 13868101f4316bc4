use std::collections::HashMap;

use futures::future::try_join;
use shared::format::transaction_count_label;
use shared::totals::{category_color, category_share, count_by_category, largest_expense_category};
use shared::{format_currency, CategoryTotals, CategoryTotalsResponse, EntityId};
use yew::prelude::*;

use super::{balance_class, LOAD_FAILURE, NO_DATA};
use crate::components::dashboard::{DashboardCard, ProgressBar};
use crate::components::layout::{Card, EmptyState, ErrorPanel, LoadingSpinner};
use crate::hooks::use_remote::{use_remote, LoadState, RefreshSignal};
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq)]
struct CategoryDashboard {
    totals: CategoryTotalsResponse,
    transaction_counts: HashMap<EntityId, usize>,
}

#[function_component(TotalsByCategory)]
pub fn totals_by_category() -> Html {
    let remote = use_remote(
        RefreshSignal::default(),
        |api: ApiClient| async move {
            let (totals, transactions) =
                try_join(api.totals_by_category(), api.list_transactions()).await?;
            Ok::<_, ApiError>(CategoryDashboard {
                transaction_counts: count_by_category(&transactions),
                totals,
            })
        },
        "TotalsByCategory",
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

fn render_dashboard(dashboard: &CategoryDashboard) -> Html {
    let totals = &dashboard.totals;
    let largest = largest_expense_category(&totals.categories);

    html! {
        <div class="totals-page">
            <div class="dashboard-cards">
                <DashboardCard
                    title="Total de Despesas"
                    value={format_currency(totals.total_expense)}
                    icon="fas fa-arrow-down"
                    variant="card-expense"
                />
                <DashboardCard
                    title="Categorias"
                    value={totals.categories.len().to_string()}
                    icon="fas fa-tags"
                />
                {match largest {
                    Some(category) => html! {
                        <DashboardCard
                            title="Maior Categoria"
                            value={category.description.clone()}
                            icon="fas fa-trophy"
                            caption={format_currency(category.total_expense)}
                        />
                    },
                    None => html! {
                        <DashboardCard title="Maior Categoria" value="-" icon="fas fa-trophy" />
                    },
                }}
            </div>

            <Card
                title="Totais por Categoria"
                subtitle="Resumo dos gastos organizados por categoria"
                icon="fas fa-chart-bar"
            >
                {if totals.categories.is_empty() {
                    html! { <EmptyState message={NO_DATA} /> }
                } else {
                    html! {
                        <div class="table-responsive">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Categoria"}</th>
                                        <th>{"Transações"}</th>
                                        <th>{"Receitas"}</th>
                                        <th>{"Despesas"}</th>
                                        <th>{"Saldo"}</th>
                                        <th>{"% das Despesas"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for totals.categories.iter().enumerate().map(|(index, category)| {
                                        category_row(index, category, dashboard)
                                    })}
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

fn category_row(index: usize, category: &CategoryTotals, dashboard: &CategoryDashboard) -> Html {
    let color = category_color(index);
    let count = dashboard
        .transaction_counts
        .get(&category.category_id)
        .copied()
        .unwrap_or(0);
    let share = category_share(category, dashboard.totals.total_expense);

    html! {
        <tr key={category.category_id}>
            <td>
                <span class="color-dot" style={format!("background-color: {};", color)}></span>
                {&category.description}
            </td>
            <td>{transaction_count_label(count)}</td>
            <td class="tipo-receita">{format_currency(category.total_income)}</td>
            <td class="tipo-despesa">{format_currency(category.total_expense)}</td>
            <td class={balance_class(category.balance)}>{format_currency(category.balance)}</td>
            <td><ProgressBar percentage={share} color={color} /></td>
        </tr>
    }
}
