use shared::{Category, Person, Transaction};
use yew::prelude::*;

use crate::components::forms::category_form::CategoryForm;
use crate::components::forms::person_form::PersonForm;
use crate::components::forms::transaction_form::TransactionForm;
use crate::components::tables::category_table::CategoryTable;
use crate::components::tables::people_table::PeopleTable;
use crate::components::tables::transaction_table::TransactionTable;
use crate::components::totals::by_category::TotalsByCategory;
use crate::components::totals::by_person::TotalsByPerson;
use crate::hooks::use_remote::RefreshSignal;
use crate::services::routes::Route;

/// Signal bumped by a form so the list beside it refetches
#[hook]
fn use_refresh_signal() -> (RefreshSignal, Callback<()>) {
    let refresh = use_state(RefreshSignal::default);
    let bump = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(refresh.next()))
    };
    (*refresh, bump)
}

#[function_component(PeoplePage)]
pub fn people_page() -> Html {
    let (refresh, bump) = use_refresh_signal();
    let on_success = bump.reform(|_: Person| ());
    html! {
        <div class="page">
            <PersonForm {on_success} />
            <PeopleTable {refresh} />
        </div>
    }
}

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let (refresh, bump) = use_refresh_signal();
    let on_success = bump.reform(|_: Category| ());
    html! {
        <div class="page">
            <CategoryForm {on_success} />
            <CategoryTable {refresh} />
        </div>
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let (refresh, bump) = use_refresh_signal();
    let on_success = bump.reform(|_: Transaction| ());
    html! {
        <div class="page">
            <TransactionForm {on_success} />
            <TransactionTable {refresh} />
        </div>
    }
}

pub fn render_route(route: Route) -> Html {
    match route {
        Route::People => html! { <PeoplePage /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
        Route::TotalsByPerson => html! { <TotalsByPerson /> },
        Route::TotalsByCategory => html! { <TotalsByCategory /> },
    }
}
