use std::rc::Rc;

use common::{DashboardAction, DashboardState, RequestTracker, Transaction, TransactionFilter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::account::{get_accounts, get_balance_history};
use crate::api_client::transaction::get_transactions;
use crate::components::modals::TransactionModal;
use crate::settings;
use crate::shared::toast::ToastContext;
use super::account_cards::AccountCards;
use super::balance_chart::BalanceChart;
use super::filters::Filters;
use super::monthly_summary::MonthlySummaryPanel;
use super::stats::Stats;
use super::transaction_list::TransactionList;

/// `DashboardState` behind Yew's reducer hook
#[derive(PartialEq)]
struct DashboardStore(DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(DashboardStore(self.0.reduce(action)))
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    log::trace!("Dashboard component rendering");
    let store = use_reducer(|| DashboardStore(DashboardState::new(TransactionFilter::current_month())));
    let locale = use_memo((), |_| settings::get_settings().display_locale());
    let toast = use_context::<ToastContext>();

    let accounts_tracker = use_mut_ref(RequestTracker::default);
    let transactions_tracker = use_mut_ref(RequestTracker::default);
    let history_tracker = use_mut_ref(RequestTracker::default);

    let state = &store.0;
    let refresh_generation = state.refresh_generation;

    {
        let dispatcher = store.dispatcher();
        let tracker = accounts_tracker.clone();
        use_effect_with((state.filter.clone(), refresh_generation), move |(_, generation)| {
            let ticket = tracker.borrow_mut().issue();
            log::debug!("Loading accounts (generation {}, ticket {})", generation, ticket.id());
            dispatcher.dispatch(DashboardAction::AccountsRequested(ticket));
            spawn_local(async move {
                let result = get_accounts().await;
                dispatcher.dispatch(DashboardAction::AccountsLoaded(ticket, result));
            });
            || ()
        });
    }

    {
        let dispatcher = store.dispatcher();
        let tracker = transactions_tracker.clone();
        use_effect_with((state.filter.clone(), refresh_generation), move |(filter, _)| {
            let ticket = tracker.borrow_mut().issue();
            log::debug!("Loading transactions for {:?} (ticket {})", filter, ticket.id());
            dispatcher.dispatch(DashboardAction::TransactionsRequested(ticket));
            let filter = filter.clone();
            spawn_local(async move {
                let result = get_transactions(filter).await;
                dispatcher.dispatch(DashboardAction::TransactionsLoaded(ticket, result));
            });
            || ()
        });
    }

    {
        let dispatcher = store.dispatcher();
        let tracker = history_tracker.clone();
        use_effect_with((state.selected_account, refresh_generation), move |(selected, _)| {
            if let Some(account_id) = *selected {
                let ticket = tracker.borrow_mut().issue();
                let days = settings::get_settings().history_days;
                log::debug!("Loading balance history for account {} (ticket {})", account_id, ticket.id());
                dispatcher.dispatch(DashboardAction::HistoryRequested(ticket));
                spawn_local(async move {
                    let result = get_balance_history(account_id, days).await;
                    dispatcher.dispatch(DashboardAction::HistoryLoaded(ticket, result));
                });
            }
            || ()
        });
    }

    let on_filter_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |filter: TransactionFilter| {
            dispatcher.dispatch(DashboardAction::SetFilter(filter));
        })
    };

    let on_select_account = {
        let dispatcher = store.dispatcher();
        Callback::from(move |account_id: i32| {
            log::debug!("Charting account {}", account_id);
            dispatcher.dispatch(DashboardAction::SelectAccount(Some(account_id)));
        })
    };

    let on_open_modal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| {
            log::info!("Opening Add Transaction modal");
            dispatcher.dispatch(DashboardAction::OpenForm);
        })
    };

    let on_close_modal = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| {
            log::info!("Closing Add Transaction modal");
            dispatcher.dispatch(DashboardAction::CloseForm);
        })
    };

    let on_created = {
        let dispatcher = store.dispatcher();
        Callback::from(move |transaction: Transaction| {
            log::info!("Transaction {} created, refreshing dashboard", transaction.id);
            if let Some(toast) = &toast {
                toast.show_success(format!("Transaction \"{}\" saved", transaction.description));
            }
            dispatcher.dispatch(DashboardAction::TransactionCreated);
        })
    };

    let chart_title = match state.selected_account {
        Some(account_id) => format!("Balance history: {}", state.account_name(account_id)),
        None => "Balance history".to_string(),
    };

    html! {
        <>
            <TransactionModal
                show={state.form_open}
                accounts={state.accounts.data.clone()}
                default_account={state.selected_account}
                on_close={on_close_modal}
                on_success={on_created}
            />

            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Overview"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_open_modal}>
                    <i class="fas fa-plus"></i> {" Add Transaction"}
                </button>
            </div>

            <Filters
                filter={state.filter.clone()}
                accounts={state.accounts.data.clone()}
                locale={(*locale).clone()}
                on_change={on_filter_change}
            />

            <AccountCards
                accounts={state.accounts.data.clone()}
                selected={state.selected_account}
                locale={(*locale).clone()}
                on_select={on_select_account}
            />

            <Stats totals={state.totals()} locale={(*locale).clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{chart_title}</h2>
                        <BalanceChart series={state.history_series(&locale)} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{format!("Monthly summary {}", state.filter.year)}</h2>
                        <MonthlySummaryPanel
                            year={state.filter.year}
                            refresh_generation={refresh_generation}
                            locale={(*locale).clone()}
                        />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Transactions"}</h2>
                    <TransactionList
                        groups={state.grouped_transactions(&locale)}
                        accounts={state.accounts.data.clone()}
                        loading={state.transactions.loading}
                        locale={(*locale).clone()}
                    />
                </div>
            </div>
        </>
    }
}
