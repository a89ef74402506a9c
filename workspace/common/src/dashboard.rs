//! State machine behind the dashboard page.
//!
//! Each resource goes `idle -> loading -> idle` on its own; `form_open` is
//! independent of loading. The browser crate dispatches [`DashboardAction`]s
//! and re-fetches whenever `filter` or `refresh_generation` changes.

use tracing::{debug, error, warn};

use crate::error::DashboardError;
use crate::filter::TransactionFilter;
use crate::format::DisplayLocale;
use crate::grouping::{MonthGroups, group_by_month};
use crate::history::{HistorySeries, reshape};
use crate::sequence::FetchTicket;
use crate::summary::{MonthlyTotals, summarize};
use crate::{Account, BalanceHistoryPoint, Transaction, account_name};

/// What a failed fetch does to the data already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave the last successful data in place
    KeepPrevious,
    /// Clear the data
    ResetToEmpty,
}

/// One remotely loaded value plus its in-flight request
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: T,
    pub loading: bool,
    pending: Option<FetchTicket>,
    policy: FailurePolicy,
}

impl<T: Default> Resource<T> {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            data: T::default(),
            loading: false,
            pending: None,
            policy,
        }
    }

    fn request(&mut self, ticket: FetchTicket) {
        self.pending = Some(ticket);
        self.loading = true;
    }

    /// Returns false when the response is stale and was dropped
    fn finish(&mut self, name: &str, ticket: FetchTicket, result: Result<T, DashboardError>) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                "Dropping stale {} response (ticket {}, pending {:?})",
                name,
                ticket.id(),
                self.pending.map(FetchTicket::id)
            );
            return false;
        }

        self.pending = None;
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(err) => {
                error!("Failed to load {}: {}", name, err);
                if self.policy == FailurePolicy::ResetToEmpty {
                    self.data = T::default();
                }
            }
        }
        true
    }

    fn clear(&mut self) {
        self.data = T::default();
        self.loading = false;
        self.pending = None;
    }
}

/// Events the dashboard reacts to
#[derive(Debug, Clone)]
pub enum DashboardAction {
    SetFilter(TransactionFilter),
    AccountsRequested(FetchTicket),
    AccountsLoaded(FetchTicket, Result<Vec<Account>, DashboardError>),
    TransactionsRequested(FetchTicket),
    TransactionsLoaded(FetchTicket, Result<Vec<Transaction>, DashboardError>),
    HistoryRequested(FetchTicket),
    HistoryLoaded(FetchTicket, Result<Vec<BalanceHistoryPoint>, DashboardError>),
    SelectAccount(Option<i32>),
    OpenForm,
    CloseForm,
    /// The form reported a successful creation
    TransactionCreated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub filter: TransactionFilter,
    pub accounts: Resource<Vec<Account>>,
    pub transactions: Resource<Vec<Transaction>>,
    pub history: Resource<Vec<BalanceHistoryPoint>>,
    /// Account whose balance history is charted
    pub selected_account: Option<i32>,
    pub form_open: bool,
    /// Bumped whenever all data must be fetched again
    pub refresh_generation: u64,
}

impl DashboardState {
    pub fn new(filter: TransactionFilter) -> Self {
        Self {
            filter,
            accounts: Resource::new(FailurePolicy::KeepPrevious),
            transactions: Resource::new(FailurePolicy::ResetToEmpty),
            history: Resource::new(FailurePolicy::ResetToEmpty),
            selected_account: None,
            form_open: false,
            refresh_generation: 0,
        }
    }

    pub fn reduce(&self, action: DashboardAction) -> DashboardState {
        let mut next = self.clone();
        match action {
            DashboardAction::SetFilter(filter) => {
                if filter != next.filter {
                    debug!("Filter changed: {:?}", filter);
                    if filter.account_id.is_some() && filter.account_id != next.selected_account {
                        next.history.clear();
                        next.selected_account = filter.account_id;
                    }
                    next.filter = filter;
                }
            }
            DashboardAction::AccountsRequested(ticket) => next.accounts.request(ticket),
            DashboardAction::AccountsLoaded(ticket, result) => {
                if next.accounts.finish("accounts", ticket, result) {
                    next.ensure_selection();
                }
            }
            DashboardAction::TransactionsRequested(ticket) => next.transactions.request(ticket),
            DashboardAction::TransactionsLoaded(ticket, result) => {
                next.transactions.finish("transactions", ticket, result);
            }
            DashboardAction::HistoryRequested(ticket) => next.history.request(ticket),
            DashboardAction::HistoryLoaded(ticket, result) => {
                next.history.finish("balance history", ticket, result);
            }
            DashboardAction::SelectAccount(account_id) => {
                if account_id != next.selected_account {
                    next.history.clear();
                    next.selected_account = account_id;
                }
            }
            DashboardAction::OpenForm => next.form_open = true,
            DashboardAction::CloseForm => next.form_open = false,
            DashboardAction::TransactionCreated => {
                next.form_open = false;
                next.refresh_generation += 1;
            }
        }
        next
    }

    /// Keep the chart on an existing account after the account list changes
    fn ensure_selection(&mut self) {
        let accounts = &self.accounts.data;
        let still_present = self
            .selected_account
            .is_some_and(|id| accounts.iter().any(|account| account.id == id));
        if still_present {
            return;
        }

        let fallback = accounts.first().map(|account| account.id);
        if self.selected_account.is_some() {
            warn!(
                "Selected account {:?} is gone, switching to {:?}",
                self.selected_account, fallback
            );
        }
        if fallback != self.selected_account {
            self.history.clear();
        }
        self.selected_account = fallback;
    }

    pub fn account_name(&self, account_id: i32) -> &str {
        account_name(&self.accounts.data, account_id)
    }

    pub fn grouped_transactions(&self, locale: &DisplayLocale) -> MonthGroups {
        group_by_month(&self.transactions.data, locale)
    }

    pub fn history_series(&self, locale: &DisplayLocale) -> HistorySeries {
        reshape(&self.history.data, locale)
    }

    pub fn totals(&self) -> MonthlyTotals {
        summarize(&self.transactions.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::RequestTracker;
    use crate::test_support::{account, transaction};
    use crate::{TransactionType, UNKNOWN_ACCOUNT_LABEL};
    use rust_decimal::Decimal;

    fn state() -> DashboardState {
        DashboardState::new(TransactionFilter::for_month(2024, 3).unwrap())
    }

    fn network_error() -> DashboardError {
        DashboardError::Request("connection refused".to_string())
    }

    #[test]
    fn test_transactions_loading_cycle() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.issue();

        let loading = state().reduce(DashboardAction::TransactionsRequested(ticket));
        assert!(loading.transactions.loading);

        let loaded = loading.reduce(DashboardAction::TransactionsLoaded(
            ticket,
            Ok(vec![transaction(1, "2024-03-02", TransactionType::Inflow, 50)]),
        ));
        assert!(!loaded.transactions.loading);
        assert_eq!(loaded.transactions.data.len(), 1);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut tracker = RequestTracker::default();
        let old = tracker.issue();
        let new = tracker.issue();

        let current = state()
            .reduce(DashboardAction::TransactionsRequested(old))
            .reduce(DashboardAction::TransactionsRequested(new))
            .reduce(DashboardAction::TransactionsLoaded(
                new,
                Ok(vec![transaction(2, "2024-03-05", TransactionType::Outflow, 10)]),
            ))
            .reduce(DashboardAction::TransactionsLoaded(
                old,
                Ok(vec![transaction(1, "2024-02-05", TransactionType::Outflow, 99)]),
            ));

        assert_eq!(current.transactions.data.len(), 1);
        assert_eq!(current.transactions.data[0].id, 2);
        assert!(!current.transactions.loading);
    }

    #[test]
    fn test_accounts_keep_previous_data_on_failure() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();

        let current = state()
            .reduce(DashboardAction::AccountsRequested(first))
            .reduce(DashboardAction::AccountsLoaded(first, Ok(vec![account(1, "Checking", 500)])))
            .reduce(DashboardAction::AccountsRequested(second))
            .reduce(DashboardAction::AccountsLoaded(second, Err(network_error())));

        assert_eq!(current.accounts.data, vec![account(1, "Checking", 500)]);
        assert!(!current.accounts.loading);
    }

    #[test]
    fn test_transactions_and_history_reset_on_failure() {
        let mut tracker = RequestTracker::default();
        let (t1, t2, h1, h2) = (tracker.issue(), tracker.issue(), tracker.issue(), tracker.issue());

        let current = state()
            .reduce(DashboardAction::TransactionsRequested(t1))
            .reduce(DashboardAction::TransactionsLoaded(
                t1,
                Ok(vec![transaction(1, "2024-03-02", TransactionType::Inflow, 50)]),
            ))
            .reduce(DashboardAction::TransactionsRequested(t2))
            .reduce(DashboardAction::TransactionsLoaded(t2, Err(network_error())))
            .reduce(DashboardAction::HistoryRequested(h1))
            .reduce(DashboardAction::HistoryLoaded(
                h1,
                Ok(vec![BalanceHistoryPoint {
                    date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    balance: Decimal::from(10),
                }]),
            ))
            .reduce(DashboardAction::HistoryRequested(h2))
            .reduce(DashboardAction::HistoryLoaded(h2, Err(network_error())));

        assert!(current.transactions.data.is_empty());
        assert!(current.history.data.is_empty());
    }

    #[test]
    fn test_transaction_created_closes_form_and_requests_refresh() {
        let opened = state().reduce(DashboardAction::OpenForm);
        assert!(opened.form_open);

        let created = opened.reduce(DashboardAction::TransactionCreated);
        assert!(!created.form_open);
        assert_eq!(created.refresh_generation, opened.refresh_generation + 1);

        let closed = state()
            .reduce(DashboardAction::OpenForm)
            .reduce(DashboardAction::CloseForm);
        assert!(!closed.form_open);
        assert_eq!(closed.refresh_generation, 0);
    }

    #[test]
    fn test_filter_change_only_when_different() {
        let initial = state();
        let same = initial.reduce(DashboardAction::SetFilter(initial.filter.clone()));
        assert_eq!(same, initial);

        let filter = initial.filter.clone().with_account(Some(4));
        let changed = initial.reduce(DashboardAction::SetFilter(filter.clone()));
        assert_eq!(changed.filter, filter);
        assert_eq!(changed.selected_account, Some(4));
    }

    #[test]
    fn test_first_account_is_selected_after_load() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.issue();

        let loaded = state()
            .reduce(DashboardAction::AccountsRequested(ticket))
            .reduce(DashboardAction::AccountsLoaded(
                ticket,
                Ok(vec![account(7, "Wallet", 10), account(8, "Bank", 20)]),
            ));
        assert_eq!(loaded.selected_account, Some(7));

        let switched = loaded.reduce(DashboardAction::SelectAccount(Some(8)));
        assert_eq!(switched.selected_account, Some(8));

        // A reload that still contains the account keeps the selection.
        let again = tracker.issue();
        let reloaded = switched
            .reduce(DashboardAction::AccountsRequested(again))
            .reduce(DashboardAction::AccountsLoaded(
                again,
                Ok(vec![account(7, "Wallet", 10), account(8, "Bank", 25)]),
            ));
        assert_eq!(reloaded.selected_account, Some(8));
    }

    #[test]
    fn test_unknown_account_resolves_to_sentinel() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.issue();
        let loaded = state()
            .reduce(DashboardAction::AccountsRequested(ticket))
            .reduce(DashboardAction::AccountsLoaded(ticket, Ok(vec![account(1, "Checking", 0)])));

        assert_eq!(loaded.account_name(1), "Checking");
        assert_eq!(loaded.account_name(42), UNKNOWN_ACCOUNT_LABEL);
    }

    #[test]
    fn test_derived_views() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.issue();
        let loaded = state()
            .reduce(DashboardAction::TransactionsRequested(ticket))
            .reduce(DashboardAction::TransactionsLoaded(
                ticket,
                Ok(vec![
                    transaction(1, "2024-03-02", TransactionType::Inflow, 100),
                    transaction(2, "2024-03-09", TransactionType::Outflow, 40),
                ]),
            ));

        let groups = loaded.grouped_transactions(&DisplayLocale::en_us());
        assert_eq!(groups.labels(), vec!["March 2024"]);
        assert_eq!(loaded.totals().total, Decimal::from(60));
        assert!(loaded.history_series(&DisplayLocale::en_us()).is_empty());
    }
}
