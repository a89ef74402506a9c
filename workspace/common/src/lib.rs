//! Core of the finance dashboard: the transport types exchanged with the
//! finance API plus the pure transformations the browser client renders.
//! Nothing in here touches the DOM or the network, so it is tested natively.

pub mod balance;
pub mod dashboard;
pub mod dates;
pub mod draft;
pub mod error;
pub mod filter;
pub mod format;
pub mod grouping;
pub mod history;
pub mod sequence;
pub mod summary;

pub use balance::{BalanceDisplay, ColorTier, Trend, classify};
pub use dashboard::{DashboardAction, DashboardState, FailurePolicy, Resource};
pub use draft::TransactionDraft;
pub use error::{DashboardError, Result};
pub use filter::TransactionFilter;
pub use format::DisplayLocale;
pub use grouping::{MonthGroup, MonthGroups, group_by_month};
pub use history::{HistorySeries, reshape};
pub use sequence::{FetchTicket, RequestTracker};
pub use summary::{MonthlySummary, MonthlyTotals, summarize};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label shown for a transaction whose account is not among the loaded accounts
pub const UNKNOWN_ACCOUNT_LABEL: &str = "Unknown account";

/// Runtime configuration handed to the browser by the dashboard host
/// (`GET /client-settings.json`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub locale: String,
    pub currency_code: String,
    pub history_days: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            locale: "pt-BR".to_string(),
            currency_code: "BRL".to_string(),
            history_days: history::DEFAULT_HISTORY_DAYS,
        }
    }
}

/// Error body returned by the API on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

// ===================== Accounts =====================

/// Account as listed by `GET /accounts/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i32,
    pub name: String,
    /// Authoritative server balance, never adjusted client-side
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// One sample of `GET /accounts/{id}/balance-history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceHistoryPoint {
    #[serde(with = "dates::date")]
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Resolve an account id to its display name, falling back to
/// [`UNKNOWN_ACCOUNT_LABEL`].
pub fn account_name(accounts: &[Account], account_id: i32) -> &str {
    accounts
        .iter()
        .find(|account| account.id == account_id)
        .map(|account| account.name.as_str())
        .unwrap_or(UNKNOWN_ACCOUNT_LABEL)
}

// ===================== Transactions =====================

/// Direction of a transaction. The API uses the Portuguese wire names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "entrada")]
    Inflow,
    #[serde(rename = "saida")]
    Outflow,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Inflow, TransactionType::Outflow];

    /// Wire value used in payloads and query strings
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Inflow => "entrada",
            TransactionType::Outflow => "saida",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Inflow => "Income",
            TransactionType::Outflow => "Expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "entrada" => Some(TransactionType::Inflow),
            "saida" => Some(TransactionType::Outflow),
            _ => None,
        }
    }
}

/// Transaction as listed by `GET /transactions/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub description: String,
    /// Always non-negative; the sign comes from `transaction_type`
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: String,
    pub account_id: i32,
    #[serde(with = "dates::timestamp")]
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Amount with the sign implied by the transaction type
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Inflow => self.amount,
            TransactionType::Outflow => -self.amount,
        }
    }
}

/// Request body for `POST /transactions/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    #[serde(with = "dates::timestamp")]
    pub date: NaiveDateTime,
    pub description: String,
    pub transaction_type: TransactionType,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub account_id: i32,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveTime;

    pub fn transaction(id: i32, date: &str, transaction_type: TransactionType, amount: i64) -> Transaction {
        Transaction {
            id,
            description: format!("Transaction {}", id),
            amount: Decimal::from(amount),
            transaction_type,
            category: "General".to_string(),
            account_id: 1,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_time(NaiveTime::MIN),
        }
    }

    pub fn account(id: i32, name: &str, balance: i64) -> Account {
        Account {
            id,
            name: name.to_string(),
            balance: Decimal::from(balance),
        }
    }
}
