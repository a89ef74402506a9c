use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Transaction, TransactionType};

/// Inflow/outflow totals of one month, as served by `/transactions/monthly`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyTotals {
    #[serde(rename = "entrada", with = "rust_decimal::serde::float")]
    pub inflow: Decimal,
    #[serde(rename = "saida", with = "rust_decimal::serde::float")]
    pub outflow: Decimal,
    /// `inflow - outflow`
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub count: u32,
}

impl MonthlyTotals {
    fn add(&mut self, transaction: &Transaction) {
        match transaction.transaction_type {
            TransactionType::Inflow => self.inflow += transaction.amount,
            TransactionType::Outflow => self.outflow += transaction.amount,
        }
        self.count += 1;
        self.total = self.inflow - self.outflow;
    }
}

/// Totals keyed by month number (1-12)
pub type MonthlySummary = BTreeMap<u32, MonthlyTotals>;

/// Totals over a list of transactions
pub fn summarize(transactions: &[Transaction]) -> MonthlyTotals {
    transactions
        .iter()
        .fold(MonthlyTotals::default(), |mut totals, transaction| {
            totals.add(transaction);
            totals
        })
}

/// API path of the yearly summary
pub fn monthly_summary_path(year: i32) -> String {
    format!("/transactions/monthly?year={}", year)
}
