use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::BalanceHistoryPoint;
use crate::format::DisplayLocale;

/// Trailing window requested for the balance chart
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Parallel x/y arrays ready for the chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

impl HistorySeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn values_f64(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|value| value.to_f64().unwrap_or(0.0))
            .collect()
    }
}

/// Split history points into labels and values, keeping the server's order.
pub fn reshape(points: &[BalanceHistoryPoint], locale: &DisplayLocale) -> HistorySeries {
    let (labels, values) = points
        .iter()
        .map(|point| (locale.format_date(point.date), point.balance))
        .unzip();

    HistorySeries { labels, values }
}

/// API path of an account's balance history
pub fn balance_history_path(account_id: i32, days: u32) -> String {
    format!("/accounts/{}/balance-history?days={}", account_id, days)
}
