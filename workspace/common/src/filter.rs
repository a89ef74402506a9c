use chrono::{Datelike, Local};
use serde::Serialize;

use crate::TransactionType;
use crate::error::{DashboardError, Result};

/// Criteria sent to `GET /transactions/`.
///
/// Only the fields that are set end up in the query string; field order here
/// is the parameter order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionFilter {
    pub month: u32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "is_blank")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).is_none_or(str::is_empty)
}

impl TransactionFilter {
    /// Filter for one month with nothing else set
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(DashboardError::validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(Self {
            month,
            year,
            transaction_type: None,
            category: None,
            account_id: None,
            skip: None,
            limit: None,
        })
    }

    /// Filter for the viewer's current month
    pub fn current_month() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
            transaction_type: None,
            category: None,
            account_id: None,
            skip: None,
            limit: None,
        }
    }

    pub fn with_transaction_type(mut self, transaction_type: Option<TransactionType>) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Blank categories are stored as unset
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    pub fn with_account(mut self, account_id: Option<i32>) -> Self {
        self.account_id = account_id;
        self
    }

    /// Encoded query string without the leading `?`
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Full API path for listing transactions with this filter
    pub fn transactions_path(&self) -> Result<String> {
        let query = self.to_query_string()?;
        if query.is_empty() {
            Ok("/transactions/".to_string())
        } else {
            Ok(format!("/transactions/?{}", query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_and_year_only() {
        let filter = TransactionFilter::for_month(2024, 3).unwrap();
        assert_eq!(filter.to_query_string().unwrap(), "month=3&year=2024");
        assert_eq!(
            filter.transactions_path().unwrap(),
            "/transactions/?month=3&year=2024"
        );
    }

    #[test]
    fn test_all_fields_in_wire_order() {
        let filter = TransactionFilter {
            skip: Some(0),
            limit: Some(100),
            ..TransactionFilter::for_month(2024, 11)
                .unwrap()
                .with_transaction_type(Some(TransactionType::Outflow))
                .with_category(Some("Food".to_string()))
                .with_account(Some(2))
        };

        assert_eq!(
            filter.to_query_string().unwrap(),
            "month=11&year=2024&transaction_type=saida&category=Food&account_id=2&skip=0&limit=100"
        );
    }

    #[test]
    fn test_blank_category_is_omitted() {
        let mut filter = TransactionFilter::for_month(2024, 3)
            .unwrap()
            .with_category(Some("   ".to_string()));
        assert_eq!(filter.category, None);

        // Even when set directly, an empty category never reaches the query.
        filter.category = Some(String::new());
        assert_eq!(filter.to_query_string().unwrap(), "month=3&year=2024");
    }

    #[test]
    fn test_category_is_url_encoded() {
        let filter = TransactionFilter::for_month(2024, 1)
            .unwrap()
            .with_category(Some("Casa & Lazer".to_string()));
        assert_eq!(
            filter.to_query_string().unwrap(),
            "month=1&year=2024&category=Casa+%26+Lazer"
        );
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(matches!(
            TransactionFilter::for_month(2024, 0),
            Err(DashboardError::Validation(_))
        ));
        assert!(TransactionFilter::for_month(2024, 13).is_err());
    }

    #[test]
    fn test_current_month_is_valid() {
        let filter = TransactionFilter::current_month();
        assert!((1..=12).contains(&filter.month));
        assert!(filter.transaction_type.is_none());
    }
}
