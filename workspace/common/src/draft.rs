use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{DashboardError, Result};
use crate::format::DisplayLocale;
use crate::{CreateTransactionRequest, TransactionType, dates};

/// Raw values of the "new transaction" form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    pub transaction_type: String,
    pub category: String,
    pub amount: String,
    pub account_id: String,
}

impl TransactionDraft {
    /// Check the input and build the request body. The amount is read with
    /// the separators of `locale`.
    pub fn validate(&self, locale: &DisplayLocale) -> Result<CreateTransactionRequest> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DashboardError::validation("Description is required"));
        }

        let transaction_type = TransactionType::parse(&self.transaction_type)
            .ok_or_else(|| DashboardError::validation("Choose income or expense"))?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(DashboardError::validation("Category is required"));
        }

        let amount = locale
            .parse_amount(&self.amount)
            .ok_or_else(|| DashboardError::validation("Invalid amount format"))?;
        if amount <= Decimal::ZERO {
            return Err(DashboardError::validation("Amount must be greater than zero"));
        }

        let date = dates::parse_date(&self.date)
            .map_err(|_| DashboardError::validation("Invalid date format"))?;

        let account_id = self
            .account_id
            .trim()
            .parse::<i32>()
            .map_err(|_| DashboardError::validation("Please select an account"))?;

        Ok(CreateTransactionRequest {
            date: date.and_time(NaiveTime::MIN),
            description: description.to_string(),
            transaction_type,
            category: category.to_string(),
            amount,
            account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            date: "2024-03-10".to_string(),
            description: "  Groceries ".to_string(),
            transaction_type: "saida".to_string(),
            category: "Food".to_string(),
            amount: "42,50".to_string(),
            account_id: "3".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_builds_request() {
        let request = draft().validate(&DisplayLocale::pt_br()).unwrap();
        assert_eq!(request.description, "Groceries");
        assert_eq!(request.transaction_type, TransactionType::Outflow);
        assert_eq!(request.amount, Decimal::new(4250, 2));
        assert_eq!(request.account_id, 3);
        assert_eq!(
            request.date,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_rejects_blank_description() {
        let mut input = draft();
        input.description = "   ".to_string();
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()),
            Err(DashboardError::Validation("Description is required".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let mut input = draft();
        input.amount = "0".to_string();
        assert!(input.validate(&DisplayLocale::pt_br()).is_err());

        input.amount = "-5".to_string();
        assert!(input.validate(&DisplayLocale::pt_br()).is_err());

        input.amount = "abc".to_string();
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()),
            Err(DashboardError::Validation("Invalid amount format".to_string()))
        );
    }

    #[test]
    fn test_amount_with_thousands_separator() {
        let mut input = draft();
        input.amount = "1.234,56".to_string();
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()).unwrap().amount,
            Decimal::new(123456, 2)
        );

        input.amount = "1,234.56".to_string();
        assert_eq!(
            input.validate(&DisplayLocale::en_us()).unwrap().amount,
            Decimal::new(123456, 2)
        );
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()).unwrap().amount,
            Decimal::new(123456, 2)
        );
    }

    #[test]
    fn test_rejects_missing_account_and_type() {
        let mut input = draft();
        input.account_id = String::new();
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()),
            Err(DashboardError::Validation("Please select an account".to_string()))
        );

        let mut input = draft();
        input.transaction_type = "transfer".to_string();
        assert!(input.validate(&DisplayLocale::pt_br()).is_err());
    }

    #[test]
    fn test_rejects_bad_date_and_category() {
        let mut input = draft();
        input.date = "10/03/2024".to_string();
        assert_eq!(
            input.validate(&DisplayLocale::pt_br()),
            Err(DashboardError::Validation("Invalid date format".to_string()))
        );

        let mut input = draft();
        input.category = String::new();
        assert!(input.validate(&DisplayLocale::pt_br()).is_err());
    }
}
