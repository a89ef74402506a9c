//! Locale-aware rendering of amounts and dates.
//!
//! Everything the views print goes through a [`DisplayLocale`], so the core
//! never hard-codes a locale and tests can pin one.

use std::str::FromStr;

use chrono::{Locale, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rusty_money::{FormattableCurrency, Formatter, Money, Params, Position, iso};
use tracing::warn;

/// Locale, date patterns and currency used to render values.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLocale {
    /// BCP 47 tag this locale was built from
    pub tag: &'static str,
    pub locale: Locale,
    /// Pattern for short dates (chart labels, list rows)
    pub date_pattern: &'static str,
    /// Pattern for month group headings
    pub month_pattern: &'static str,
    /// ISO 4217 code resolved through rusty-money
    pub currency_code: String,
    /// Thousands separator, e.g. `.` in `1.234,50`
    pub digit_separator: char,
    pub decimal_separator: char,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl DisplayLocale {
    pub fn pt_br() -> Self {
        Self {
            tag: "pt-BR",
            locale: Locale::pt_BR,
            date_pattern: "%d/%m/%Y",
            month_pattern: "%B de %Y",
            currency_code: "BRL".to_string(),
            digit_separator: '.',
            decimal_separator: ',',
        }
    }

    pub fn en_us() -> Self {
        Self {
            tag: "en-US",
            locale: Locale::en_US,
            date_pattern: "%m/%d/%Y",
            month_pattern: "%B %Y",
            currency_code: "USD".to_string(),
            digit_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn en_gb() -> Self {
        Self {
            tag: "en-GB",
            locale: Locale::en_GB,
            date_pattern: "%d/%m/%Y",
            month_pattern: "%B %Y",
            currency_code: "GBP".to_string(),
            digit_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Build from a language tag such as `pt-BR` or `en_US`.
    /// Unknown tags fall back to pt-BR.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().replace('_', "-").to_lowercase().as_str() {
            "pt-br" | "pt" => Self::pt_br(),
            "en-us" | "en" => Self::en_us(),
            "en-gb" => Self::en_gb(),
            other => {
                warn!("Unknown locale tag '{}', falling back to pt-BR", other);
                Self::pt_br()
            }
        }
    }

    /// Same locale, different currency
    pub fn with_currency(mut self, currency_code: &str) -> Self {
        self.currency_code = currency_code.trim().to_uppercase();
        self
    }

    /// Render an amount in the configured currency with this locale's
    /// separators, e.g. `R$1.234,50` for pt-BR or `$1,234.50` for en-US
    pub fn format_currency(&self, amount: Decimal) -> String {
        let Some(currency) = iso::find(&self.currency_code) else {
            warn!("Unknown currency code '{}'", self.currency_code);
            let plain = format!("{:.2}", amount).replace('.', &self.decimal_separator.to_string());
            return format!("{} {}", self.currency_code, plain);
        };

        // Always show every minor unit digit, so 1234.5 renders as 1234.50
        let exponent = currency.exponent();
        let mut rounded = amount.round_dp(exponent);
        rounded.rescale(exponent);

        let positions = if currency.symbol_first() {
            vec![Position::Sign, Position::Symbol, Position::Amount]
        } else {
            vec![Position::Sign, Position::Amount, Position::Space, Position::Symbol]
        };

        let params = Params {
            digit_separator: self.digit_separator,
            exponent_separator: self.decimal_separator,
            positions,
            symbol: Some(currency.symbol()),
            code: Some(currency.code()),
            ..Default::default()
        };
        Formatter::money(&Money::from_decimal(rounded, currency), params)
    }

    /// Parse an amount typed by a user of this locale.
    ///
    /// When both `.` and `,` appear the rightmost one is the decimal mark. A
    /// lone mark is read as grouping only when it is this locale's thousands
    /// separator, it is followed by exactly three digits, or it repeats.
    pub fn parse_amount(&self, raw: &str) -> Option<Decimal> {
        let raw = raw.trim();
        let decimal_mark = match (raw.rfind('.'), raw.rfind(',')) {
            (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
            (Some(index), None) | (None, Some(index)) => {
                let mark = raw[index..].chars().next()?;
                let repeated = raw.matches(mark).count() > 1;
                let grouped = mark == self.digit_separator && raw.len() - index - 1 == 3;
                (!repeated && !grouped).then_some(mark)
            }
            (None, None) => None,
        };

        let normalized: String = raw
            .chars()
            .filter_map(|c| match c {
                '.' | ',' if Some(c) == decimal_mark => Some('.'),
                '.' | ',' => None,
                other => Some(other),
            })
            .collect();
        Decimal::from_str(&normalized).ok()
    }

    /// Render an amount with an explicit sign, used for transaction rows
    pub fn format_signed_currency(&self, amount: Decimal) -> String {
        if amount > Decimal::ZERO {
            format!("+{}", self.format_currency(amount))
        } else {
            self.format_currency(amount)
        }
    }

    /// Short date, e.g. `01/02/2024` for pt-BR
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.render(date, self.date_pattern)
    }

    /// Month heading, e.g. `January 2024` for en-US
    pub fn month_label(&self, date: NaiveDate) -> String {
        self.render(date, self.month_pattern)
    }

    /// Localized month name for a month number (1-12), used by the filter select
    pub fn month_name(&self, month: u32) -> String {
        NaiveDate::from_ymd_opt(2000, month, 1)
            .map(|date| self.render(date, "%B"))
            .unwrap_or_default()
    }

    fn render(&self, date: NaiveDate, pattern: &str) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, self.locale)
            .to_string()
    }
}
