use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Balances strictly above this are shown as healthy
pub const HIGH_BALANCE_THRESHOLD: i64 = 1000;

/// Balance that fills the progress bar completely
pub const PROGRESS_CEILING: i64 = 5000;

/// Color bucket of an account card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Negative,
    LowPositive,
    HighPositive,
}

impl ColorTier {
    pub fn text_class(self) -> &'static str {
        match self {
            ColorTier::Negative => "text-error",
            ColorTier::LowPositive => "text-warning",
            ColorTier::HighPositive => "text-success",
        }
    }

    pub fn progress_class(self) -> &'static str {
        match self {
            ColorTier::Negative => "progress-error",
            ColorTier::LowPositive => "progress-warning",
            ColorTier::HighPositive => "progress-success",
        }
    }
}

/// Direction icon of an account card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "fas fa-arrow-trend-up",
            Trend::Down => "fas fa-arrow-trend-down",
            Trend::Flat => "fas fa-minus",
        }
    }
}

/// Display attributes derived from a single balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceDisplay {
    pub color_tier: ColorTier,
    pub trend: Trend,
    /// Share of [`PROGRESS_CEILING`], clamped to 0..=100
    pub progress: Decimal,
}

impl BalanceDisplay {
    pub fn progress_percent(&self) -> f64 {
        self.progress.to_f64().unwrap_or(0.0)
    }
}

/// Derive card attributes from a balance.
///
/// Comparisons are strict: a balance of exactly 1000 is `LowPositive` and a
/// balance of exactly 0 is `Negative` with a `Flat` trend.
pub fn classify(balance: Decimal) -> BalanceDisplay {
    let color_tier = if balance > Decimal::from(HIGH_BALANCE_THRESHOLD) {
        ColorTier::HighPositive
    } else if balance > Decimal::ZERO {
        ColorTier::LowPositive
    } else {
        ColorTier::Negative
    };

    let trend = if balance > Decimal::ZERO {
        Trend::Up
    } else if balance < Decimal::ZERO {
        Trend::Down
    } else {
        Trend::Flat
    };

    let progress = (balance / Decimal::from(PROGRESS_CEILING) * Decimal::ONE_HUNDRED)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    BalanceDisplay {
        color_tier,
        trend,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tier_boundaries() {
        assert_eq!(classify(Decimal::new(100001, 2)).color_tier, ColorTier::HighPositive);
        assert_eq!(classify(Decimal::from(1000)).color_tier, ColorTier::LowPositive);
        assert_eq!(classify(Decimal::new(1, 2)).color_tier, ColorTier::LowPositive);
        assert_eq!(classify(Decimal::ZERO).color_tier, ColorTier::Negative);
        assert_eq!(classify(Decimal::from(-250)).color_tier, ColorTier::Negative);
    }

    #[test]
    fn test_trend() {
        assert_eq!(classify(Decimal::from(5)).trend, Trend::Up);
        assert_eq!(classify(Decimal::from(-5)).trend, Trend::Down);
        assert_eq!(classify(Decimal::ZERO).trend, Trend::Flat);
    }

    #[test]
    fn test_progress_scale_and_clamp() {
        assert_eq!(classify(Decimal::from(2500)).progress, Decimal::from(50));
        assert_eq!(classify(Decimal::from(10000)).progress, Decimal::ONE_HUNDRED);
        assert_eq!(classify(Decimal::from(-100)).progress, Decimal::ZERO);
        assert_eq!(classify(Decimal::from(5000)).progress, Decimal::ONE_HUNDRED);
        assert_eq!(classify(Decimal::from(50)).progress, Decimal::ONE);
    }

    #[test]
    fn test_tier_matches_threshold_rule_across_range() {
        for cents in (-200_000i64..=200_000).step_by(2_500) {
            let balance = Decimal::new(cents, 2);
            let tier = classify(balance).color_tier;
            assert_eq!(tier == ColorTier::HighPositive, balance > Decimal::from(1000));
            assert_eq!(tier == ColorTier::Negative, balance <= Decimal::ZERO);
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(classify(Decimal::from(1250)).progress_percent(), 25.0);
    }
}
