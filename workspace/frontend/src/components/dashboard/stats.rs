use common::{DisplayLocale, MonthlyTotals};
use rust_decimal::Decimal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub totals: MonthlyTotals,
    pub locale: DisplayLocale,
}

/// Income, expenses and net result of the filtered transactions
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let totals = &props.totals;
    let net_class = if totals.total >= Decimal::ZERO { "text-primary" } else { "text-error" };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Income"}</div>
                    <div class="stat-value text-success">{props.locale.format_currency(totals.inflow)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Expenses"}</div>
                    <div class="stat-value text-error">{props.locale.format_currency(totals.outflow)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Net"}</div>
                    <div class={classes!("stat-value", net_class)}>{props.locale.format_signed_currency(totals.total)}</div>
                    <div class="stat-desc">{format!("{} transactions", totals.count)}</div>
                </div>
            </div>
        </div>
    }
}
