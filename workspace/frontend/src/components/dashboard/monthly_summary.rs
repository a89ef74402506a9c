use common::{DisplayLocale, MonthlySummary, RequestTracker};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::transaction::get_monthly_summary;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct MonthlySummaryProps {
    pub year: i32,
    /// Bumped by the dashboard after a new transaction
    pub refresh_generation: u64,
    pub locale: DisplayLocale,
}

/// Per-month inflow and outflow of the filtered year
#[function_component(MonthlySummaryPanel)]
pub fn monthly_summary_panel(props: &MonthlySummaryProps) -> Html {
    let fetch_state = use_state(FetchState::<MonthlySummary>::default);
    let tracker = use_mut_ref(RequestTracker::default);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((props.year, props.refresh_generation), move |(year, _)| {
            let year = *year;
            let ticket = tracker.borrow_mut().issue();
            fetch_state.set(FetchState::Loading);
            spawn_local(async move {
                let result = get_monthly_summary(year).await;
                if !tracker.borrow().is_current(ticket) {
                    log::debug!("Dropping stale monthly summary for {}", year);
                    return;
                }
                match result {
                    Ok(summary) => fetch_state.set(FetchState::Success(summary)),
                    Err(e) => fetch_state.set(FetchState::Error(e.to_string())),
                }
            });
            || ()
        });
    }

    let summary = match &*fetch_state {
        FetchState::NotStarted | FetchState::Loading => return html! {},
        FetchState::Error(error) => {
            return html! {
                <div class="text-center py-8 text-gray-500" title={error.clone()}>
                    <i class="fas fa-calendar-xmark text-4xl mb-4 opacity-50"></i>
                    <p>{"Summary unavailable."}</p>
                </div>
            };
        }
        FetchState::Success(summary) if summary.is_empty() => {
            return html! {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-calendar text-4xl mb-4 opacity-50"></i>
                    <p>{"No transactions recorded this year."}</p>
                </div>
            };
        }
        FetchState::Success(summary) => summary,
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm w-full">
                <thead>
                    <tr>
                        <th>{"Month"}</th>
                        <th class="text-right">{"Income"}</th>
                        <th class="text-right">{"Expenses"}</th>
                        <th class="text-right">{"Net"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for summary.iter().map(|(month, totals)| html! {
                        <tr key={*month}>
                            <td class="capitalize">{ props.locale.month_name(*month) }</td>
                            <td class="text-right text-success">{ props.locale.format_currency(totals.inflow) }</td>
                            <td class="text-right text-error">{ props.locale.format_currency(totals.outflow) }</td>
                            <td class="text-right font-semibold">{ props.locale.format_signed_currency(totals.total) }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
