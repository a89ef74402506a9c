use common::{Account, DisplayLocale, TransactionFilter, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FiltersProps {
    pub filter: TransactionFilter,
    pub accounts: Vec<Account>,
    pub locale: DisplayLocale,
    pub on_change: Callback<TransactionFilter>,
}

/// Month, year, type, category and account selectors above the dashboard
#[function_component(Filters)]
pub fn filters(props: &FiltersProps) -> Html {
    let filter = &props.filter;

    let on_month = {
        let filter = filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse::<u32>() {
                Ok(month) if (1..=12).contains(&month) => {
                    on_change.emit(TransactionFilter { month, ..filter.clone() })
                }
                _ => log::warn!("Ignoring invalid month selection: {}", value),
            }
        })
    };

    let on_year = {
        let filter = filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            match value.trim().parse::<i32>() {
                Ok(year) => on_change.emit(TransactionFilter { year, ..filter.clone() }),
                Err(_) => log::warn!("Ignoring invalid year: {}", value),
            }
        })
    };

    let on_type = {
        let filter = filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(filter.clone().with_transaction_type(TransactionType::parse(&value)));
        })
    };

    let on_category = {
        let filter = filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(filter.clone().with_category(Some(value)));
        })
    };

    let on_account = {
        let filter = filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(filter.clone().with_account(value.parse::<i32>().ok()));
        })
    };

    let selected_type = filter.transaction_type.map(TransactionType::as_str).unwrap_or("");

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body py-4">
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Month"}</span></label>
                        <select class="select select-bordered select-sm" onchange={on_month}>
                            { for (1..=12u32).map(|month| html! {
                                <option value={month.to_string()} selected={month == filter.month}>
                                    { props.locale.month_name(month) }
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Year"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered input-sm"
                            value={filter.year.to_string()}
                            onchange={on_year}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Type"}</span></label>
                        <select class="select select-bordered select-sm" onchange={on_type}>
                            <option value="" selected={selected_type.is_empty()}>{"All"}</option>
                            { for TransactionType::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={kind.as_str() == selected_type}>
                                    { kind.label() }
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Category"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            placeholder="Any category"
                            value={filter.category.clone().unwrap_or_default()}
                            onchange={on_category}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Account"}</span></label>
                        <select class="select select-bordered select-sm" onchange={on_account}>
                            <option value="" selected={filter.account_id.is_none()}>{"All accounts"}</option>
                            { for props.accounts.iter().map(|account| html! {
                                <option value={account.id.to_string()} selected={filter.account_id == Some(account.id)}>
                                    { &account.name }
                                </option>
                            })}
                        </select>
                    </div>
                </div>
            </div>
        </div>
    }
}
