use common::{account_name, Account, DisplayLocale, MonthGroups, TransactionType};
use yew::prelude::*;

use crate::shared::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub groups: MonthGroups,
    pub accounts: Vec<Account>,
    pub loading: bool,
    pub locale: DisplayLocale,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.loading {
        return html! { <Loading text={Some("Loading transactions...".to_string())} /> };
    }

    if props.groups.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-receipt text-4xl mb-4 opacity-50"></i>
                <p>{"No transactions match the selected filters."}</p>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            { for props.groups.iter().map(|group| html! {
                <div key={group.label.clone()}>
                    <h3 class="text-lg font-semibold capitalize mb-2">{ &group.label }</h3>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Account"}</th>
                                    <th class="text-right">{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for group.transactions.iter().map(|transaction| {
                                    let amount_class = match transaction.transaction_type {
                                        TransactionType::Inflow => "text-success",
                                        TransactionType::Outflow => "text-error",
                                    };
                                    html! {
                                        <tr key={transaction.id}>
                                            <td>{ props.locale.format_date(transaction.date.date()) }</td>
                                            <td>{ &transaction.description }</td>
                                            <td><span class="badge badge-ghost">{ &transaction.category }</span></td>
                                            <td>{ account_name(&props.accounts, transaction.account_id) }</td>
                                            <td class={classes!("text-right", "font-mono", amount_class)}>
                                                { props.locale.format_signed_currency(transaction.signed_amount()) }
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            })}
        </div>
    }
}
