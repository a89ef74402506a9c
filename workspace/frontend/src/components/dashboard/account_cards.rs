use common::{classify, Account, DisplayLocale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountCardsProps {
    pub accounts: Vec<Account>,
    pub selected: Option<i32>,
    pub locale: DisplayLocale,
    pub on_select: Callback<i32>,
}

#[function_component(AccountCards)]
pub fn account_cards(props: &AccountCardsProps) -> Html {
    if props.accounts.is_empty() {
        return html! {
            <div class="text-center py-6 text-gray-500">
                <i class="fas fa-university text-3xl mb-2 opacity-50"></i>
                <p>{"No accounts found."}</p>
            </div>
        };
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mb-6">
            { for props.accounts.iter().map(|account| {
                let display = classify(account.balance);
                let is_selected = props.selected == Some(account.id);
                let onclick = {
                    let on_select = props.on_select.clone();
                    let account_id = account.id;
                    Callback::from(move |_| on_select.emit(account_id))
                };

                html! {
                    <div
                        key={account.id}
                        class={classes!("card", "bg-base-100", "shadow", "cursor-pointer", is_selected.then(|| classes!("ring-2", "ring-primary")))}
                        {onclick}
                    >
                        <div class="card-body p-4">
                            <div class="flex justify-between items-center">
                                <h3 class="font-semibold">{ &account.name }</h3>
                                <i class={classes!(display.trend.icon(), display.color_tier.text_class())}></i>
                            </div>
                            <p class={classes!("text-2xl", "font-bold", display.color_tier.text_class())}>
                                { props.locale.format_currency(account.balance) }
                            </p>
                            <progress
                                class={classes!("progress", "w-full", display.color_tier.progress_class())}
                                value={display.progress_percent().to_string()}
                                max="100"
                            ></progress>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
