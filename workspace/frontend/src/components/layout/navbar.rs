use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let settings = settings::get_settings();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-2">
                <i class="fas fa-wallet text-primary text-xl"></i>
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2 px-4">
                <span class="badge badge-ghost hidden md:inline-flex" title={settings.api_base_url()}>
                    { format!("{} · {}", settings.locale, settings.currency_code) }
                </span>
            </div>
        </div>
    }
}
