use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod shared;

use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use shared::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Finance Dashboard"><Dashboard /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title="404">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Dashboard} classes="link link-primary">{"Back to the dashboard"}</Link<Route>>
                </Layout>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Finance Dashboard Starting ===");
    log::debug!("Debug mode: {}", settings.debug_mode);

    wasm_bindgen_futures::spawn_local(async {
        settings::load_client_settings().await;

        let settings = settings::get_settings();
        log::info!("Application settings: {:?}", settings);
        log::debug!("API base URL: {}", settings.api_base_url());

        log::trace!("Initializing Yew renderer");
        yew::Renderer::<App>::new().render();
        log::info!("Application initialized successfully");
    });
}
