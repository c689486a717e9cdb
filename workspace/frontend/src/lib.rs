use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod form;
pub mod hooks;
pub mod pages;
pub mod settings;

use crate::common::toast::ToastProvider;
use crate::pages::home::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="hero min-h-screen bg-base-200">
                    <div class="hero-content text-center">
                        <h1 class="text-3xl font-bold">{"404 Not Found"}</h1>
                    </div>
                </div>
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

    log::info!("=== Purametrics Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction API prefix: {}", settings.api_path);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
