pub mod components;
pub mod config;
pub mod hooks;
pub mod outcome;
pub mod pages;
pub mod sound;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{GamePage, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={styles::CONTAINER}>
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <GamePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
