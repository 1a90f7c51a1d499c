pub mod audio;
pub mod base;
pub mod clipboard;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{admin_wheel::AdminWheel, results::Results};

/// Paths are absolute, so the app is expected at the site root. Share links
/// resolve against the current page and stay valid under a sub-path.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Results,
   #[at("/index.html")] ResultsIndex,
   #[at("/admin")] Admin,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Results | Route::ResultsIndex | Route::NotFound => html! { <Results /> },
       Route::Admin => html! { <AdminWheel /> },
   }
}
