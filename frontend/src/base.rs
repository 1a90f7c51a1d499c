use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, styles};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Page chrome shared by the results and admin pages.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Results} classes={classes!(styles::NAV_BRAND)}>
                        {"Weekly Draw"}
                    </Link<Route>>
                    <div class="flex items-center space-x-4">
                        <Link<Route> to={Route::Results} classes={classes!(styles::NAV_LINK)}>{"Results"}</Link<Route>>
                        <Link<Route> to={Route::Admin} classes={classes!(styles::NAV_LINK)}>{"Admin"}</Link<Route>>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{props.children.clone()}</main>
        </div>
    }
}
