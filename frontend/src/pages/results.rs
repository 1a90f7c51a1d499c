use shared::constants::CACHE_KEY;
use shared::results::{resolve_results, ResultsView};
use shared::share_link::decode_share_query;
use web_sys::window;
use yew::prelude::*;

use crate::{base::Base, styles};

/// Works out what to show from the URL or the cached record, writing fresh
/// URL results back to local storage.
fn load_results_view() -> ResultsView {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query = decode_share_query(&search);

    let storage = window().and_then(|w| w.local_storage().ok().flatten());
    let cached = storage
        .as_ref()
        .and_then(|s| s.get_item(CACHE_KEY).ok().flatten());

    let view = resolve_results(&query, cached.as_deref(), js_sys::Date::now() as i64);

    if let (Some(record), Some(storage)) = (&view.to_cache, &storage) {
        match record.to_json() {
            Ok(json) => {
                if let Err(e) = storage.set_item(CACHE_KEY, &json) {
                    log::warn!("Failed to cache result: {:?}", e);
                }
            }
            Err(e) => log::warn!("Failed to encode result: {}", e),
        }
    }

    view
}

#[derive(Properties, PartialEq)]
struct WinnerCardProps {
    title: AttrValue,
    name: AttrValue,
}

#[function_component(WinnerCard)]
fn winner_card(props: &WinnerCardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h2 class={styles::TEXT_SMALL}>{props.title.clone()}</h2>
            <p class={classes!(styles::TEXT_WINNER, "mt-2")}>{props.name.clone()}</p>
        </div>
    }
}

#[function_component(Results)]
pub fn results() -> Html {
    let view = use_state(load_results_view);

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <h1 class={classes!(styles::TEXT_H1, "text-center")}>{"This Week's Winners"}</h1>
                if let Some(heading) = view.week_heading() {
                    <p class={classes!(styles::TEXT_BODY, "text-center", "mt-2")}>{heading}</p>
                }
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
                    <WinnerCard title="Train Conductor" name={view.conductor.clone()} />
                    <WinnerCard title="VIP Passenger" name={view.vip.clone()} />
                </div>
            </div>
        </Base>
    }
}
