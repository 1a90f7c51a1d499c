use shared::constants::NO_RESULT_MARK;
use shared::shared_wheel_game::SpinResult;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning || !props.can_spin}
            class={classes!(styles::BUTTON_PRIMARY, "w-full")}
        >
            <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10" />
                <path d="M12 6v6l4 2" />
            </svg>
            <span>{button_text}</span>
        </button>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<SpinResult>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let (conductor, vip) = match &props.result {
        Some(result) => (result.conductor_name.clone(), result.vip_name.clone()),
        None => (NO_RESULT_MARK.to_string(), NO_RESULT_MARK.to_string()),
    };

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
            <div>
                <div class={styles::TEXT_SMALL}>{"Train Conductor"}</div>
                <div class={styles::TEXT_WINNER}>{conductor}</div>
            </div>
            <div>
                <div class={styles::TEXT_SMALL}>{"VIP Passenger"}</div>
                <div class={styles::TEXT_WINNER}>{vip}</div>
            </div>
        </div>
    }
}

// Share link box with copy button
#[derive(Properties, PartialEq)]
pub struct ShareLinkBoxProps {
    pub text: AttrValue,
    pub input_ref: NodeRef,
    pub copy_label: AttrValue,
    pub can_copy: bool,
    pub on_copy: Callback<MouseEvent>,
}

#[function_component(ShareLinkBox)]
pub fn share_link_box(props: &ShareLinkBoxProps) -> Html {
    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{"Share link"}</label>
            <div class="mt-2 flex gap-2">
                <input
                    ref={props.input_ref.clone()}
                    class={styles::INPUT}
                    type="text"
                    readonly=true
                    value={props.text.clone()}
                />
                <button
                    class={styles::BUTTON_SECONDARY}
                    disabled={!props.can_copy}
                    onclick={props.on_copy.clone()}
                >
                    {props.copy_label.clone()}
                </button>
            </div>
        </div>
    }
}

// File picker plus dedupe toggle
#[derive(Properties, PartialEq)]
pub struct NameUploadProps {
    pub loaded_count: usize,
    pub dedupe: bool,
    pub on_file: Callback<web_sys::File>,
    pub on_dedupe_toggle: Callback<bool>,
}

#[function_component(NameUpload)]
pub fn name_upload(props: &NameUploadProps) -> Html {
    let on_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // Allow picking the same file again
            input.set_value("");
        })
    };

    let on_dedupe = {
        let on_dedupe_toggle = props.on_dedupe_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_dedupe_toggle.emit(input.checked());
        })
    };

    html! {
        <div class="space-y-3">
            <label class={styles::TEXT_LABEL}>{"Name list (.txt or .csv)"}</label>
            <input type="file" accept=".txt,.csv,text/plain" onchange={on_change} class={styles::TEXT_BODY} />
            <div class="flex items-center justify-between">
                <label class={classes!(styles::TEXT_SMALL, "flex", "items-center", "gap-2")}>
                    <input type="checkbox" checked={props.dedupe} onchange={on_dedupe} />
                    {"Remove duplicate names"}
                </label>
                <span class={styles::TEXT_SMALL}>{format!("{} names", props.loaded_count)}</span>
            </div>
        </div>
    }
}
