mod wheel_canvas;
mod wheel_utils;

use gloo::file::callbacks::{read_as_text, FileReader};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use shared::constants::{COPIED_LABEL, COPY_CONFIRM_MS, COPY_LABEL, SHARE_LINK_IDLE, SHARE_LINK_SPINNING};
use shared::name_list::{parse_names, ParticipantList};
use shared::share_link::build_share_url;
use shared::shared_wheel_game::{FrameOutcome, SpinConfig, SpinEngine, SpinResult, SpinTicket};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::audio::WebAudioFeedback;
use crate::base::Base;
use crate::clipboard::copy_text;
use crate::config;
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{NameUpload, ResultDisplay, ShareLinkBox, SpinButton};

type WheelEngine = SpinEngine<WebAudioFeedback>;

/// Everything a scheduled animation frame needs to drive the engine forward.
#[derive(Clone)]
struct FrameLoop {
    engine: Rc<RefCell<WheelEngine>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    on_frame: Callback<FrameOutcome>,
}

fn schedule_frame(frame_loop: FrameLoop, ticket: SpinTicket) {
    let handle_slot = frame_loop.frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        let outcome = frame_loop.engine.borrow_mut().advance_frame(ticket, timestamp);
        if outcome.needs_next_frame() {
            schedule_frame(frame_loop.clone(), ticket);
        } else {
            frame_loop.frame.borrow_mut().take();
        }
        frame_loop.on_frame.emit(outcome);
    });
    *handle_slot.borrow_mut() = Some(handle);
}

#[function_component(AdminWheel)]
pub fn admin_wheel() -> Html {
    let engine = use_mut_ref(|| WheelEngine::new(SpinConfig::default(), WebAudioFeedback::default()));
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let reader = use_mut_ref(|| None::<FileReader>);
    let copy_timeout = use_mut_ref(|| None::<Timeout>);
    let share_input_ref = use_node_ref();

    let names = use_state(|| Rc::new(ParticipantList::default()));
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let result = use_state(|| None::<SpinResult>);
    let share_link = use_state(|| None::<String>);
    let week = {
        let engine = engine.clone();
        use_state(move || engine.borrow().week().to_string())
    };
    let dedupe = use_state(|| true);
    let copy_label = use_state(|| COPY_LABEL.to_string());

    let on_frame = {
        let engine = engine.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let share_link = share_link.clone();

        Callback::from(move |outcome: FrameOutcome| {
            let engine = engine.borrow();
            rotation.set(engine.state().rotation_angle);
            if !outcome.needs_next_frame() {
                is_spinning.set(false);
            }

            if let FrameOutcome::Finished(spin) = outcome {
                match build_share_url(
                    &config::results_page_url(),
                    engine.week().as_str(),
                    &spin.conductor_name,
                    &spin.vip_name,
                ) {
                    Ok(url) => share_link.set(Some(url)),
                    Err(e) => {
                        log::error!("Failed to build share link: {}", e);
                        share_link.set(None);
                    }
                }
                result.set(Some(spin));
            }
        })
    };

    let on_spin = {
        let frame_loop = FrameLoop {
            engine: engine.clone(),
            frame: frame.clone(),
            on_frame,
        };
        let is_spinning = is_spinning.clone();
        let share_link = share_link.clone();
        let copy_label = copy_label.clone();

        Callback::from(move |_: MouseEvent| {
            let ticket = frame_loop.engine.borrow_mut().start_spin(config::now_ms());
            let Some(ticket) = ticket else {
                return;
            };

            is_spinning.set(true);
            share_link.set(None);
            copy_label.set(COPY_LABEL.to_string());
            schedule_frame(frame_loop.clone(), ticket);
        })
    };

    let on_reset = {
        let engine = engine.clone();
        let frame = frame.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let share_link = share_link.clone();
        let week = week.clone();
        let copy_label = copy_label.clone();

        Callback::from(move |_: MouseEvent| {
            frame.borrow_mut().take();
            let mut engine = engine.borrow_mut();
            engine.reset();

            rotation.set(engine.state().rotation_angle);
            is_spinning.set(false);
            result.set(None);
            share_link.set(None);
            week.set(engine.week().to_string());
            copy_label.set(COPY_LABEL.to_string());
        })
    };

    let on_file = {
        let engine = engine.clone();
        let frame = frame.clone();
        let reader = reader.clone();
        let names = names.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let share_link = share_link.clone();
        let dedupe = dedupe.clone();

        Callback::from(move |file: web_sys::File| {
            let engine = engine.clone();
            let frame = frame.clone();
            let names = names.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let result = result.clone();
            let share_link = share_link.clone();
            let dedupe = *dedupe;
            let file_name = file.name();

            let task = read_as_text(&gloo::file::File::from(file), move |contents| {
                let raw = match contents {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::error!("Failed to read {}: {}", file_name, e);
                        return;
                    }
                };

                let list = parse_names(&raw, dedupe);
                log::info!("Loaded {} names from {}", list.len(), file_name);

                frame.borrow_mut().take();
                let mut engine = engine.borrow_mut();
                engine.load_participants(list.clone());

                names.set(Rc::new(list));
                rotation.set(engine.state().rotation_angle);
                is_spinning.set(false);
                result.set(None);
                share_link.set(None);
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let on_dedupe_toggle = {
        let dedupe = dedupe.clone();
        Callback::from(move |checked: bool| dedupe.set(checked))
    };

    let on_copy = {
        let share_link = share_link.clone();
        let share_input_ref = share_input_ref.clone();
        let copy_label = copy_label.clone();
        let copy_timeout = copy_timeout.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(url) = (*share_link).clone() else {
                return;
            };

            let fallback = share_input_ref.cast();
            spawn_local(async move {
                if !copy_text(url, fallback).await {
                    log::warn!("Could not copy share link");
                }
            });

            copy_label.set(COPIED_LABEL.to_string());
            let copy_label = copy_label.clone();
            *copy_timeout.borrow_mut() = Some(Timeout::new(COPY_CONFIRM_MS, move || {
                copy_label.set(COPY_LABEL.to_string());
            }));
        })
    };

    let share_text = if *is_spinning {
        SHARE_LINK_SPINNING.to_string()
    } else {
        (*share_link).clone().unwrap_or_else(|| SHARE_LINK_IDLE.to_string())
    };
    let can_spin = names.can_spin();

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                    <div class="flex flex-col items-center gap-6">
                        <WheelCanvas
                            rotation={*rotation}
                            names={(*names).clone()}
                            is_spinning={*is_spinning}
                        />
                        <div class="w-full max-w-[520px] flex gap-3">
                            <div class="flex-1">
                                <SpinButton
                                    is_spinning={*is_spinning}
                                    can_spin={can_spin}
                                    onclick={on_spin}
                                />
                            </div>
                            <button class={styles::BUTTON_SECONDARY} onclick={on_reset}>
                                {"Reset"}
                            </button>
                        </div>
                        if !can_spin {
                            <p class={styles::TEXT_SMALL}>{"Upload a name list first"}</p>
                        }
                    </div>

                    <div class={classes!(styles::CARD, "space-y-6")}>
                        <div>
                            <h1 class={styles::TEXT_H1}>{"Weekly Raffle"}</h1>
                            <p class={styles::TEXT_SMALL}>{format!("Week: {}", *week)}</p>
                        </div>
                        <NameUpload
                            loaded_count={names.len()}
                            dedupe={*dedupe}
                            on_file={on_file}
                            on_dedupe_toggle={on_dedupe_toggle}
                        />
                        <ResultDisplay result={(*result).clone()} />
                        <ShareLinkBox
                            text={share_text}
                            input_ref={share_input_ref}
                            copy_label={(*copy_label).clone()}
                            can_copy={share_link.is_some() && !*is_spinning}
                            on_copy={on_copy}
                        />
                    </div>
                </div>
            </div>
        </Base>
    }
}
