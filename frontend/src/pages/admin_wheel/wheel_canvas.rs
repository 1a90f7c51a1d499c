use shared::constants::{EMPTY_WHEEL_TEXT, SEGMENT_COLORS};
use shared::name_list::ParticipantList;
use shared::shared_wheel_game::segment_label;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub names: Rc<ParticipantList>,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.rotation, props.names.clone(), props.is_spinning),
            move |(rotation, names, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, *rotation, names, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="520"
                height="520"
                class="w-full max-w-[520px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(201, 163, 123, 0.45));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(canvas: &HtmlCanvasElement, rotation: f64, names: &ParticipantList, is_spinning: bool) {
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::warn!("Canvas 2d context unavailable");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - 24.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Backdrop
    context.begin_path();
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.set_fill_style_str("rgba(0, 0, 0, 0.22)");
    context.fill();

    if names.is_empty() {
        context.set_fill_style_str("rgba(120, 113, 108, 0.9)");
        context.set_font("700 18px system-ui, 'Segoe UI', Arial");
        context.set_text_align("center");
        let _ = context.fill_text(EMPTY_WHEEL_TEXT, center_x, center_y);
        draw_pointer(&context, center_x, center_y, radius, is_spinning);
        return;
    }

    let slice = 2.0 * PI / names.len() as f64;

    for (i, name) in names.iter().enumerate() {
        let start = rotation + i as f64 * slice;
        let end = start + slice;

        context.begin_path();
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.set_fill_style_str(SEGMENT_COLORS[i % SEGMENT_COLORS.len()]);
        context.fill();

        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(start + slice / 2.0);
        context.set_text_align("right");
        context.set_fill_style_str("#0f0f0f");
        context.set_font("800 16px system-ui, 'Segoe UI', Arial");
        let _ = context.fill_text(&segment_label(name), radius - 18.0, 6.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    let _ = context.arc(center_x, center_y, 56.0, 0.0, 2.0 * PI);
    context.set_fill_style_str("rgba(0, 0, 0, 0.55)");
    context.fill();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.18)");
    context.set_line_width(2.0);
    context.stroke();

    context.set_fill_style_str("rgba(231, 198, 165, 0.95)");
    context.set_font("900 14px system-ui, 'Segoe UI', Arial");
    context.set_text_align("center");
    let _ = context.fill_text("SPIN", center_x, center_y + 5.0);

    draw_pointer(&context, center_x, center_y, radius, is_spinning);
}

/// Fixed pointer at the top of the wheel; this is the position that picks the conductor.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64, is_spinning: bool) {
    let pointer_width = 14.0;
    let pointer_height = 26.0;

    context.set_shadow_color(if is_spinning { "rgba(231, 198, 165, 0.8)" } else { "rgba(0, 0, 0, 0.35)" });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(center_x, center_y - radius + 10.0);
    context.line_to(center_x - pointer_width, center_y - radius - pointer_height + 10.0);
    context.line_to(center_x + pointer_width, center_y - radius - pointer_height + 10.0);
    context.close_path();
    context.set_fill_style_str("#e7c6a5");
    context.fill();
    context.set_stroke_style_str("#8f6e4c");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}
