use std::f64::consts::PI;

use spin_wheel_core::geometry::{label_font_size, polar_to_cartesian, segment_span};
use spin_wheel_core::Prize;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

const CANVAS_SIZE: f64 = 400.0;
const RIM_RADIUS: f64 = 195.0;
const SEGMENT_RADIUS: f64 = 190.0;
const LABEL_RADIUS_RATIO: f64 = 0.65;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Vec<Prize>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub on_spin: Callback<MouseEvent>,
}

/// Canvas radians for an angle in degrees measured clockwise from the top.
fn to_canvas_radians(angle_deg: f64) -> f64 {
    (angle_deg - 90.0) * PI / 180.0
}

fn draw_wheel(context: &CanvasRenderingContext2d, prizes: &[Prize], rotation: f64) {
    let center = CANVAS_SIZE / 2.0;
    context.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center, -center);

    context.begin_path();
    let _ = context.arc(center, center, RIM_RADIUS, 0.0, 2.0 * PI);
    context.set_fill_style_str("#1F2937");
    context.fill();
    context.set_line_width(10.0);
    context.set_stroke_style_str("#374151");
    context.stroke();

    let count = prizes.len();
    let font_size = label_font_size(count);

    for (i, prize) in prizes.iter().enumerate() {
        let (start, end) = segment_span(i, count);

        context.begin_path();
        context.move_to(center, center);
        let _ = context.arc(center, center, SEGMENT_RADIUS, to_canvas_radians(start), to_canvas_radians(end));
        context.close_path();
        context.set_fill_style_str(&prize.color);
        context.fill();
        context.set_line_width(2.0);
        context.set_stroke_style_str("#FFFFFF");
        context.stroke();

        let mid = (start + end) / 2.0;
        let label_pos = polar_to_cartesian(center, center, SEGMENT_RADIUS * LABEL_RADIUS_RATIO, mid);

        context.save();
        let _ = context.translate(label_pos.x, label_pos.y);
        let _ = context.rotate((mid + 90.0) * PI / 180.0);
        context.set_font(&format!("bold {}px sans-serif", font_size));
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(2.0);
        context.set_shadow_offset_x(1.0);
        context.set_shadow_offset_y(1.0);
        context.set_fill_style_str("#FFFFFF");
        let _ = context.fill_text(&prize.display_label(), 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Fixed pointer at the top, drawn after restoring so it does not rotate
    context.begin_path();
    context.move_to(center - 15.0, 0.0);
    context.line_to(center + 15.0, 0.0);
    context.line_to(center, 40.0);
    context.close_path();
    context.set_fill_style_str("#F43F5E");
    context.fill();
    context.set_line_width(2.0);
    context.set_stroke_style_str("#FFFFFF");
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let prizes = props.prizes.clone();
        let rotation = props.rotation;

        use_effect_with((prizes, rotation), move |(prizes, rotation)| {
            let context = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

            match context {
                Some(context) => draw_wheel(&context, prizes, *rotation),
                None => log::warn!("Wheel canvas is not ready"),
            }
            || ()
        });
    }

    html! {
        <div class="relative w-[300px] h-[300px] md:w-[400px] md:h-[400px] mx-auto">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full h-full drop-shadow-2xl"
            />
            <button
                class={styles::SPIN_BUTTON}
                onclick={props.on_spin.clone()}
                disabled={props.is_spinning}
            >
                <span class="font-bold text-slate-900 text-sm md:text-lg">
                    { if props.is_spinning { "..." } else { "开始" } }
                </span>
            </button>
        </div>
    }
}
