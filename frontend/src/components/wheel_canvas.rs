use std::f64::consts::PI;

use shared::{Sector, COLOR_SECTORS};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Cumulative clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

/// Canvas angle (radians from +x, clockwise) where a sector's edge is drawn.
/// The pointer sits at the top, so the sector holding resting angle θ has to
/// be painted at wheel-local angle 360 - θ.
fn canvas_angle(resting_angle: f64) -> f64 {
    (360.0 - resting_angle - 90.0).to_radians()
}

fn draw_sector(context: &CanvasRenderingContext2d, sector: &Sector, cx: f64, cy: f64, radius: f64) {
    // Edges meet halfway across the 1 degree seams.
    let start = canvas_angle(sector.end + 0.5);
    let end = canvas_angle(sector.start - 0.5);

    context.begin_path();
    context.set_fill_style_str(sector.color.hex());
    context.move_to(cx, cy);
    let _ = context.arc(cx, cy, radius, start, end);
    context.close_path();
    context.fill();

    context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
    context.set_line_width(2.5);
    context.begin_path();
    context.move_to(cx, cy);
    context.line_to(cx + radius * start.cos(), cy + radius * start.sin());
    context.stroke();
}

fn draw_label(context: &CanvasRenderingContext2d, sector: &Sector, cx: f64, cy: f64, radius: f64) {
    context.save();
    let _ = context.translate(cx, cy);
    let _ = context.rotate(canvas_angle(sector.center()));
    let _ = context.translate(radius * 0.62, 0.0);
    let _ = context.rotate(PI / 2.0);
    context.set_font("bold 22px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);
    let _ = context.fill_text(sector.color.name(), 0.0, 0.0);
    context.restore();
}

fn draw_pointer(context: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64, is_spinning: bool) {
    let pointer_width = 18.0;
    let pointer_height = 28.0;

    context.set_shadow_color(if is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(cx, cy - radius + 8.0);
    context.line_to(cx - pointer_width, cy - radius - pointer_height + 8.0);
    context.line_to(cx + pointer_width, cy - radius - pointer_height + 8.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

fn draw_wheel(canvas: &HtmlCanvasElement, rotation: f64, is_spinning: bool) -> Option<()> {
    let context = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 30.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Glow
    context.begin_path();
    context.set_fill_style_str(if is_spinning {
        "rgba(100, 130, 255, 0.25)"
    } else {
        "rgba(100, 130, 255, 0.15)"
    });
    let _ = context.arc(cx, cy, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(cx, cy);
    let _ = context.rotate(rotation.to_radians());
    let _ = context.translate(-cx, -cy);

    for sector in COLOR_SECTORS.iter() {
        draw_sector(&context, sector, cx, cy, radius);
    }
    for sector in COLOR_SECTORS.iter() {
        draw_label(&context, sector, cx, cy, radius);
    }

    context.begin_path();
    context.set_fill_style_str("#1a1c2e");
    let _ = context.arc(cx, cy, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    context.begin_path();
    context.set_stroke_style_str("rgba(130, 100, 255, 0.5)");
    context.set_line_width(if is_spinning { 5.0 } else { 4.0 });
    let _ = context.arc(cx, cy, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(&context, cx, cy, radius, is_spinning);
    Some(())
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.rotation, props.is_spinning), move |(rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if draw_wheel(&canvas, *rotation, *is_spinning).is_none() {
                    log::error!("Canvas 2d context unavailable");
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
