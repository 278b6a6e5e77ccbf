use leptos::{component, create_effect, create_node_ref, view, IntoView, Signal, SignalGet, SignalWith};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::components::map_canvas::renderer;
use crate::models::Scene;

/// Canvas showing the current scene. Redraws in full whenever `scene` changes.
#[component]
#[must_use]
pub fn MapView(scene: Signal<Scene>) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    create_effect(move |_| {
        let current_scene = scene.get();
        let Some(canvas) = canvas_ref.get() else { return };

        let (width, height) = renderer::canvas_size(&current_scene);
        let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas_elem.set_width(width.ceil() as u32);
            canvas_elem.set_height(height.ceil() as u32);
        }

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            leptos::logging::warn!("2d canvas context unavailable");
            return;
        };

        renderer::draw_scene(&ctx, &current_scene, (width, height));
    });

    let route_label = move || {
        scene.with(|s| {
            let stops = s.route_markers().count();
            if stops == 0 {
                "Network map".to_string()
            } else {
                format!("Network map, {stops} stops highlighted")
            }
        })
    };

    view! {
        <div class="map-container">
            <canvas node_ref=canvas_ref class="map-canvas" aria-label=route_label></canvas>
        </div>
    }
}
