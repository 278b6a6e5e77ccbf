use leptos::{
    component, create_rw_signal, spawn_local, store_value, view, Callback, IntoView, Signal,
    SignalGet, SignalGetUntracked, SignalSet, SignalUpdate, SignalWith,
};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::api::{RouteClient, RouteOutcome, RouteRequest, RouteStatus};
use crate::components::{map_view::MapView, route_form::RouteForm, status_panel::StatusPanel};
use crate::log;
use crate::models::GraphLayout;
use crate::renderer::MapRenderer;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let layout = GraphLayout::transit_network();
    let node_ids: Vec<String> = layout.nodes().map(|(id, _)| id.to_string()).collect();
    let renderer = create_rw_signal(MapRenderer::new(layout));
    let status = create_rw_signal(RouteStatus::Idle);
    let client = store_value(RouteClient::from_page());

    let scene = Signal::derive(move || renderer.with(|r| r.scene().clone()));
    let busy = Signal::derive(move || status.with(RouteStatus::is_in_progress));

    let on_submit = Callback::new(move |request: RouteRequest| {
        // Only one request in flight at a time
        if status.get_untracked().is_in_progress() {
            return;
        }

        let client = match client.get_value() {
            Ok(client) => client,
            Err(e) => {
                leptos::logging::error!("Routing client unavailable: {e}");
                renderer.update(MapRenderer::reset);
                status.set(RouteStatus::Error(e.to_string()));
                return;
            }
        };

        log!("Requesting route {} -> {}", request.origin, request.destination);
        status.set(RouteStatus::InProgress);

        spawn_local(async move {
            let result = client.request(&request).await;
            if let Err(e) = &result {
                leptos::logging::error!("Route request failed: {e}");
            }

            let outcome = RouteOutcome::from_result(result);
            renderer.update(|r| outcome.apply(r));
            status.set(outcome.status());
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/transit_map.css"/>
        <Title text="Transit Route Planner"/>

        <div class="app">
            <div class="main-content">
                <MapView scene=scene />
            </div>
            <div class="sidebar">
                <div class="sidebar-header">
                    <h2>"Route Planner"</h2>
                </div>
                <RouteForm node_ids=node_ids busy=busy on_submit=on_submit />
                <StatusPanel status=Signal::derive(move || status.get()) />
            </div>
        </div>
    }
}
