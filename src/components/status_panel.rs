use leptos::{component, view, IntoView, Signal, SignalGet};

use crate::api::RouteStatus;

#[component]
#[must_use]
pub fn StatusPanel(status: Signal<RouteStatus>) -> impl IntoView {
    view! {
        <div class="route-status">
            {move || {
                let current = status.get();
                match &current {
                    RouteStatus::Idle => view! { <p></p> }.into_view(),
                    RouteStatus::Summary(summary) => view! {
                        <p><b>"Route: "</b>{summary.path_text()}</p>
                        <p><b>"Total weight: "</b>{summary.weight_text()}</p>
                        <p><b>"Applied rules: "</b>{summary.rules_text()}</p>
                    }.into_view(),
                    RouteStatus::NoRoute { .. } => view! {
                        <p><b>{current.to_string()}</b></p>
                    }.into_view(),
                    RouteStatus::InProgress => view! {
                        <p class="status-progress">{current.to_string()}</p>
                    }.into_view(),
                    RouteStatus::Error(_) => view! {
                        <p class="status-error">{current.to_string()}</p>
                    }.into_view(),
                }
            }}
        </div>
    }
}
