use leptos::{
    component, create_signal, event_target_checked, event_target_value, view, Callable, Callback,
    CollectView, IntoView, ReadSignal, Signal, SignalGet, SignalGetUntracked, SignalSet, WriteSignal,
};

use crate::api::{parse_budget, Preferences, RouteRequest};

const NODE_LIST_ID: &str = "route-node-ids";

#[component]
fn PreferenceToggle(
    label: &'static str,
    checked: ReadSignal<bool>,
    set_checked: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="preference-toggle">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| set_checked.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Origin, destination and rider preferences. Submitting hands a
/// [`RouteRequest`] to `on_submit`; the button stays disabled while `busy`.
#[component]
#[must_use]
pub fn RouteForm(
    node_ids: Vec<String>,
    busy: Signal<bool>,
    on_submit: Callback<RouteRequest>,
) -> impl IntoView {
    let (origin, set_origin) = create_signal(String::new());
    let (destination, set_destination) = create_signal(String::new());
    let (avoid_transfers, set_avoid_transfers) = create_signal(false);
    let (wheelchair, set_wheelchair) = create_signal(false);
    let (avoid_crowded, set_avoid_crowded) = create_signal(false);
    let (safe_priority, set_safe_priority) = create_signal(false);
    let (budget, set_budget) = create_signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let request = RouteRequest {
            origin: origin.get_untracked().trim().to_string(),
            destination: destination.get_untracked().trim().to_string(),
            preferences: Preferences {
                avoid_transfers: avoid_transfers.get_untracked(),
                wheelchair: wheelchair.get_untracked(),
                prefer_fastest: true,
                avoid_crowded: avoid_crowded.get_untracked(),
                safe_priority: safe_priority.get_untracked(),
                budget: parse_budget(&budget.get_untracked()),
            },
        };
        on_submit.call(request);
    };

    view! {
        <form class="route-form" on:submit=submit>
            <datalist id=NODE_LIST_ID>
                {node_ids.into_iter().map(|id| view! { <option value=id></option> }).collect_view()}
            </datalist>
            <label>
                "Origin"
                <input
                    type="text"
                    list=NODE_LIST_ID
                    placeholder="A1"
                    prop:value=move || origin.get()
                    on:input=move |ev| set_origin.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Destination"
                <input
                    type="text"
                    list=NODE_LIST_ID
                    placeholder="E3"
                    prop:value=move || destination.get()
                    on:input=move |ev| set_destination.set(event_target_value(&ev))
                />
            </label>
            <PreferenceToggle label="Avoid transfers" checked=avoid_transfers set_checked=set_avoid_transfers />
            <PreferenceToggle label="Wheelchair accessible" checked=wheelchair set_checked=set_wheelchair />
            <PreferenceToggle label="Avoid crowded sections" checked=avoid_crowded set_checked=set_avoid_crowded />
            <PreferenceToggle label="Prioritize safety" checked=safe_priority set_checked=set_safe_priority />
            <label>
                "Budget"
                <input
                    type="number"
                    min="0"
                    prop:value=move || budget.get()
                    on:input=move |ev| set_budget.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="primary" disabled=move || busy.get()>
                "Find route"
            </button>
        </form>
    }
}
