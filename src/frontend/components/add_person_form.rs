use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use people_table::table::Person;

use crate::hooks::use_table;

#[component]
pub fn AddPersonForm() -> impl IntoView {
    let table = use_table();
    let state = table.state();

    let name = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());

    let incomplete = move || name.with(|n| n.trim().is_empty()) || color.with(|c| c.trim().is_empty());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if incomplete() {
            return;
        }
        table.add_person(Person::new(name.get().trim(), color.get().trim()));
        name.set(String::new());
        color.set(String::new());
    };

    view! {
        <form on:submit=on_submit class="flex items-center gap-2">
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                class="px-3 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text placeholder-ctp-overlay0 focus:outline-none focus:border-ctp-blue"
            />
            <input
                type="text"
                placeholder="Color"
                prop:value=move || color.get()
                on:input=move |ev| color.set(event_target_value(&ev))
                class="px-3 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text placeholder-ctp-overlay0 focus:outline-none focus:border-ctp-blue"
            />
            <button
                type="submit"
                disabled=move || incomplete() || state.with(|s| s.is_loading)
                class="px-4 py-2 bg-ctp-green text-ctp-base rounded font-medium disabled:opacity-50 disabled:cursor-not-allowed"
            >
                "Add person"
            </button>
        </form>
    }
}
