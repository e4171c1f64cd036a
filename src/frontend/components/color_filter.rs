use leptos::prelude::*;

use people_table::table::Color;

use crate::hooks::use_table;

/// Color dropdown with filter and reset buttons.
///
/// Picking a color enables filtering; the clear option disables it again.
#[component]
pub fn ColorFilter() -> impl IntoView {
    let table = use_table();
    let state = table.state();

    let selected = move || {
        state.with(|s| {
            s.filter
                .selected_color
                .as_ref()
                .map(Color::to_string)
                .unwrap_or_default()
        })
    };
    let can_filter = move || state.with(|s| s.filter.can_filter);
    let is_loading = move || state.with(|s| s.is_loading);

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            table.select_color(None);
            table.set_can_filter(false);
        } else {
            table.select_color(Some(Color::from(value)));
            table.set_can_filter(true);
        }
    };

    view! {
        <div class="flex items-center gap-2">
            <select
                prop:value=selected
                on:change=on_change
                class="px-3 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text"
            >
                <option value="">"All colors"</option>
                {move || {
                    state
                        .with(|s| s.filter.color_options.clone())
                        .into_iter()
                        .map(|color| {
                            let name = color.to_string();
                            view! { <option value=name.clone()>{name}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                on:click=move |_| table.load_filtered()
                disabled=move || !can_filter() || is_loading()
                class="px-4 py-2 bg-ctp-blue text-ctp-base rounded font-medium disabled:opacity-50 disabled:cursor-not-allowed"
            >
                "Filter"
            </button>
            <button
                on:click=move |_| table.load_all()
                disabled=is_loading
                class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50"
            >
                "Show all"
            </button>
        </div>
    }
}
