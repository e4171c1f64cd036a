use leptos::prelude::*;

use crate::hooks::use_table;

const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

#[component]
pub fn Pagination() -> impl IntoView {
    let table = use_table();
    let state = table.state();

    let page = move || state.with(|s| s.cursor.page_number());
    let page_size = move || state.with(|s| s.cursor.page_size());
    let total_pages = move || state.with(|s| s.page.total_pages);
    let total_items = move || state.with(|s| s.page.total_items);
    let first_row = move || {
        if total_items() == 0 {
            0
        } else {
            ((page() - 1) * page_size() + 1).min(total_items())
        }
    };
    let last_row = move || (page() * page_size()).min(total_items());
    let has_previous = move || state.with(|s| s.page.has_previous(s.cursor));
    let has_next = move || state.with(|s| s.page.has_next(s.cursor));

    view! {
        <div class="flex flex-wrap justify-between items-center gap-4 mt-4">
            <div class="text-sm text-ctp-overlay0">
                "Showing " {first_row} " - " {last_row} " of " {total_items} " people"
            </div>

            <div class="flex justify-center items-center gap-2">
                <button
                    on:click=move |_| table.previous_page()
                    disabled=move || !has_previous()
                    class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50 disabled:cursor-not-allowed hover:border-ctp-blue"
                >
                    "← Previous"
                </button>

                <span class="text-ctp-subtext0">
                    "Page " {page} " of " {move || total_pages().max(1)}
                </span>

                <button
                    on:click=move |_| table.next_page()
                    disabled=move || !has_next()
                    class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50 disabled:cursor-not-allowed hover:border-ctp-blue"
                >
                    "Next →"
                </button>

                <select
                    prop:value=move || page_size().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.change_page_size(size);
                        }
                    }
                    class="px-2 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text"
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            view! { <option value=size.to_string()>{format!("{} / page", size)}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
