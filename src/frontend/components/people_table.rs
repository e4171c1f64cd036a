use leptos::prelude::*;
use serde_json::Value;

use people_table::table::Person;

use crate::hooks::use_table;

fn format_attributes(person: &Person) -> String {
    if person.attributes.is_empty() {
        return "-".to_string();
    }
    person
        .attributes
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
fn PersonRow(person: Person) -> impl IntoView {
    let details = format_attributes(&person);

    view! {
        <tr class="border-b border-ctp-surface1">
            <td class="px-4 py-2 text-ctp-text">{person.name}</td>
            <td class="px-4 py-2">
                <span class="inline-flex items-center gap-2 text-ctp-subtext1">
                    <span
                        class="inline-block w-3 h-3 rounded-full border border-ctp-surface2"
                        style:background-color=person.color.to_string()
                    ></span>
                    {person.color.to_string()}
                </span>
            </td>
            <td class="px-4 py-2 text-sm text-ctp-subtext0">{details}</td>
        </tr>
    }
}

#[component]
pub fn PeopleTable() -> impl IntoView {
    let table = use_table();
    let state = table.state();

    view! {
        <div class="relative">
            <Show when=move || state.with(|s| s.is_loading)>
                <p class="text-ctp-subtext0 mb-2">"Loading people..."</p>
            </Show>
            <table class="w-full text-left bg-ctp-surface0 rounded-lg overflow-hidden">
                <thead class="bg-ctp-surface1 text-ctp-subtext1">
                    <tr>
                        <th class="px-4 py-2">"Name"</th>
                        <th class="px-4 py-2">"Color"</th>
                        <th class="px-4 py-2">"Details"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.with(|s| s.page.visible_rows.clone());
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="px-4 py-6 text-center text-ctp-subtext0">
                                        "No people found."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|person| view! { <PersonRow person/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
