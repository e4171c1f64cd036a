use leptos::prelude::*;

use crate::provider::TableContext;

/// Hook for reading table state and issuing table commands
///
/// Must be called below a `TableProvider`.
///
/// # Example
/// ```rust
/// let table = use_table();
///
/// view! {
///     <button on:click=move |_| table.next_page()>"Next"</button>
///     <span>{move || table.state().with(|s| s.cursor.page_number())}</span>
/// }
/// ```
pub fn use_table() -> TableContext {
    expect_context::<TableContext>()
}
