use leptos::prelude::*;

use crate::components::{AddPersonForm, ColorFilter, Pagination, PeopleTable, Toasts};

#[component]
pub fn People() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-3xl font-bold text-ctp-text">"People"</h2>
            </div>

            <div class="flex flex-wrap justify-between gap-4 mb-6">
                <ColorFilter/>
                <AddPersonForm/>
            </div>

            <PeopleTable/>
            <Pagination/>
            <Toasts/>
        </div>
    }
}
