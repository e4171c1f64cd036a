//! Table state provider.
//!
//! Owns the [`TableController`] for the lifetime of the component tree below
//! it. Descendants get a [`TableContext`]: a read-only state signal plus
//! commands. Nothing else can write the state.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use people_table::table::{Color, PageChange, Person, TableController, TableState};

use crate::api::GlooPeopleApi;
use crate::components::ToastNotifier;

type PeopleTable = TableController<GlooPeopleApi, ToastNotifier>;

#[derive(Clone, Copy)]
pub struct TableContext {
    state: ReadSignal<TableState>,
    controller: StoredValue<Rc<PeopleTable>, LocalStorage>,
}

impl TableContext {
    pub fn state(&self) -> ReadSignal<TableState> {
        self.state
    }

    pub fn load_all(&self) {
        self.spawn(|table| async move {
            let _ = table.load_all().await;
        });
    }

    pub fn load_filtered(&self) {
        self.spawn(|table| async move {
            let _ = table.load_filtered().await;
        });
    }

    pub fn add_person(&self, person: Person) {
        self.spawn(|table| async move {
            let _ = table.add_record(person).await;
        });
    }

    pub fn load_color_options(&self) {
        self.spawn(|table| async move {
            let _ = table.load_color_options().await;
        });
    }

    pub fn next_page(&self) {
        self.controller.try_with_value(|table| {
            let _ = table.on_page_change(PageChange::next());
        });
    }

    pub fn previous_page(&self) {
        self.controller.try_with_value(|table| {
            table.previous_page();
        });
    }

    /// Switch page size and go back to the first page.
    pub fn change_page_size(&self, page_size: usize) {
        self.controller.try_with_value(|table| {
            let _ = table.on_page_change(PageChange::resize(1, page_size));
        });
    }

    pub fn select_color(&self, color: Option<Color>) {
        self.controller
            .try_with_value(|table| table.select_color(color));
    }

    pub fn set_can_filter(&self, can_filter: bool) {
        self.controller
            .try_with_value(|table| table.set_can_filter(can_filter));
    }

    fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<PeopleTable>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(table) = self.controller.try_get_value() {
            spawn_local(f(table));
        }
    }
}

#[component]
pub fn TableProvider(children: Children) -> impl IntoView {
    let notifier = ToastNotifier::new();
    let table = Rc::new(TableController::new(GlooPeopleApi, notifier));

    // Mirror every store change into a signal the view can track
    let (state, set_state) = signal(table.state());
    let mut view = table.view();
    spawn_local(async move {
        while view.changed().await {
            if set_state.try_set(view.latest()).is_some() {
                break;
            }
        }
    });

    let controller = StoredValue::new_local(table);
    let context = TableContext { state, controller };
    provide_context(context);
    provide_context(notifier);

    on_cleanup(move || {
        controller.try_with_value(|table| table.dispose());
    });

    context.load_all();
    context.load_color_options();

    children()
}
