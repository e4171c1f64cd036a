use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use people_table::notify::{Notification, NotificationKind, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Notifier that renders notifications as toasts.
///
/// Each toast removes itself once its timeout elapses.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn show_notification(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let timeout_ms = notification.timeout.as_millis().min(i32::MAX as u128) as i32;
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let notifier = *self;
        let callback = Closure::once(move || notifier.dismiss(id));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_ms,
            );
        }
        callback.forget();
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let toasts = notifier.toasts();

    view! {
        <div class="fixed bottom-4 right-4 flex flex-col gap-2 z-50">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let is_error = toast.notification.kind == NotificationKind::Error;
                        view! {
                            <div
                                class="flex items-start gap-3 rounded-lg border px-4 py-3 shadow-lg bg-ctp-surface0"
                                class:border-ctp-red=is_error
                                class:border-ctp-green=!is_error
                            >
                                <div>
                                    <p class="font-semibold text-ctp-text">
                                        {if is_error { "Error" } else { "Notice" }}
                                    </p>
                                    <p class="text-sm text-ctp-subtext0">
                                        {toast.notification.subtitle.clone()}
                                    </p>
                                </div>
                                <button
                                    on:click=move |_| notifier.dismiss(id)
                                    class="text-ctp-overlay0 hover:text-ctp-text"
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
