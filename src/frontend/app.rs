use leptos::prelude::*;
use thaw::*;

use crate::pages::People;
use crate::provider::TableProvider;

#[component]
pub fn App() -> impl IntoView {
    // Set dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme>
            <main class="min-h-screen bg-ctp-base flex flex-col">
                <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                    <div class="container mx-auto flex items-center gap-2 px-6 py-4">
                        <h1 class="text-3xl font-bold bg-gradient-to-r from-ctp-mauve to-ctp-blue bg-clip-text text-transparent">
                            "people"
                        </h1>
                        <span class="text-xs text-ctp-subtext0 font-mono">
                            {env!("CARGO_PKG_VERSION")}
                        </span>
                    </div>
                </nav>
                <div class="flex-1">
                    <TableProvider>
                        <People/>
                    </TableProvider>
                </div>
            </main>
        </ConfigProvider>
    }
}
