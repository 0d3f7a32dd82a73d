use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::components::header::Header;
use crate::components::history_panel::HistoryPanel;
use crate::console::{self, ConsoleContext};
use crate::diagnosis::TauriDiagnosis;
use crate::pages::console::ConsolePage;
use crate::pages::settings::SettingsPage;
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    provide_context(ConsoleContext { session });

    // Load history once on mount; failures leave the sidebar empty
    Effect::new(move |_| {
        spawn_local(async move {
            console::load_history(&session, &TauriDiagnosis).await;
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <HistoryPanel />
                <main class="content">
                    <Header />
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ConsolePage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
