use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::console::{self, ConsoleContext};
use crate::diagnosis::TauriDiagnosis;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = expect_context::<ConsoleContext>();
    let (service_url, set_service_url) = signal(String::new());
    let (url_status, set_url_status) = signal::<Option<String>>(None);

    // Load the URL currently in effect on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_service_url().await {
                Ok(url) => set_service_url.set(url),
                Err(e) => {
                    set_url_status.set(Some(format!("Failed to load service URL: {}", e)));
                }
            }
        });
    });

    let save_service_url = move |_| {
        let url = service_url.get();
        spawn_local(async move {
            match commands::set_service_url(&url).await {
                Ok(normalised) => {
                    set_service_url.set(normalised);
                    set_url_status.set(Some("Service URL saved".to_string()));
                    // History now comes from a different service
                    console::load_history(&ctx.session, &TauriDiagnosis).await;
                }
                Err(e) => {
                    set_url_status.set(Some(format!("Failed to save: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Analysis Service"</h3>
                <p class="section-description">
                    "Base URL of the service that answers /analyze and /history."
                </p>

                <div class="form-group">
                    <label for="service-url">"Service URL"</label>
                    <div class="input-row">
                        <input
                            id="service-url"
                            type="text"
                            placeholder="http://127.0.0.1:8000"
                            class="input"
                            prop:value=move || service_url.get()
                            on:input=move |ev| {
                                set_service_url.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-save" on:click=save_service_url>"Save"</button>
                    </div>
                    <Show when=move || url_status.get().is_some()>
                        <span class="status-text">{move || url_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
