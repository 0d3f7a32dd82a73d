//! Console page: paste a log, run a diagnosis, read the result.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::diagnosis_card::DiagnosisCard;
use crate::console::{self, ConsoleContext};
use crate::diagnosis::TauriDiagnosis;
use crate::session::Phase;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let ctx = expect_context::<ConsoleContext>();
    let session = ctx.session;

    // Narrow selectors so typing only touches the textarea and buttons
    let busy = Memo::new(move |_| session.with(|s| s.is_busy()));
    let can_analyze = Memo::new(move |_| session.with(|s| s.can_analyze()));
    let submitting = Memo::new(move |_| session.with(|s| s.phase() == Phase::Submitting));
    let result = ctx.result();

    // The guard inside `analyze` is what actually prevents a second
    // in-flight request; the disabled button just reflects it.
    let on_analyze = move |_| {
        spawn_local(async move {
            console::analyze(&session, &TauriDiagnosis).await;
        });
    };

    let on_clear = move |_| {
        session.update(|s| {
            s.clear_draft();
        });
    };

    view! {
        <div
            class="page console-page"
            class:submitting=move || submitting.get()
        >
            <style>{include_str!("console.css")}</style>

            <div class="log-input-card">
                <textarea
                    class="log-input"
                    rows="8"
                    placeholder="Paste raw log data or error traces here..."
                    prop:value=move || session.with(|s| s.draft().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        session.update(|s| s.set_draft(text));
                    }
                ></textarea>

                <div class="action-buttons">
                    <button
                        class="btn btn-primary"
                        on:click=on_analyze
                        disabled=move || !can_analyze.get()
                    >
                        {move || if busy.get() { "Analyzing with Llama 3..." } else { "Run AI Diagnosis" }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=on_clear
                        disabled=move || busy.get()
                    >
                        "Clear"
                    </button>
                </div>
            </div>

            {move || result.get().map(|result| view! { <DiagnosisCard result=result /> })}
        </div>
    }
}
