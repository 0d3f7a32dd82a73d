//! Sidebar listing past diagnoses.
//!
//! Entries are shown in the order the service returned them. Log text is
//! clipped to two lines by CSS only; the entry keeps the full text.

use leptos::prelude::*;

use crate::console::ConsoleContext;
use crate::diagnosis::HistoryEntry;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctx = expect_context::<ConsoleContext>();
    let entries = ctx.history();

    view! {
        <aside class="history-panel">
            <style>{include_str!("history_panel.css")}</style>
            <h2 class="history-title">"Past Fixes"</h2>

            <div class="history-list">
                {move || {
                    let entries = entries.get();
                    if entries.is_empty() {
                        view! { <p class="history-empty">"No history yet..."</p> }.into_any()
                    } else {
                        view! {
                            <>
                                {entries
                                    .into_iter()
                                    .map(|entry| view! { <HistoryItem entry=entry /> })
                                    .collect::<Vec<_>>()}
                            </>
                        }
                            .into_any()
                    }
                }}
            </div>
        </aside>
    }
}

#[component]
fn HistoryItem(entry: HistoryEntry) -> impl IntoView {
    let color = entry.severity.color();

    view! {
        <div class="history-item" data-id=entry.id.clone() style=format!("border-left-color: {}", color)>
            <div class="history-severity" style=format!("color: {}", color)>
                {entry.severity.label()}
            </div>
            <div class="history-log" title=entry.log.clone()>{entry.log.clone()}</div>
        </div>
    }
}
