//! Result card for one diagnosis.
//!
//! Renders the service's fields as-is: no rounding of confidence, no
//! rewording of explanation or fix.

use leptos::prelude::*;

use crate::diagnosis::{AnalysisResult, Severity};

#[component]
pub fn DiagnosisCard(result: AnalysisResult) -> impl IntoView {
    let color = result.severity.color();

    view! {
        <div class="diagnosis-card" style=format!("border-left-color: {}", color)>
            <style>{include_str!("diagnosis_card.css")}</style>

            <div class="diagnosis-header">
                <h3 style=format!("color: {}", color)>"Analysis Result"</h3>
                <ConfidenceBadge severity=result.severity.clone() confidence=result.confidence />
            </div>

            <p class="diagnosis-explanation">{result.explanation.clone()}</p>

            <div class="diagnosis-fix">
                <strong>"Recommended Fix:"</strong>
                <span>{result.fix.clone().unwrap_or_default()}</span>
            </div>
        </div>
    }
}

#[component]
fn ConfidenceBadge(severity: Severity, confidence: i64) -> impl IntoView {
    view! {
        <span
            class="confidence-badge"
            title=severity.label()
            style=format!("background-color: {}", severity.color())
        >
            {format!("{}% CONFIDENCE", confidence)}
        </span>
    }
}
