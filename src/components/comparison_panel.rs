//! Comparison output: the head-to-head summary and one panel per model.

use leptos::prelude::*;

use crate::components::results_display::ResultsDisplay;
use crate::render::{ComparisonSummary, ModelPanel, PanelBody};

#[component]
pub fn ComparisonSummaryCard(summary: ComparisonSummary) -> impl IntoView {
    view! {
        <div class="result-card comparison-summary">
            <style>{include_str!("comparison_panel.css")}</style>
            <div class="card-header">
                <h3>"Karşılaştırma Özeti"</h3>
            </div>
            <div class="summary-grid">
                <div class="summary-item">
                    <span class="summary-label">"Hız Farkı"</span>
                    <span class="summary-value">{summary.time_difference}</span>
                    <span class="summary-winner">"🏃 " {summary.faster_model}</span>
                </div>
                <div class="summary-item">
                    <span class="summary-label">"Güven Farkı"</span>
                    <span class="summary-value">{summary.confidence_difference}</span>
                    <span class="summary-winner">"💪 " {summary.higher_confidence}</span>
                </div>
            </div>
            {summary.timestamp.map(|ts| view! { <p class="summary-timestamp">{ts}</p> })}
        </div>
    }
}

/// One model's metrics and analysis.
#[component]
pub fn ModelPanelCard(panel: ModelPanel) -> impl IntoView {
    let body = match panel.body {
        PanelBody::Structured(result) => view! {
            <ResultsDisplay result=*result compact=true />
        }
        .into_any(),
        PanelBody::Json(json) => view! { <pre class="analysis-json">{json}</pre> }.into_any(),
        PanelBody::RawText(text) => view! {
            <div class="raw-response">
                <p class="raw-hint">"Yapılandırılmış sonuç yok; modelin ham yanıtı:"</p>
                <pre class="analysis-json">{text}</pre>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="model-panel">
            <div class="model-panel-header">
                <h3>{panel.title}</h3>
                {(!panel.provider.is_empty()).then(|| view! {
                    <span class="provider-badge">{panel.provider}</span>
                })}
            </div>
            <div class="model-metrics">
                <div class="metric">
                    <span class="metric-label">"İşlem Süresi"</span>
                    <span class="metric-value">{panel.processing_time}</span>
                </div>
                <div class="metric">
                    <span class="metric-label">"Güven Skoru"</span>
                    <span class="metric-value">{panel.confidence}</span>
                </div>
            </div>
            <div class="model-analysis">
                <h4>"Analiz Sonucu"</h4>
                {body}
            </div>
        </div>
    }
}
