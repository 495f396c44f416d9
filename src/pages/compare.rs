//! Two-model comparison page.
//!
//! Same lifecycle as the single analysis page; the server runs both models
//! and returns the head-to-head figures.

use leptos::prelude::*;
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::comparison_panel::{ComparisonSummaryCard, ModelPanelCard};
use crate::components::drawing_upload::{DrawingDropZone, FilePreview, FileSummary};
use crate::components::option_select::OptionSelect;
use crate::options::{AnalysisModel, CompareOptions, ReasoningLevel};
use crate::render::{status_banner, ComparisonSummary, ModelPanel};
use crate::types::ComparisonResult;
use crate::upload::SelectedFile;
use crate::workflow::{Phase, Workflow};

fn model_choices() -> Vec<(&'static str, &'static str)> {
    AnalysisModel::ALL
        .into_iter()
        .map(|m| (m.id(), m.display_name()))
        .collect()
}

#[component]
pub fn ComparePage(client: ApiClient) -> impl IntoView {
    let client = StoredValue::new(client);
    let (workflow, set_workflow) = signal(Workflow::<ComparisonResult>::new());
    let (options, set_options) = signal(CompareOptions::default());

    let summary = Memo::new(move |_| {
        workflow.with(|wf| wf.file().map(|f| FileSummary::new(f, wf.selection())))
    });
    let result = Memo::new(move |_| workflow.with(|wf| wf.result().cloned()));
    let submitting = Signal::derive(move || workflow.with(|wf| wf.is_submitting()));

    let on_file = Callback::new(move |file: SelectedFile| {
        set_workflow.update(|wf| {
            if !wf.select_file(file) {
                debug!("File selection ignored in current phase");
            }
        });
    });

    let on_compare = move |_| {
        let mut started = None;
        set_workflow.update(|wf| started = wf.submit().zip(wf.file().cloned()));
        let Some((ticket, file)) = started else {
            return;
        };
        let opts = options.get_untracked();
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.compare(&file, &opts).await;
            if let Err(e) = &outcome {
                error!("Comparison failed: {}", e);
            }
            let applied = set_workflow.try_update(|wf| wf.resolve(ticket, outcome));
            if applied != Some(true) {
                debug!("Dropped stale comparison response");
            }
        });
    };

    let on_reset = move |_| set_workflow.update(|wf| wf.reset());

    view! {
        <div class="page analyzer-container">
            <style>{include_str!("analyze.css")}</style>

            <div class="upload-card">
                <div class="upload-header">
                    <h2>"🔍 Model Karşılaştırma"</h2>
                </div>

                <div class="upload-area">
                    {move || match summary.get() {
                        Some(summary) => {
                            let preview = workflow.with_untracked(|wf| wf.preview().map(str::to_string));
                            view! { <FilePreview summary=summary preview=preview /> }.into_any()
                        }
                        None => view! {
                            <DrawingDropZone
                                on_file=on_file
                                prompt="Teknik resim yükle"
                                input_id="compare-file-input"
                            />
                        }.into_any(),
                    }}
                </div>

                <div class="settings-panel comparison-settings">
                    <OptionSelect
                        label="Model 1"
                        choices=model_choices()
                        value=Signal::derive(move || options.get().model1.id().to_string())
                        on_change=Callback::new(move |id: String| {
                            if let Some(model) = AnalysisModel::from_id(&id) {
                                set_options.update(|o| o.model1 = model);
                            }
                        })
                        disabled=submitting
                    />
                    <OptionSelect
                        label="Model 2"
                        choices=model_choices()
                        value=Signal::derive(move || options.get().model2.id().to_string())
                        on_change=Callback::new(move |id: String| {
                            if let Some(model) = AnalysisModel::from_id(&id) {
                                set_options.update(|o| o.model2 = model);
                            }
                        })
                        disabled=submitting
                    />
                    <OptionSelect
                        label="Analiz Seviyesi"
                        choices=ReasoningLevel::ALL.into_iter().map(|l| (l.as_str(), l.short_label())).collect()
                        value=Signal::derive(move || options.get().reasoning_level.as_str().to_string())
                        on_change=Callback::new(move |v: String| {
                            if let Some(level) = ReasoningLevel::parse(&v) {
                                set_options.update(|o| o.reasoning_level = level);
                            }
                        })
                        disabled=submitting
                    />
                </div>

                <div class="action-buttons">
                    {move || {
                        let (has_file, idle_or_failed, done) = workflow.with(|wf| (
                            wf.file().is_some(),
                            matches!(wf.phase(), Phase::Idle | Phase::Failure(_)),
                            matches!(wf.phase(), Phase::Success(_)),
                        ));
                        if done {
                            view! {
                                <button class="btn btn-primary" on:click=on_reset>"Yeni Karşılaştırma"</button>
                            }.into_any()
                        } else if has_file && idle_or_failed {
                            view! {
                                <button class="btn btn-secondary" on:click=on_reset>"Temizle"</button>
                                <button
                                    class="btn btn-primary"
                                    on:click=on_compare
                                    disabled=move || !workflow.with(|wf| wf.can_submit())
                                >
                                    "Karşılaştır"
                                </button>
                            }.into_any()
                        } else {
                            ().into_any()
                        }
                    }}
                </div>

                {move || workflow.with(|wf| status_banner(
                    wf.phase(),
                    "Her iki modelle analiz ediliyor...",
                    "Karşılaştırma tamamlandı!",
                )).map(|(class, text)| view! {
                    <div class=class>
                        {class.ends_with("status-loading").then(|| view! { <div class="spinner"></div> })}
                        <span>{text}</span>
                    </div>
                })}
            </div>

            {move || result.get().map(|r| view! {
                <div class="comparison-results">
                    <ComparisonSummaryCard summary=ComparisonSummary::from_result(&r) />
                    <div class="comparison-grid">
                        <ModelPanelCard panel=ModelPanel::from_run(&r.model1) />
                        <ModelPanelCard panel=ModelPanel::from_run(&r.model2) />
                    </div>
                </div>
            })}
        </div>
    }
}
