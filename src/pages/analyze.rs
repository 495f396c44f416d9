//! Single-drawing analysis page.
//!
//! Pick a drawing, tune the model options, submit once, then read the
//! result or start over.

use leptos::prelude::*;
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::drawing_upload::{DrawingDropZone, FilePreview, FileSummary};
use crate::components::option_select::OptionSelect;
use crate::components::results_display::ResultsDisplay;
use crate::options::{AnalysisModel, AnalyzeOptions, EnhanceMode, ReasoningLevel};
use crate::render::status_banner;
use crate::types::DrawingAnalysisResult;
use crate::upload::SelectedFile;
use crate::workflow::{Phase, Workflow};

#[component]
pub fn AnalyzePage(client: ApiClient) -> impl IntoView {
    let client = StoredValue::new(client);
    let (workflow, set_workflow) = signal(Workflow::<DrawingAnalysisResult>::new());
    let (options, set_options) = signal(AnalyzeOptions::default());
    let (show_settings, set_show_settings) = signal(false);

    let summary = Memo::new(move |_| {
        workflow.with(|wf| wf.file().map(|f| FileSummary::new(f, wf.selection())))
    });
    let result = Memo::new(move |_| workflow.with(|wf| wf.result().cloned()));
    let submitting = Signal::derive(move || workflow.with(|wf| wf.is_submitting()));
    let managed = Signal::derive(move || options.get().model.is_fully_managed());

    let on_file = Callback::new(move |file: SelectedFile| {
        set_workflow.update(|wf| {
            if !wf.select_file(file) {
                debug!("File selection ignored in current phase");
            }
        });
    });

    let on_analyze = move |_| {
        let mut started = None;
        set_workflow.update(|wf| started = wf.submit().zip(wf.file().cloned()));
        let Some((ticket, file)) = started else {
            return;
        };
        let opts = options.get_untracked();
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.analyze(&file, &opts).await;
            if let Err(e) = &outcome {
                error!("Analysis failed: {}", e);
            }
            // The page may be gone, or the user may have reset meanwhile
            let applied = set_workflow.try_update(|wf| wf.resolve(ticket, outcome));
            if applied != Some(true) {
                debug!("Dropped stale analysis response");
            }
        });
    };

    let on_reset = move |_| set_workflow.update(|wf| wf.reset());

    view! {
        <div class="page analyzer-container">
            <style>{include_str!("analyze.css")}</style>

            <div class="upload-card">
                <div class="upload-header">
                    <h2>"📄 Teknik Resim Yükle"</h2>
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
                                prompt="Teknik resmi buraya sürükleyin veya seçin"
                                input_id="analyze-file-input"
                            />
                        }.into_any(),
                    }}
                </div>

                <div class="settings-section">
                    <button
                        class="settings-toggle"
                        on:click=move |_| set_show_settings.update(|s| *s = !*s)
                    >
                        "⚙️ Ayarlar"
                    </button>

                    <Show when=move || show_settings.get()>
                        <div class="settings-panel">
                            <OptionSelect
                                label="AI Modeli"
                                choices=AnalysisModel::ALL.into_iter().map(|m| (m.id(), m.option_label())).collect()
                                value=Signal::derive(move || options.get().model.id().to_string())
                                on_change=Callback::new(move |id: String| {
                                    if let Some(model) = AnalysisModel::from_id(&id) {
                                        set_options.update(|o| o.model = model);
                                    }
                                })
                                disabled=submitting
                            >
                                {move || options.get().model.hint().map(|hint| view! {
                                    <p class="setting-hint setting-hint-accent">{hint}</p>
                                })}
                            </OptionSelect>

                            <OptionSelect
                                label="Analiz Seviyesi"
                                choices=ReasoningLevel::ALL.into_iter().map(|l| (l.as_str(), l.label())).collect()
                                value=Signal::derive(move || options.get().reasoning_level.as_str().to_string())
                                on_change=Callback::new(move |v: String| {
                                    if let Some(level) = ReasoningLevel::parse(&v) {
                                        set_options.update(|o| o.reasoning_level = level);
                                    }
                                })
                                disabled=Signal::derive(move || submitting.get() || managed.get())
                            >
                                {move || {
                                    let opts = options.get();
                                    if opts.model.is_fully_managed() {
                                        Some(view! { <p class="setting-hint">"Werk24 otomatik optimize edilir"</p> }.into_any())
                                    } else if opts.reasoning_level == ReasoningLevel::VeryHigh && opts.model.is_gpt5() {
                                        Some(view! { <p class="setting-hint setting-hint-accent">"⚡ Chain-of-thought korunuyor"</p> }.into_any())
                                    } else {
                                        None
                                    }
                                }}
                            </OptionSelect>

                            <OptionSelect
                                label="Görüntü İyileştirme"
                                choices=EnhanceMode::ALL.into_iter().map(|m| (m.as_str(), m.label())).collect()
                                value=Signal::derive(move || options.get().enhance_mode.as_str().to_string())
                                on_change=Callback::new(move |v: String| {
                                    if let Some(mode) = EnhanceMode::parse(&v) {
                                        set_options.update(|o| o.enhance_mode = mode);
                                    }
                                })
                                disabled=Signal::derive(move || submitting.get() || managed.get())
                            >
                                {move || managed.get().then(|| view! {
                                    <p class="setting-hint">"Werk24 otomatik işler"</p>
                                })}
                            </OptionSelect>
                        </div>
                    </Show>
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
                                <button class="btn btn-primary" on:click=on_reset>"Yeni Analiz"</button>
                            }.into_any()
                        } else if has_file && idle_or_failed {
                            view! {
                                <button class="btn btn-secondary" on:click=on_reset>"Temizle"</button>
                                <button
                                    class="btn btn-primary"
                                    on:click=on_analyze
                                    disabled=move || !workflow.with(|wf| wf.can_submit())
                                >
                                    "Analiz Et"
                                </button>
                            }.into_any()
                        } else {
                            ().into_any()
                        }
                    }}
                </div>

                {move || workflow.with(|wf| status_banner(
                    wf.phase(),
                    "Analiz ediliyor... Bu birkaç dakika sürebilir",
                    "Analiz tamamlandı!",
                )).map(|(class, text)| view! {
                    <div class=class>
                        {(class.ends_with("status-loading")).then(|| view! { <div class="spinner"></div> })}
                        <span>{text}</span>
                    </div>
                })}
            </div>

            {move || result.get().map(|r| view! { <ResultsDisplay result=r /> })}
        </div>
    }
}
