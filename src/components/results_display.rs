//! Results display for a single drawing analysis.
//!
//! Renders the cards built by [`ResultSections`]; a card or sub-list only
//! appears when the view model holds data for it.

use leptos::prelude::*;

use crate::render::{
    DimensionRow, FeatureRow, GeometrySection, ManufacturingSection, MetadataSection, NotesSection,
    QualitySection, ResultSections,
};
use crate::types::DrawingAnalysisResult;

#[component]
pub fn ResultsDisplay(
    result: DrawingAnalysisResult,
    /// Drop the page heading when embedded in a comparison panel
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let ResultSections {
        metadata,
        basics,
        geometry,
        manufacturing,
        quality,
        notes,
        warnings,
    } = ResultSections::from_result(&result);

    view! {
        <div class="results-container" class:results-compact=compact>
            <style>{include_str!("results_display.css")}</style>

            {(!compact).then(|| view! { <h2 class="results-title">"📊 Analiz Sonuçları"</h2> })}

            <MetadataCard metadata=metadata />

            <div class="result-card">
                <div class="card-header">
                    <h3>"Temel Bilgiler"</h3>
                </div>
                <div class="info-grid">
                    {basics.into_iter().map(|row| view! {
                        <div class="info-item">
                            <strong>{row.label} ":"</strong>
                            <span>{row.value}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <GeometryCard geometry=geometry />
            <ManufacturingCard manufacturing=manufacturing />
            {quality.map(|quality| view! { <QualityCard quality=quality /> })}
            {notes.map(|notes| view! { <NotesCard notes=notes /> })}

            {warnings.map(|warnings| view! {
                <div class="result-card warnings-card">
                    <div class="card-header">
                        <h3>"⚠️ Uyarılar"</h3>
                    </div>
                    <ul class="warnings-list">
                        {warnings.into_iter().map(|w| view! { <li>{w}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </div>
    }
}

#[component]
fn MetadataCard(metadata: MetadataSection) -> impl IntoView {
    view! {
        <div class="result-card metadata-card">
            <div class="card-header">
                <h3>"Analiz Bilgileri"</h3>
            </div>
            <div class="metadata-grid">
                <div class="metadata-item">
                    <span class="label">"Model:"</span>
                    <span class="value">{metadata.model}</span>
                </div>
                <div class="metadata-item">
                    <span class="label">"İşlem Süresi:"</span>
                    <span class="value">{metadata.duration}</span>
                </div>
                <div class="metadata-item">
                    <span class="label">"Güven Skoru:"</span>
                    <span class="value confidence-score">{metadata.confidence}</span>
                </div>
                {metadata.tokens.map(|tokens| view! {
                    <div class="metadata-item">
                        <span class="label">"Token Kullanımı:"</span>
                        <span class="value">{tokens}</span>
                    </div>
                })}
                {metadata.timestamp.map(|ts| view! {
                    <div class="metadata-item">
                        <span class="label">"Zaman:"</span>
                        <span class="value">{ts}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn GeometryCard(geometry: GeometrySection) -> impl IntoView {
    view! {
        <div class="result-card">
            <div class="card-header">
                <h3>"Geometri Analizi"</h3>
            </div>
            <div class="geometry-content">
                <div class="geometry-row">
                    <strong>"Parça Tipi:"</strong>
                    <span class="badge">{geometry.part_type}</span>
                </div>
                <div class="geometry-row">
                    <strong>"Şekil:"</strong>
                    <span class="badge">{geometry.shape_type}</span>
                </div>
                <div class="geometry-row">
                    <strong>"Karmaşıklık:"</strong>
                    <span class="complexity-score">{geometry.complexity}</span>
                </div>

                {geometry.dimensions.map(|rows| view! {
                    <div class="dimensions-section">
                        <h4>"Ana Boyutlar"</h4>
                        <div class="dimensions-grid">
                            {rows.into_iter().map(dimension_item).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}

                {geometry.features.map(|rows| view! {
                    <div class="features-section">
                        <h4>"Özellikler"</h4>
                        <div class="features-list">
                            {rows.into_iter().map(feature_item).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

fn dimension_item(row: DimensionRow) -> impl IntoView {
    view! {
        <div class="dimension-item">
            <span class="dim-label">{row.name} ":"</span>
            <span class="dim-value">
                {row.value}
                {row.tolerance.map(|t| view! { <span class="tolerance">" (" {t} ")"</span> })}
            </span>
            {row.location.map(|l| view! { <span class="dim-location">{l}</span> })}
        </div>
    }
}

fn feature_item(row: FeatureRow) -> impl IntoView {
    view! {
        <div class="feature-item">
            <span class="feature-type">{row.kind}</span>
            <span class="feature-quantity">{row.quantity}</span>
            {row.dimensions.map(|d| view! { <span class="feature-dims">{d}</span> })}
            {row.position.map(|p| view! { <span class="feature-position">{p}</span> })}
            {row.notes.map(|n| view! { <span class="feature-notes">{n}</span> })}
        </div>
    }
}

#[component]
fn ManufacturingCard(manufacturing: ManufacturingSection) -> impl IntoView {
    let badge_class = manufacturing.difficulty.badge_class();

    view! {
        <div class="result-card">
            <div class="card-header">
                <h3>"İmalat Analizi"</h3>
            </div>
            <div class="manufacturing-content">
                <div class="manufacturing-row">
                    <strong>"Ana İşlem:"</strong>
                    <span class="badge badge-primary">{manufacturing.primary_process}</span>
                </div>
                <div class="manufacturing-row">
                    <strong>"Zorluk Seviyesi:"</strong>
                    <span class=badge_class>{manufacturing.difficulty_label}</span>
                </div>
                <div class="manufacturing-row">
                    <strong>"Takma Sayısı:"</strong>
                    <span>{manufacturing.setup_count}</span>
                </div>

                {manufacturing.secondary_processes.map(|items| view! {
                    <div class="processes-section">
                        <h4>"İkincil İşlemler"</h4>
                        <div class="tags-list">
                            {items.into_iter().map(|p| view! { <span class="tag">{p}</span> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}

                {manufacturing.operations.map(|items| view! {
                    <div class="operations-section">
                        <h4>"Tahmini Operasyonlar"</h4>
                        <ol class="operations-list">
                            {items.into_iter().map(|op| view! { <li>{op}</li> }).collect::<Vec<_>>()}
                        </ol>
                    </div>
                })}

                {manufacturing.special_requirements.map(|items| view! {
                    <div class="special-req-section">
                        <h4>"Özel Gereksinimler"</h4>
                        <ul class="requirements-list">
                            {items.into_iter().map(|req| view! { <li>{req}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn QualityCard(quality: QualitySection) -> impl IntoView {
    view! {
        <div class="result-card">
            <div class="card-header">
                <h3>"Kalite Gereksinimleri"</h3>
            </div>
            <div class="quality-content">
                {quality.tolerances.map(|rows| view! {
                    <div class="tolerances-section">
                        <h4>"Toleranslar"</h4>
                        <div class="tolerances-list">
                            {rows.into_iter().map(|tol| view! {
                                <div class="tolerance-item">
                                    <span class="tol-type">{tol.kind} ":"</span>
                                    <span class="tol-value">{tol.value}</span>
                                    {tol.reference.map(|r| view! { <span class="tol-ref">"(" {r} ")"</span> })}
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}

                {quality.surface_finishes.map(|rows| view! {
                    <div class="surface-section">
                        <h4>"Yüzey İşlemleri"</h4>
                        <div class="surface-list">
                            {rows.into_iter().map(|sf| view! {
                                <div class="surface-item">
                                    <strong>{sf.kind} ":"</strong>
                                    " "
                                    {sf.description}
                                    {sf.roughness.map(|ra| view! { <span>" (" {ra} ")"</span> })}
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}

                {quality.inspection_notes.map(|items| view! {
                    <div class="inspection-section">
                        <h4>"Muayene Notları"</h4>
                        <ul>
                            {items.into_iter().map(|note| view! { <li>{note}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })}

                {quality.critical_dimensions.map(|items| view! {
                    <div class="critical-dims-section">
                        <h4>"Kritik Boyutlar"</h4>
                        <div class="tags-list">
                            {items.into_iter().map(|dim| view! { <span class="tag tag-critical">{dim}</span> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn NotesCard(notes: NotesSection) -> impl IntoView {
    view! {
        <div class="result-card">
            <div class="card-header">
                <h3>"Notlar ve Öneriler"</h3>
            </div>
            <div class="notes-content">
                {notes.general.map(|items| view! {
                    <div class="notes-section">
                        <h4>"Genel Notlar"</h4>
                        <ul>
                            {items.into_iter().map(|note| view! { <li>{note}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })}

                {notes.recommendations.map(|items| view! {
                    <div class="recommendations-section">
                        <h4>"Tasarım Önerileri"</h4>
                        <ul>
                            {items.into_iter().map(|rec| view! { <li>{rec}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })}
            </div>
        </div>
    }
}
