use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::status_badge::{Availability, StatusBadge};
use crate::types::{HealthReport, ModelCatalog};

#[component]
pub fn HealthPage(client: ApiClient) -> impl IntoView {
    let base_url = client.config().api_base_url.clone();
    let client = StoredValue::new(client);
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthReport>>(None);
    let (catalog, set_catalog) = signal::<Option<ModelCatalog>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match client.health().await {
                Ok(r) => {
                    set_report.set(Some(r));
                }
                Err(e) => {
                    set_report.set(None);
                    set_error.set(Some(format!("Servise ulaşılamadı: {}", e)));
                }
            }
            // The catalog is optional; older servers may not expose it
            match client.list_models().await {
                Ok(c) => set_catalog.set(Some(c)),
                Err(e) => {
                    warn!("Model catalog unavailable: {}", e);
                    set_catalog.set(None);
                }
            }
            set_checking.set(false);
        });
    };

    // Auto-run health check on mount
    Effect::new(move |_| {
        do_health_check();
    });

    view! {
        <div class="page health-page">
            <h2>"Servis Durumu"</h2>
            <p class="page-description">
                "Analiz servisinin ve model sağlayıcılarının erişilebilirliğini kontrol edin."
            </p>
            <p class="health-endpoint">{base_url}</p>

            <button
                class="btn btn-primary"
                on:click=move |_| do_health_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Kontrol ediliyor..." } else { "Tekrar Kontrol Et" }}
            </button>

            {move || {
                let pending = report.with(Option::is_none) && error.with(Option::is_none);
                pending.then(|| {
                    let detail = if checking.get() { "Kontrol ediliyor..." } else { "Henüz kontrol edilmedi" };
                    view! {
                        <div class="health-results">
                            <StatusBadge label="Analiz servisi" status=Availability::from_check(None) detail=detail />
                        </div>
                    }
                })
            }}

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="health-error">
                            <span class="status-text status-error">{e}</span>
                        </div>
                    }
                })
            }}

            {move || {
                report.get().map(|r| {
                    let service_status = Availability::from_flag(r.is_healthy());
                    let service_detail = match &r.version {
                        Some(v) => format!("{} (v{})", r.status, v),
                        None => r.status.clone(),
                    };
                    let total = r.models_available.len();
                    let configured = r.models_available.values().filter(|&&v| v).count();
                    let summary_class = if total > 0 && configured == total {
                        "summary-all-pass"
                    } else if configured == 0 {
                        "summary-all-fail"
                    } else {
                        "summary-partial"
                    };

                    view! {
                        <div class="health-results">
                            <StatusBadge label=r.service.clone() status=service_status detail=service_detail />
                            {r.models_available.into_iter().map(|(provider, ready)| {
                                let detail = if ready { "Yapılandırılmış" } else { "Yapılandırılmamış" };
                                view! {
                                    <StatusBadge label=provider status=Availability::from_flag(ready) detail=detail />
                                }
                            }).collect::<Vec<_>>()}

                            <div class={format!("health-summary {}", summary_class)}>
                                {format!("{} / {} sağlayıcı hazır", configured, total)}
                            </div>
                        </div>
                    }
                })
            }}

            {move || {
                catalog.get().map(|c| {
                    view! {
                        <div class="model-catalog">
                            <h3>"Modeller"</h3>
                            {c.models.into_iter().map(|m| view! {
                                <div class="catalog-item">
                                    <div class="catalog-header">
                                        <strong>{m.name}</strong>
                                        <span class="provider-badge">{m.provider}</span>
                                        {m.recommended.then(|| view! { <span class="badge badge-success">"Önerilen"</span> })}
                                    </div>
                                    <code class="catalog-id">{m.id}</code>
                                    <p class="catalog-description">{m.description}</p>
                                    {(!m.features.is_empty()).then(|| view! {
                                        <div class="tags-list">
                                            {m.features.into_iter().map(|f| view! { <span class="tag">{f}</span> }).collect::<Vec<_>>()}
                                        </div>
                                    })}
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
