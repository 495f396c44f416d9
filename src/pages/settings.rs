use leptos::prelude::*;
use tracing::info;

use crate::app::ConfigContext;
use crate::config::AppConfig;
use crate::prefs;
use crate::theme::{Theme, ThemeContext};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ConfigContext { config, set_config } = expect_context::<ConfigContext>();
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    let (api_url, set_api_url) = signal(config.get_untracked().api_base_url);
    let (url_status, set_url_status) = signal::<Option<String>>(None);

    let save_api_url = move |_| {
        let url = api_url.get();
        match config.get_untracked().with_base_url(&url) {
            Ok(updated) => match prefs::set_preference(prefs::API_URL_KEY, &updated.api_base_url) {
                Ok(()) => {
                    info!("API base URL set to {}", updated.api_base_url);
                    set_api_url.set(updated.api_base_url.clone());
                    set_config.set(updated);
                    set_url_status.set(Some("Kaydedildi".to_string()));
                }
                Err(e) => set_url_status.set(Some(format!("Kaydedilemedi: {}", e))),
            },
            Err(e) => set_url_status.set(Some(e.to_string())),
        }
    };

    let reset_api_url = move |_| {
        if let Err(e) = prefs::remove_preference(prefs::API_URL_KEY) {
            set_url_status.set(Some(format!("Sıfırlanamadı: {}", e)));
            return;
        }
        let defaults = AppConfig::from_env();
        set_api_url.set(defaults.api_base_url.clone());
        set_config.set(defaults);
        set_url_status.set(Some("Varsayılana döndürüldü".to_string()));
    };

    let on_theme_change = move |ev: web_sys::Event| {
        let selected = Theme::parse(&event_target_value(&ev));
        set_theme.set(selected);
        if let Err(e) = prefs::set_preference(prefs::THEME_KEY, selected.as_str()) {
            set_url_status.set(Some(format!("Tema kaydedilemedi: {}", e)));
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Ayarlar"</h2>

            <section class="settings-section">
                <h3>"Analiz Servisi"</h3>
                <p class="section-description">
                    "Yeni adres, sayfalar arasında geçiş yaptığınızda kullanılmaya başlar."
                </p>

                <div class="form-group">
                    <label for="api-url">"API Adresi"</label>
                    <div class="input-row">
                        <input
                            id="api-url"
                            type="text"
                            placeholder="http://localhost:8001"
                            class="input"
                            prop:value=move || api_url.get()
                            on:input=move |ev| {
                                set_api_url.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-save" on:click=save_api_url>"Kaydet"</button>
                        <button class="btn btn-secondary" on:click=reset_api_url>"Varsayılan"</button>
                    </div>
                    <Show when=move || url_status.get().is_some()>
                        <span class="status-text">{move || url_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Görünüm"</h3>
                <div class="form-group">
                    <label for="theme">"Tema"</label>
                    <select id="theme" class="input" on:change=on_theme_change>
                        {Theme::ALL
                            .into_iter()
                            .map(|t| view! {
                                <option value=t.as_str() prop:selected=move || theme.get() == t>{t.label()}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </section>
        </div>
    }
}
