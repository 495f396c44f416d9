use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::warn;

use crate::api::ApiClient;
use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::pages::analyze::AnalyzePage;
use crate::pages::compare::ComparePage;
use crate::pages::health::HealthPage;
use crate::pages::home::HomePage;
use crate::pages::settings::SettingsPage;
use crate::prefs;
use crate::theme::{apply_theme, Theme, ThemeContext};

/// Current API configuration. Pages read it once when they are created.
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: ReadSignal<AppConfig>,
    pub set_config: WriteSignal<AppConfig>,
}

/// Compile-time configuration with the stored base URL override applied.
fn load_config() -> AppConfig {
    let config = AppConfig::from_env();
    match prefs::get_preference(prefs::API_URL_KEY) {
        Ok(Some(url)) => config.with_base_url(&url).unwrap_or_else(|e| {
            warn!("Ignoring stored API URL: {}", e);
            config
        }),
        Ok(None) => config,
        Err(e) => {
            warn!("Could not read stored API URL: {}", e);
            config
        }
    }
}

fn load_theme() -> Theme {
    prefs::get_preference(prefs::THEME_KEY)
        .ok()
        .flatten()
        .map(|t| Theme::parse(&t))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    let (config, set_config) = signal(load_config());
    provide_context(ConfigContext { config, set_config });

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    // Each visit builds a fresh client, so a changed base URL applies on the next navigation.
    let client = move || ApiClient::new(config.get_untracked());

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Sayfa bulunamadı"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/analyze") view=move || view! { <AnalyzePage client=client() /> } />
                        <Route path=path!("/compare") view=move || view! { <ComparePage client=client() /> } />
                        <Route path=path!("/settings") view=SettingsPage />
                        <Route path=path!("/health") view=move || view! { <HealthPage client=client() /> } />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
