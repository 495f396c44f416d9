use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"🎯 DI-2D"</h1>
                <p class="sidebar-subtitle">"2D Drawing Intelligence System"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Ana Sayfa"</a>
                </li>
                <li class="nav-item">
                    <a href="/analyze" class="nav-link">"📊 Tekil Analiz"</a>
                </li>
                <li class="nav-item">
                    <a href="/compare" class="nav-link">"🔍 Model Karşılaştırma"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Ayarlar"</a>
                </li>
                <li class="nav-item">
                    <a href="/health" class="nav-link">"Servis Durumu"</a>
                </li>
            </ul>
        </nav>
    }
}
