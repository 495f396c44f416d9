use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"DI-2D'ye Hoş Geldiniz"</h2>
            <p class="page-description">
                "Teknik resimlerinizi yükleyin, yapay zeka modelleriyle imalat analizini saniyeler içinde alın."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"📊 Tekil Analiz"</h3>
                    <p>"Bir teknik resmi seçtiğiniz modelle analiz edin"</p>
                    <a href="/analyze" class="btn btn-primary">"Analize Başla"</a>
                </div>
                <div class="card">
                    <h3>"🔍 Model Karşılaştırma"</h3>
                    <p>"Aynı resmi iki modelle çalıştırıp hız ve güveni karşılaştırın"</p>
                    <a href="/compare" class="btn btn-primary">"Karşılaştır"</a>
                </div>
                <div class="card">
                    <h3>"Servis Durumu"</h3>
                    <p>"Analiz servisinin ve model sağlayıcılarının erişilebilirliğini kontrol edin"</p>
                    <a href="/health" class="btn btn-primary">"Kontrol Et"</a>
                </div>
            </div>

            <div class="how-it-works">
                <h3>"Nasıl Çalışır"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Yükle"</strong>
                            <p>"PDF, PNG veya JPG teknik resminizi sürükleyin"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Analiz Et"</strong>
                            <p>"Model, analiz seviyesi ve görüntü iyileştirme seçeneklerini belirleyin"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"İncele"</strong>
                            <p>"Boyutlar, toleranslar, malzeme ve imalat önerilerini okuyun"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
