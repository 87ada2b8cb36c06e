use leptos::prelude::*;

use crate::frontend::components::HomepageFeatures;

pub const SITE_TITLE: &str = "Monitor de Medicamentos IoT";
pub const SITE_TAGLINE: &str =
    "Protótipo com ESP32, sensores e MQTT para acompanhar o uso de medicamentos em tempo real.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="hero hero--primary">
            <div class="container">
                <h1 class="hero__title">{SITE_TITLE}</h1>
                <p class="hero__subtitle">{SITE_TAGLINE}</p>
            </div>
        </header>
        <main>
            <HomepageFeatures/>
        </main>
    }
}
