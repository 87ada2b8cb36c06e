//! 404 page

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="container margin-vert--xl">
            <div class="text--center">
                <h1 class="hero__title">"Página não encontrada"</h1>
                <p>"Não encontramos o que você estava procurando."</p>
                <a href="/" class="button button--primary">"Voltar ao início"</a>
            </div>
        </main>
    }
}
