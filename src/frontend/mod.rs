pub mod components;
pub mod pages;
pub mod styles;

use leptos::prelude::*;

use pages::{SITE_TAGLINE, SITE_TITLE};
use styles::{provide_styles, Styles};

/// Full HTML document around `page`.
pub fn shell(page: impl IntoView + 'static) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=SITE_TAGLINE/>
                <title>{SITE_TITLE}</title>
                <link rel="stylesheet" href="/static/site.css"/>
            </head>
            <body>
                {page}
            </body>
        </html>
    }
}

/// Server-side renders the view built by `view_fn` to an HTML string.
///
/// Each call runs under a fresh reactive owner with `styles` in context, so
/// concurrent renders share nothing.
pub fn render_html<F, V>(styles: Styles, view_fn: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_styles(styles);
        view_fn().to_html()
    })
}
