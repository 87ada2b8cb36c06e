//! Class-name contract between the feature components and the hosting theme.

use std::ops::Deref;
use std::sync::Arc;

use leptos::prelude::*;

use crate::common::ThemeKind;

/// Supplies the class names the feature section is laid out with.
///
/// Components never hard-code a theme; they read a [`Styles`] handle from
/// context, falling back to [`InfimaStyles`].
pub trait StyleProvider: Send + Sync {
    /// Outer `<section>` wrapping the whole feature grid.
    fn section(&self) -> &'static str;
    fn container(&self) -> &'static str;
    fn row(&self) -> &'static str;
    /// Grid column holding one card. Must give each card a third of the row.
    fn column(&self) -> &'static str;
    fn card_body(&self) -> &'static str;

    /// Extra class for the card's `h3`. `None` leaves the heading unstyled.
    fn heading(&self) -> Option<&'static str> {
        None
    }

    fn body_text(&self) -> Option<&'static str> {
        None
    }
}

/// Docusaurus' Infima utility classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfimaStyles;

impl StyleProvider for InfimaStyles {
    fn section(&self) -> &'static str {
        "features"
    }

    fn container(&self) -> &'static str {
        "container"
    }

    fn row(&self) -> &'static str {
        "row"
    }

    fn column(&self) -> &'static str {
        "col col--4"
    }

    fn card_body(&self) -> &'static str {
        "text--center padding-horiz--md"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindStyles;

impl StyleProvider for TailwindStyles {
    fn section(&self) -> &'static str {
        "py-20 px-6 bg-slate-900/30"
    }

    fn container(&self) -> &'static str {
        "max-w-6xl mx-auto"
    }

    fn row(&self) -> &'static str {
        "grid grid-cols-1 md:grid-cols-3 gap-6"
    }

    fn column(&self) -> &'static str {
        "col-span-1"
    }

    fn card_body(&self) -> &'static str {
        "h-full p-6 rounded-xl bg-slate-900/50 border border-slate-800 text-center"
    }

    fn heading(&self) -> Option<&'static str> {
        Some("text-xl font-semibold text-white mb-2")
    }

    fn body_text(&self) -> Option<&'static str> {
        Some("text-slate-400 text-sm leading-relaxed")
    }
}

/// Shareable handle to a [`StyleProvider`], stored in reactive context.
#[derive(Clone)]
pub struct Styles(Arc<dyn StyleProvider>);

impl Styles {
    pub fn new(provider: impl StyleProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn for_theme(theme: ThemeKind) -> Self {
        match theme {
            ThemeKind::Infima => Self::new(InfimaStyles),
            ThemeKind::Tailwind => Self::new(TailwindStyles),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(InfimaStyles)
    }
}

impl Deref for Styles {
    type Target = dyn StyleProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for Styles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Styles").field(&self.0.section()).finish()
    }
}

pub fn provide_styles(styles: Styles) {
    provide_context(styles);
}

/// Styles provided by an ancestor, or the Infima defaults.
pub fn use_styles() -> Styles {
    use_context::<Styles>().unwrap_or_default()
}
