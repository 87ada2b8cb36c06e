#![allow(dead_code)]

use leptos::prelude::*;

use medwatch_site::frontend::components::{FeatureCard, HomepageFeatures};
use medwatch_site::frontend::render_html;
use medwatch_site::frontend::styles::Styles;
use medwatch_site::models::FeatureItem;

pub fn render_default_section() -> String {
    render_html(Styles::default(), || view! { <HomepageFeatures/> })
}

pub fn render_section(styles: Styles, features: Vec<FeatureItem>) -> String {
    render_html(styles, move || view! { <HomepageFeatures features=features/> })
}

pub fn render_card(item: FeatureItem) -> String {
    render_html(Styles::default(), move || view! { <FeatureCard feature=item/> })
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Byte offsets of each needle in `haystack`, panicking on a missing one.
pub fn offsets(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| {
            haystack
                .find(n)
                .unwrap_or_else(|| panic!("{n:?} not found in rendered markup"))
        })
        .collect()
}

pub fn get_sample_item(title: &'static str) -> FeatureItem {
    FeatureItem::new(title, "Descrição de teste.")
}
