use leptos::prelude::*;

use crate::frontend::components::FeatureCard;
use crate::frontend::styles::use_styles;
use crate::models::{FeatureItem, FEATURE_LIST};

/// The homepage features section.
///
/// Renders `features` (or [`FEATURE_LIST`] when omitted) in order, one
/// [`FeatureCard`] per item, keyed by the item's `id`.
#[component]
pub fn HomepageFeatures(#[prop(optional)] features: Option<Vec<FeatureItem>>) -> impl IntoView {
    let styles = use_styles();
    let features = features.unwrap_or_else(|| FEATURE_LIST.to_vec());

    view! {
        <section class=styles.section()>
            <div class=styles.container()>
                <div class=styles.row()>
                    <For
                        each=move || features.clone()
                        key=|feature| feature.id.clone()
                        children=|feature| view! { <FeatureCard feature=feature/> }
                    />
                </div>
            </div>
        </section>
    }
}
