use leptos::prelude::*;

use crate::frontend::styles::use_styles;
use crate::models::FeatureItem;

/// One feature: title as a sub-heading, description as body text, inside a
/// one-third grid column.
///
/// The item's id is exposed as `data-feature-id`, not `id`: titles may repeat
/// or be empty, and neither may leak into the DOM as an invalid `id`.
#[component]
pub fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    let styles = use_styles();
    let FeatureItem {
        id,
        title,
        description,
    } = feature;

    let feature_id = Some(id.into_owned()).filter(|id| !id.is_empty());

    let heading = match styles.heading() {
        Some(class) => view! { <h3 class=class>{title.into_owned()}</h3> }.into_any(),
        None => view! { <h3>{title.into_owned()}</h3> }.into_any(),
    };

    let body = match styles.body_text() {
        Some(class) => view! { <p class=class>{description.into_owned()}</p> }.into_any(),
        None => view! { <p>{description.into_owned()}</p> }.into_any(),
    };

    view! {
        <div class=styles.column() data-feature-id=feature_id>
            <div class=styles.card_body()>
                {heading}
                {body}
            </div>
        </div>
    }
}
