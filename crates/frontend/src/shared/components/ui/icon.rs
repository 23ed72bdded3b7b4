use leptos::prelude::*;

use crate::shared::icons::svg_icon;

/// Glyph leaf. Known names render as inline SVG, any other name as a
/// Material Icons ligature.
#[component]
pub fn Icon(
    /// Icon name
    #[prop(into)]
    name: Signal<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `part` attribute for external styling
    #[prop(optional, into)]
    part: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("icon-glyph {}", additional_class()) part=move || part.get()>
            {move || {
                let name = name.get();
                svg_icon(&name).unwrap_or_else(|| {
                    view! { <i class="material-icons" aria-hidden="true">{name}</i> }.into_any()
                })
            }}
        </span>
    }
}
