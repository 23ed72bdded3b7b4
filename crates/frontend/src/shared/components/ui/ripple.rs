use leptos::prelude::*;

use crate::shared::capabilities::{RippleController, Wave};

/// Wave layer of a ripple host. Must be placed inside the host's origin element.
#[component]
pub fn Ripple(controller: RippleController) -> impl IntoView {
    view! {
        <div class="ripple" aria-hidden="true">
            <For
                each=move || controller.waves()
                key=|wave| (wave.id, wave.leaving)
                children=move |wave: Wave| {
                    let class = if wave.leaving {
                        "ripple__wave ripple__wave--leaving"
                    } else {
                        "ripple__wave"
                    };
                    view! { <div class=class style=wave.style()></div> }
                }
            />
        </div>
    }
}
