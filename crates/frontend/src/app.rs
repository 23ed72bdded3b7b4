use contracts::config::UiConfig;
use contracts::enums::TabVariant;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::{Tab, TabBadge, TabCustom, TabIcon};

/// Showcase of the tab layouts. Selection lives here, outside the tabs.
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    provide_context(config);

    let selected = RwSignal::new("inbox".to_string());
    let is_active = move |value: &'static str| Signal::derive(move || selected.get() == value);
    let select = move |value: &'static str| {
        Callback::new(move |_: MouseEvent| {
            log::info!("tab selected: {}", value);
            selected.set(value.to_string());
        })
    };

    view! {
        <nav class="tab-strip">
            <Tab value="inbox" icon="inbox" active=is_active("inbox") on_click=select("inbox")>
                "Входящие"
                <TabBadge slot>
                    <span class="badge-count badge-count--primary">"3"</span>
                </TabBadge>
            </Tab>
            <Tab value="starred" inline=true active=is_active("starred") on_click=select("starred")>
                "Избранное"
                <TabIcon slot>
                    <span class="emoji">"★"</span>
                </TabIcon>
            </Tab>
            <Tab value="drafts" active=is_active("drafts") on_click=select("drafts")>
                "Черновики"
                <TabBadge slot>
                    <span class="badge-count badge-count--warning">"!"</span>
                </TabBadge>
            </Tab>
            <Tab value="custom" active=is_active("custom") on_click=select("custom")>
                <TabCustom slot>
                    <strong class="tab-custom">"Своя разметка"</strong>
                </TabCustom>
            </Tab>
        </nav>
        <nav class="tab-strip tab-strip--secondary">
            <Tab value="home" icon="home" inline=true variant=TabVariant::Secondary>"Главная"</Tab>
            <Tab value="settings" icon="settings" inline=true variant=TabVariant::Secondary>"Настройки"</Tab>
        </nav>
    }
}
