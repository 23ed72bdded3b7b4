//! Navigation tab.
//!
//! A passive display target: `active` and `variant` arrive from the tabs
//! container as read-only props and are never written here.

use contracts::config::UiConfig;
use contracts::enums::TabVariant;
use contracts::tab::{BadgeSlot, IconContent, Part, Slot, TabAttributes, TabKey, TabLayout};
use leptos::ev::{FocusEvent, MouseEvent};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;

use super::icon::Icon;
use super::ripple::Ripple;
use crate::shared::capabilities::{
    use_focusable, FocusHost, RippleController, RippleHost, SlotPresence,
};
use crate::shared::registry::is_defined;

/// Icon content, replaces the glyph generated from `icon`
#[slot]
pub struct TabIcon {
    children: ChildrenFn,
}

/// Badge overlay
#[slot]
pub struct TabBadge {
    children: ChildrenFn,
}

/// Replaces the whole icon/label structure
#[slot]
pub struct TabCustom {
    children: ChildrenFn,
}

/// Ripple origin and focus target of a tab: always its own root, never disabled.
#[derive(Clone, Copy)]
struct TabHost {
    root: NodeRef<Div>,
}

impl RippleHost for TabHost {
    fn ripple_disabled(&self) -> bool {
        false
    }

    fn ripple_origin(&self) -> NodeRef<Div> {
        self.root
    }
}

impl FocusHost for TabHost {
    fn focus_element(&self) -> NodeRef<Div> {
        self.root
    }

    fn focus_disabled(&self) -> bool {
        false
    }
}

/// Tab component
///
/// Events: `click`, `focus`, `blur` are passed through unchanged.
/// Slots: default (label), `TabIcon`, `TabBadge`, `TabCustom`.
/// Parts: `container`, `icon-container`, `icon`, `label-container`.
#[component]
pub fn Tab(
    /// Identifies the tab among its siblings
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Icon name, used when no `TabIcon` slot is given
    #[prop(optional, into)]
    icon: MaybeProp<String>,
    /// Icon and label side by side instead of stacked
    #[prop(optional, into)]
    inline: MaybeProp<bool>,
    /// Selected state, controlled by the tabs container
    #[prop(optional, into)]
    active: MaybeProp<bool>,
    /// Shape, controlled by the tabs container
    #[prop(optional, into)]
    variant: MaybeProp<TabVariant>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] tab_icon: Option<TabIcon>,
    #[prop(optional)] tab_badge: Option<TabBadge>,
    #[prop(optional)] tab_custom: Option<TabCustom>,
    /// Label
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let key = TabKey::generate();
    log::debug!("tab created: key={}", key);

    let config = use_context::<UiConfig>().unwrap_or_default();
    if !is_defined(&config.tag) {
        log::warn!("tab rendered under undefined tag '{}'", config.tag);
    }

    let root = NodeRef::<Div>::new();
    let host = TabHost { root };
    let ripple = RippleController::new(config.ripple_duration_ms);
    let focus = use_focusable();

    let presence = SlotPresence::new(
        children.is_some(),
        tab_icon.is_some(),
        tab_badge.is_some(),
        tab_custom.is_some(),
    );
    let icon_children = tab_icon.map(|slot| slot.children);
    let badge_children = tab_badge.map(|slot| slot.children);
    let custom_children = tab_custom.map(|slot| slot.children);

    // Memo skips a layout pass when the snapshot did not change
    let attrs = Memo::new(move |_| TabAttributes {
        value: value.get(),
        icon: icon.get(),
        inline: inline.get().unwrap_or(false),
        active: active.get().unwrap_or(false),
        variant: variant.get().unwrap_or_default(),
    });
    let layout = Memo::new(move |_| attrs.with(|a| TabLayout::resolve(a, &presence)));
    let reflect = move |name: &'static str| move || attrs.with(|a| a.attribute(name));

    // The badge area is always rendered, empty or not, in the container the layout picks
    let render_badge = move |here: BadgeSlot, layout: &TabLayout| {
        (layout.badge_slot() == Some(here)).then(|| {
            view! {
                <span class=Slot::Badge.name()>
                    {badge_children.as_ref().map(|children| children())}
                </span>
            }
        })
    };

    let render_layout = move || {
        let layout = layout.get();
        let Some(icon) = layout.icon_content() else {
            return custom_children.as_ref().map(|children| children()).into_any();
        };

        let icon_view = match icon {
            IconContent::Slotted => icon_children.as_ref().map(|children| children()).into_any(),
            IconContent::Named(name) => view! {
                <Icon name=name.clone() class=Part::Icon.name() part=Part::Icon.name() />
            }
            .into_any(),
            IconContent::Empty => ().into_any(),
        };

        view! {
            <div part=Part::IconContainer.name() class=Part::IconContainer.name()>
                {render_badge(BadgeSlot::IconContainer, &layout)}
                {icon_view}
            </div>
            <div part=Part::LabelContainer.name() class=Part::LabelContainer.name()>
                {render_badge(BadgeSlot::LabelContainer, &layout)}
                {children.as_ref().map(|children| children())}
            </div>
        }
        .into_any()
    };

    view! {
        <div
            node_ref=root
            class="tab"
            {..(
                custom_attribute("value", reflect("value")),
                custom_attribute("icon", reflect("icon")),
                custom_attribute("inline", reflect("inline")),
                custom_attribute("active", reflect("active")),
                custom_attribute("variant", reflect("variant")),
            )}
            data-key=key.to_string()
            data-tag=config.tag.clone()
            tabindex=focus.tab_index(&host)
            focus-visible=move || focus.focus_visible_attribute()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
            on:focus=move |ev| {
                focus.handle_focus(&host);
                if let Some(handler) = on_focus {
                    handler.run(ev);
                }
            }
            on:blur=move |ev| {
                focus.handle_blur();
                if let Some(handler) = on_blur {
                    handler.run(ev);
                }
            }
            on:pointerdown=move |ev| {
                ripple.start_press(&host, ev.client_x() as f64, ev.client_y() as f64)
            }
            on:pointerup=move |_| ripple.end_press()
            on:pointerleave=move |_| ripple.end_press()
            on:pointercancel=move |_| ripple.end_press()
        >
            <Ripple controller=ripple />
            <div part=Part::Container.name() class=move || layout.with(TabLayout::container_class)>
                {render_layout}
            </div>
        </div>
    }
}
