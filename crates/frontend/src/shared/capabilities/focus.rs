use leptos::html::Div;
use leptos::prelude::*;

/// Implemented by components that can receive focus
pub trait FocusHost {
    /// Element that receives focus
    fn focus_element(&self) -> NodeRef<Div>;
    fn focus_disabled(&self) -> bool;
}

/// Focus state of one component instance
#[derive(Clone, Copy)]
pub struct Focusable {
    /// Focus arrived from the keyboard; reflected as the `focus-visible` attribute
    pub focus_visible: RwSignal<bool>,
}

pub fn use_focusable() -> Focusable {
    Focusable {
        focus_visible: RwSignal::new(false),
    }
}

impl Focusable {
    /// `tabindex` of the focus element: focusable in tab order unless disabled
    pub fn tab_index(&self, host: &impl FocusHost) -> Option<&'static str> {
        (!host.focus_disabled()).then_some("0")
    }

    pub fn handle_focus(&self, host: &impl FocusHost) {
        let visible = host
            .focus_element()
            .get_untracked()
            .map(|element| element.matches(":focus-visible").unwrap_or(false))
            .unwrap_or(false);
        self.focus_visible.set(visible);
    }

    pub fn handle_blur(&self) {
        self.focus_visible.set(false);
    }

    /// Markup value of `focus-visible`
    pub fn focus_visible_attribute(&self) -> Option<&'static str> {
        self.focus_visible.get().then_some("")
    }
}
