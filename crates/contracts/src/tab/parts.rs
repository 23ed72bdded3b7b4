/// Styling hooks exposed to external style rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Container,
    IconContainer,
    Icon,
    LabelContainer,
}

impl Part {
    /// Used both as the `part` attribute and as the CSS class
    pub fn name(&self) -> &'static str {
        match self {
            Part::Container => "container",
            Part::IconContainer => "icon-container",
            Part::Icon => "icon",
            Part::LabelContainer => "label-container",
        }
    }
}
