/// Local sections of the floating nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NavSection {
    #[default]
    System,
    Components,
    Tokens,
    Playground,
}

impl NavSection {
    pub(crate) const ALL: [NavSection; 4] = [
        NavSection::System,
        NavSection::Components,
        NavSection::Tokens,
        NavSection::Playground,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            NavSection::System => "System",
            NavSection::Components => "Components",
            NavSection::Tokens => "Tokens",
            NavSection::Playground => "Playground",
        }
    }
}

/// View model for the top nav widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopNavViewModel {
    pub(crate) active_section: NavSection,
}
