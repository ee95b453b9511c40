//! Panel visibility state machine.

/// Panel visibility
///
/// Starts expanded. Toggling flips the state and never touches the log or
/// any bridge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Expanded,
    Minimized,
}

impl PanelState {
    /// The state after one toggle
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Minimized,
            PanelState::Minimized => PanelState::Expanded,
        }
    }

    /// Label of the toggle button in this state
    pub fn toggle_label(self) -> &'static str {
        match self {
            PanelState::Expanded => "Minimize",
            PanelState::Minimized => "Expand",
        }
    }

    pub fn is_minimized(self) -> bool {
        self == PanelState::Minimized
    }
}
