//! Control surface contract tests
//!
//! These tests define the texts and limits the developer panel shows.

use dev_controls::PanelState;
use services_logger::{Placeholder, DEFAULT_LOG_CAPACITY};

// ===== Panel Texts =====
const PLACEHOLDER_EMPTY: &str = "No scripts called yet...";
const PLACEHOLDER_CLEARED: &str = "Log cleared...";
const LABEL_EXPANDED: &str = "Minimize";
const LABEL_MINIMIZED: &str = "Expand";

/// Entries the panel log keeps
pub const VISIBLE_LOG_LIMIT: usize = 10;

/// Label shown on the toggle button for a panel state
pub fn toggle_label(state: PanelState) -> &'static str {
    state.toggle_label()
}

/// Text shown for an empty log
pub fn placeholder_text(placeholder: Placeholder) -> &'static str {
    placeholder.text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use dev_controls::{ControlError, DevControls};
    use services_bridge::DatasetKey;

    #[test]
    fn test_log_limit_contract() {
        let mut bridge = dev_bridge();
        let mut controls = DevControls::new();

        for _ in 0..12 {
            controls.send_dataset(&mut bridge, DatasetKey::Users).unwrap();
        }

        assert_eq!(controls.log().len(), VISIBLE_LOG_LIMIT);
        assert_eq!(received(&bridge).len(), 12);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut bridge = dev_bridge();
        let mut controls = DevControls::new();

        controls.send_dataset(&mut bridge, DatasetKey::Users).unwrap();
        controls.call_script(&mut bridge, "GetRecords", "").unwrap();

        let first = controls.log().entries().next().unwrap();
        assert_eq!(first.message, "Called script: GetRecords with null");
    }

    #[test]
    fn test_clear_contract() {
        let mut bridge = dev_bridge();
        let mut controls = DevControls::new();
        assert_eq!(controls.log().render_lines(), vec![PLACEHOLDER_EMPTY]);

        controls.call_script(&mut bridge, "GetUsers", "").unwrap();
        controls.clear_log(&mut bridge);

        assert!(bridge.mock_host().unwrap().script_log().is_empty());
        assert_eq!(controls.log().render_lines(), vec![PLACEHOLDER_CLEARED]);
    }

    #[test]
    fn test_malformed_json_contract() {
        let mut bridge = dev_bridge();
        let mut controls = DevControls::new();

        let err = controls.send_custom(&mut bridge, "{not json").unwrap_err();
        assert!(matches!(err, ControlError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));

        assert!(received(&bridge).is_empty());
        assert!(controls.log().is_empty());
        assert!(bridge.mock_host().unwrap().script_log().is_empty());
    }

    #[test]
    fn test_toggle_contract() {
        let mut controls = DevControls::new();
        assert_eq!(toggle_label(controls.panel()), LABEL_EXPANDED);
        assert_eq!(toggle_label(controls.toggle()), LABEL_MINIMIZED);
        assert_eq!(toggle_label(controls.toggle()), LABEL_EXPANDED);
    }

    #[test]
    fn test_panel_texts_are_stable() {
        // These texts MUST NOT CHANGE; developers recognize them
        assert_eq!(placeholder_text(Placeholder::Empty), PLACEHOLDER_EMPTY);
        assert_eq!(placeholder_text(Placeholder::Cleared), PLACEHOLDER_CLEARED);
        assert_eq!(DEFAULT_LOG_CAPACITY, VISIBLE_LOG_LIMIT);
    }
}
