//! JSON output renderer.
//!
//! Outputs `{"table": {...}, "dialog": ..., "banner": ...}`.

use crate::view::{PageView, ViewRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, page: &PageView) -> String {
        serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::view::fixtures::{editing_leanne, leanne, state_with};

    #[test]
    fn render_rows_json() {
        let page = PageView::from_state(&state_with(vec![leanne()]), false);
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&page)).unwrap();

        assert_eq!(parsed["table"]["state"], "rows");
        assert_eq!(parsed["table"]["rows"][0]["firstName"], "Leanne");
        assert_eq!(parsed["table"]["rows"][0]["department"], "Romaguera-Crona");
        assert!(parsed["dialog"].is_null());
        assert!(parsed["banner"].is_null());
    }

    #[test]
    fn render_empty_json() {
        let page = PageView::from_state(&AppState::default(), false);
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&page)).unwrap();
        assert_eq!(parsed["table"]["state"], "empty");
    }

    #[test]
    fn render_dialog_json() {
        let page = PageView::from_state(&editing_leanne(), false);
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&page)).unwrap();
        assert_eq!(parsed["dialog"]["title"], "Edit User");
        assert_eq!(parsed["dialog"]["editing"], 1);
        assert_eq!(parsed["dialog"]["fields"][2]["value"], "Sincere@april.biz");
    }
}
