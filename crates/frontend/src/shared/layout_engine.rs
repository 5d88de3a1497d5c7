//! Manual panel resizing.
//!
//! `PanelSizes` keeps the user-chosen height of every resizable surface plus
//! the drag sessions currently in progress. It holds no DOM state; the
//! `ResizeHandle` component feeds it pointer coordinates.
//!
//! ```text
//! mousedown on handle  -> begin_resize(panel, y0, h0, floor)
//! mousemove (window)   -> pointer_move(y)   height = max(floor, h0 + (y - y0))
//! mouseup (window)     -> pointer_up()
//! ```

use std::collections::HashMap;

/// Height derived from content when the user has not resized a panel:
/// `min(lines + 3, max_lines) * line_height_px`.
pub fn content_default_height(content: &str, line_height_px: f64, max_lines: usize) -> f64 {
    let lines = content.lines().count();
    ((lines + 3).min(max_lines)) as f64 * line_height_px
}

/// Coordinates captured when a drag starts on one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer_y: f64,
    pub start_height: f64,
    pub min_height: f64,
}

impl DragSession {
    pub fn height_at(&self, pointer_y: f64) -> f64 {
        (self.start_height + (pointer_y - self.start_pointer_y)).max(self.min_height)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSizes {
    heights: HashMap<String, f64>,
    sessions: HashMap<String, DragSession>,
}

impl PanelSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag on `panel_id`. A session already running on the same panel
    /// is replaced; sessions on other panels are untouched.
    pub fn begin_resize(
        &mut self,
        panel_id: &str,
        start_pointer_y: f64,
        current_height: f64,
        min_height: f64,
    ) {
        self.sessions.insert(
            panel_id.to_string(),
            DragSession {
                start_pointer_y,
                start_height: current_height,
                min_height,
            },
        );
    }

    /// Apply a pointer move to every active session, each against its own
    /// start coordinates.
    pub fn pointer_move(&mut self, pointer_y: f64) {
        for (panel_id, session) in &self.sessions {
            self.heights
                .insert(panel_id.clone(), session.height_at(pointer_y));
        }
    }

    pub fn end_resize(&mut self, panel_id: &str) {
        self.sessions.remove(panel_id);
    }

    /// Pointer released: every session ends
    pub fn pointer_up(&mut self) {
        self.sessions.clear();
    }

    pub fn is_dragging(&self) -> bool {
        !self.sessions.is_empty()
    }

    pub fn is_dragging_panel(&self, panel_id: &str) -> bool {
        self.sessions.contains_key(panel_id)
    }

    /// Manual override, if the panel was ever resized
    pub fn height(&self, panel_id: &str) -> Option<f64> {
        self.heights.get(panel_id).copied()
    }

    pub fn height_or(&self, panel_id: &str, default: f64) -> f64 {
        self.height(panel_id).unwrap_or(default)
    }

    /// Manual override, or the content-derived default
    pub fn resolved_height(
        &self,
        panel_id: &str,
        content: &str,
        line_height_px: f64,
        max_lines: usize,
    ) -> f64 {
        self.height(panel_id)
            .unwrap_or_else(|| content_default_height(content, line_height_px, max_lines))
    }

    /// Drop overrides and sessions of every panel whose id starts with `prefix`
    pub fn forget_prefix(&mut self, prefix: &str) {
        self.heights.retain(|id, _| !id.starts_with(prefix));
        self.sessions.retain(|id, _| !id.starts_with(prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_default_height() {
        let ten_lines = vec!["row"; 10].join("\n");
        assert_eq!(content_default_height(&ten_lines, 20.0, 100), 260.0);

        let many_lines = vec!["row"; 150].join("\n");
        assert_eq!(content_default_height(&many_lines, 20.0, 100), 2000.0);

        assert_eq!(content_default_height("", 20.0, 100), 60.0);
    }

    #[test]
    fn test_drag_applies_delta() {
        let mut panels = PanelSizes::new();
        panels.begin_resize("editor", 300.0, 250.0, 150.0);
        panels.pointer_move(340.0);
        assert_eq!(panels.height("editor"), Some(290.0));
        panels.pointer_move(280.0);
        assert_eq!(panels.height("editor"), Some(230.0));
    }

    #[test]
    fn test_drag_respects_floor() {
        for delta in [-500.0, -101.0, -100.0, -99.0, 0.0, 75.0] {
            let mut panels = PanelSizes::new();
            panels.begin_resize("main", 400.0, 200.0, 100.0);
            panels.pointer_move(400.0 + delta);
            assert_eq!(panels.height("main"), Some((200.0 + delta).max(100.0)));
        }
    }

    #[test]
    fn test_no_updates_after_release() {
        let mut panels = PanelSizes::new();
        panels.begin_resize("main", 0.0, 200.0, 100.0);
        panels.pointer_move(50.0);
        panels.pointer_up();
        assert!(!panels.is_dragging());

        panels.pointer_move(500.0);
        assert_eq!(panels.height("main"), Some(250.0));
    }

    #[test]
    fn test_concurrent_sessions_are_isolated() {
        let mut panels = PanelSizes::new();
        panels.begin_resize("a", 100.0, 200.0, 100.0);
        panels.begin_resize("b", 500.0, 300.0, 150.0);
        panels.pointer_move(150.0);

        assert_eq!(panels.height("a"), Some(250.0));
        assert_eq!(panels.height("b"), Some(150.0));

        panels.end_resize("a");
        panels.pointer_move(700.0);
        assert_eq!(panels.height("a"), Some(250.0));
        assert_eq!(panels.height("b"), Some(500.0));
    }

    #[test]
    fn test_manual_height_overrides_content_default() {
        let mut panels = PanelSizes::new();
        let content = "a\nb\nc";
        assert_eq!(panels.resolved_height("output/pg/0", content, 20.0, 100), 120.0);

        panels.begin_resize("output/pg/0", 0.0, 120.0, 100.0);
        panels.pointer_move(-10.0);
        panels.pointer_up();

        let long = vec!["row"; 50].join("\n");
        assert_eq!(panels.resolved_height("output/pg/0", &long, 20.0, 100), 110.0);
    }

    #[test]
    fn test_forget_prefix() {
        let mut panels = PanelSizes::new();
        for id in ["editor", "output/pg/0", "output/pg/1"] {
            panels.begin_resize(id, 0.0, 200.0, 100.0);
        }
        panels.pointer_move(10.0);
        panels.pointer_up();

        panels.forget_prefix("output/");
        assert_eq!(panels.height("editor"), Some(210.0));
        assert_eq!(panels.height("output/pg/0"), None);
        assert_eq!(panels.height("output/pg/1"), None);
    }
}
