//! Drag handle for vertically resizable panels.
//!
//! # Usage
//!
//! ```rust,ignore
//! let panels = RwSignal::new(PanelSizes::new());
//! install_resize_listeners(panels);
//!
//! view! {
//!     <textarea style:height=move || format!("{}px", height.get())></textarea>
//!     <ResizeHandle panel_id="editor" panels=panels current_height=height min_height=150.0 />
//! }
//! ```
//!
//! `mousedown` on the handle opens a session; the window-level listeners
//! installed once per page forward every move and the release to the store.

use crate::shared::layout_engine::PanelSizes;
use leptos::prelude::*;

#[component]
pub fn ResizeHandle(
    /// Key of the panel in the `PanelSizes` store
    #[prop(into)]
    panel_id: String,
    panels: RwSignal<PanelSizes>,
    /// Height the panel is rendered at right now
    #[prop(into)]
    current_height: Signal<f64>,
    min_height: f64,
) -> impl IntoView {
    let id_for_class = panel_id.clone();
    let is_active = move || panels.with(|p| p.is_dragging_panel(&id_for_class));

    let on_mousedown = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let start_height = current_height.get_untracked();
        let start_y = ev.client_y() as f64;
        panels.update(|p| p.begin_resize(&panel_id, start_y, start_height, min_height));
        log::debug!("resize start: {} at {}px", panel_id, start_height);
    };

    view! {
        <div
            class="resize-handle"
            class:resize-handle--active=is_active
            on:mousedown=on_mousedown
        ></div>
    }
}

/// Register the window `mousemove` / `mouseup` listeners that drive every
/// `ResizeHandle` bound to `panels`. Listeners are removed when the owning
/// component is disposed.
pub fn install_resize_listeners(panels: RwSignal<PanelSizes>) {
    let move_handle = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !panels.with_untracked(|p| p.is_dragging()) {
            return;
        }
        let pointer_y = ev.client_y() as f64;
        panels.update(|p| p.pointer_move(pointer_y));
    });

    let up_handle = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if panels.with_untracked(|p| p.is_dragging()) {
            panels.update(|p| p.pointer_up());
            log::debug!("resize end");
        }
    });

    // Cursor and text selection while a drag is running
    Effect::new(move |_| {
        let dragging = panels.with(|p| p.is_dragging());
        apply_body_drag_style(dragging);
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        // A drag may still be running when the page goes away
        apply_body_drag_style(false);
    });
}

/// Body style properties for the given drag state
pub fn body_drag_style(dragging: bool) -> [(&'static str, &'static str); 2] {
    if dragging {
        [("cursor", "row-resize"), ("user-select", "none")]
    } else {
        [("cursor", ""), ("user-select", "")]
    }
}

fn apply_body_drag_style(dragging: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    for (property, value) in body_drag_style(dragging) {
        let _ = style.set_property(property, value);
    }
}
