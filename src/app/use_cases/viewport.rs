//! Use-Case-Funktionen für Viewport-Steuerung.

use glam::DVec2;

use crate::app::EditorState;

/// Zoomt stufenweise hinein (Zoom-Button).
pub fn zoom_in(state: &mut EditorState) {
    let step = state.options.zoom_step;
    state.view.transform.zoom_in_place(1.0 / step);
    state.needs_redraw = true;
}

/// Zoomt stufenweise heraus (Zoom-Button).
pub fn zoom_out(state: &mut EditorState) {
    let step = state.options.zoom_step;
    state.view.transform.zoom_in_place(step);
    state.needs_redraw = true;
}

/// Aktualisiert die Anzeige-Größe; beide Transforms werden neu berechnet.
pub fn resize(state: &mut EditorState, size: DVec2) {
    state.view.transform.set_size(size);
    state.needs_redraw = true;
}

/// Beginnt eine Drag-Geste: Pointer-Ursprung und Viewport einfrieren.
pub fn drag_begin(state: &mut EditorState, pos_px: DVec2) {
    let view = &mut state.view;
    view.pan_zoom.begin(pos_px, &view.transform);
}

/// Wendet das kumulative Drag-Delta an und stößt einen Redraw an.
pub fn drag_update(state: &mut EditorState, delta_px: DVec2) {
    let view = &mut state.view;
    let viewport = view.pan_zoom.update(
        delta_px,
        view.transform.size().x,
        state.options.drag_zoom_sensitivity,
    );
    if let Some(viewport) = viewport {
        view.transform.set_viewport(viewport);
        state.needs_redraw = true;
    }
}

/// Beendet die Drag-Geste und verwirft den Schnappschuss.
pub fn drag_end(state: &mut EditorState) {
    state.view.pan_zoom.end();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zoom_in_then_out_restores_viewport() {
        let mut state = EditorState::new();
        let before = *state.view.transform.viewport();

        zoom_in(&mut state);
        assert!(state.view.transform.viewport().width() < before.width());

        zoom_out(&mut state);
        let after = state.view.transform.viewport();
        assert_relative_eq!(after.width(), before.width(), epsilon = 1e-12);
    }

    #[test]
    fn resize_marks_redraw() {
        let mut state = EditorState::new();
        resize(&mut state, DVec2::new(1024.0, 768.0));
        assert!(state.needs_redraw);
        assert_relative_eq!(state.view.transform.size().x, 1024.0);
    }

    #[test]
    fn drag_cycle_pans_viewport() {
        let mut state = EditorState::new();
        let before = *state.view.transform.viewport();

        drag_begin(&mut state, DVec2::new(400.0, 300.0));
        drag_update(&mut state, DVec2::new(100.0, 0.0));
        drag_end(&mut state);

        let after = state.view.transform.viewport();
        assert!(after.ll.x < before.ll.x);
        assert_relative_eq!(after.width(), before.width(), epsilon = 1e-12);
        assert!(!state.view.pan_zoom.is_active());
    }

    #[test]
    fn drag_update_without_begin_is_noop() {
        let mut state = EditorState::new();
        let before = *state.view.transform.viewport();

        drag_update(&mut state, DVec2::new(50.0, 50.0));

        assert_eq!(*state.view.transform.viewport(), before);
        assert!(!state.needs_redraw);
    }
}
