//! Use-Case-Funktionen für Kurven-Bearbeitung.
//!
//! Alle Bearbeitungen folgen demselben Muster: neue Kurve aus der
//! Arbeitskopie ableiten, als Snapshot in die History aufnehmen, Dauer im
//! Transport nachziehen. Die Arbeitskopie wird nie in place mutiert.

use glam::DVec2;

use crate::app::EditorState;
use crate::core::{BoundingBox, Spline};

/// Übernimmt eine bearbeitete Kurve als Arbeitskopie und History-Snapshot.
fn commit(state: &mut EditorState, spline: Spline) {
    state.transport.duration = spline.duration();
    state.transport.position = state.transport.position.min(spline.duration());
    state.history.capture(spline.clone());
    state.spline = Some(spline);
    state.needs_redraw = true;
}

/// Fügt an der Pixel-Position einen Knoten ein. Positionen außerhalb des
/// Knoten-Bereichs sind eine Nutzer-Eingabe ohne Wirkung, kein Fehler.
pub fn insert_knot(state: &mut EditorState, pos_px: DVec2) {
    let Some(spline) = state.spline.as_ref() else {
        return;
    };

    let point = state.view.transform.inverse_point(pos_px);
    match spline.insert_knot(point) {
        Ok(inserted) => commit(state, inserted),
        Err(err) => log::debug!("Knoten bei {point:?} nicht eingefügt: {err}"),
    }
}

/// Multipliziert die Kontrollordinaten mit `factor`.
pub fn scale_curve(state: &mut EditorState, factor: f64) {
    if let Some(spline) = state.spline.as_ref() {
        let scaled = spline.scale(factor);
        commit(state, scaled);
    }
}

/// Streckt/staucht die Knotenzeiten um `factor`. Ein unzulässiger Faktor
/// ist hier ein Logikfehler: das Intent-Mapping filtert ihn bereits.
pub fn stretch_curve(state: &mut EditorState, factor: f64) -> anyhow::Result<()> {
    if let Some(spline) = state.spline.as_ref() {
        let stretched = spline.stretch(factor)?;
        commit(state, stretched);
    }
    Ok(())
}

/// Verschiebt die Kurve zeitlich; Links-Verschieben klemmt beim Start.
pub fn shift_curve(state: &mut EditorState, offset: f64) {
    if let Some(spline) = state.spline.as_ref() {
        let shifted = spline.shift(offset);
        commit(state, shifted);
    }
}

/// Klemmt die Ordinaten auf den Verfahrweg des gewählten Motors.
pub fn limit_to_travel(state: &mut EditorState) {
    let Some(spline) = state.spline.as_ref() else {
        return;
    };

    let length = state
        .motion_player
        .as_ref()
        .map(|info| info.length)
        .unwrap_or(state.options.motor_length);
    let limits = BoundingBox::new(
        DVec2::new(spline.start(), 0.0),
        DVec2::new(spline.end(), length),
    );
    let limited = spline.restrict_to_bbox(&limits);
    commit(state, limited);
}
