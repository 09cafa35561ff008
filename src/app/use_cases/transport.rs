//! Use-Case-Funktionen für Playback, Aufnahme und Backend-Antworten.
//!
//! Jeder ausgehende Request trägt eine Sequenznummer; angenommen wird nur
//! die Antwort mit der zuletzt gemerkten Nummer im passenden Zustand.
//! Verspätete Antworten auf überholte Requests werden verworfen statt
//! abgebrochen. Backend-Fehler rollen den Transport zurück und landen als
//! Hinweis bei der Notification-Schicht, nie als Fehler im Controller.

use crate::app::state::{TickOutcome, TransportState};
use crate::app::EditorState;
use crate::comm::{BackendReply, BackendRequest, RequestKind, SplineRecord, TrajectorySample};

/// Startet das Playback der Arbeitskopie ab der Cursor-Position.
///
/// Der Transport wechselt optimistisch nach `Playing`; der Uhr-Anker kommt
/// erst mit der `PlayStarted`-Antwort, bis dahin werden Ticks ignoriert.
pub fn start_playback(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    let Some(spline) = state.spline.as_ref() else {
        log::debug!("Play ohne geladene Motion ignoriert");
        return Ok(Vec::new());
    };
    let Some(info) = state.motion_player.as_ref() else {
        state.notify("Kein Motion-Player ausgewählt");
        return Ok(Vec::new());
    };

    let record = SplineRecord::from_spline(spline);
    let player_id = info.id;
    state.transport.play()?;

    let seq = state.pending.next();
    state.pending.play = Some(seq);
    Ok(vec![BackendRequest {
        seq,
        kind: RequestKind::Play {
            record,
            player_id,
            looping: state.transport.looping,
            offset: state.transport.position,
        },
    }])
}

/// Pausiert das Playback und stößt den Backend-Stop an.
pub fn pause_playback(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    state.transport.pause()?;
    // Eine noch offene Play-Antwort ist ab jetzt überholt
    state.pending.play = None;
    Ok(stop_request(state))
}

/// Beginnt eine Aufnahme: Motorsteuerung aus, Trajektorien-Puffer leeren.
pub fn start_recording(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    state.transport.record()?;
    state.recording.clear();

    let seq = state.pending.next();
    Ok(vec![BackendRequest {
        seq,
        kind: RequestKind::DisableMotors,
    }])
}

/// Beendet die Aufnahme: Motorsteuerung an, Fit-Request mit der
/// gesammelten Trajektorie.
pub fn stop_recording(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    state.transport.stop_recording()?;

    let trajectory = std::mem::take(&mut state.recording);
    log::info!("Aufnahme beendet: {} Messpunkte", trajectory.len());

    let enable_seq = state.pending.next();
    let fit_seq = state.pending.next();
    state.pending.fit = Some(fit_seq);
    Ok(vec![
        BackendRequest {
            seq: enable_seq,
            kind: RequestKind::EnableMotors,
        },
        BackendRequest {
            seq: fit_seq,
            kind: RequestKind::FitSpline { trajectory },
        },
    ])
}

/// Setzt das Loop-Flag für das nächste Playback.
pub fn set_looping(state: &mut EditorState, looping: bool) {
    state.transport.looping = looping;
}

/// Reicht einen einzelnen Positionswert direkt an den Motion-Player durch.
///
/// Fire-and-forget: es wird keine Sequenznummer gemerkt, eine verspätete
/// `Failed`-Antwort landet im Überholt-Zweig.
pub fn preview_position(state: &mut EditorState, position: f64) -> Vec<BackendRequest> {
    let Some(info) = state.motion_player.as_ref() else {
        log::debug!("Live-Vorschau ohne Motion-Player ignoriert");
        return Vec::new();
    };
    let player_id = info.id;
    let seq = state.pending.next();
    vec![BackendRequest {
        seq,
        kind: RequestKind::LivePreview { player_id, position },
    }]
}

/// Verarbeitet einen periodischen Motor-Tick.
///
/// Während `Playing` ist der Tick der einzige Schreiber der Cursor-Position;
/// während `Recording` wird er als Trajektorien-Messpunkt gesammelt.
pub fn apply_motor_tick(
    state: &mut EditorState,
    timestamp: f64,
    values: Vec<f64>,
) -> Vec<BackendRequest> {
    match state.transport.state {
        TransportState::Playing => {
            if state.pending.play.is_some() {
                // Uhr-Anker fehlt noch, Tick verwerfen
                return Vec::new();
            }
            match state.transport.move_cursor(timestamp) {
                TickOutcome::Moved => {
                    state.needs_redraw = true;
                    Vec::new()
                }
                TickOutcome::DurationExceeded => {
                    // Impliziter Stopp am Kurvenende
                    state.transport.force_pause();
                    state.needs_redraw = true;
                    stop_request(state)
                }
                TickOutcome::Ignored => Vec::new(),
            }
        }
        TransportState::Recording => {
            state.recording.push(TrajectorySample { timestamp, values });
            Vec::new()
        }
        TransportState::Paused => Vec::new(),
    }
}

/// Behavior-Hinweis: ein aktives Behavior erzwingt den Stopp aus jedem
/// Zustand. Eine laufende Aufnahme wird verworfen, die Motoren wieder
/// freigegeben.
pub fn apply_behavior_notice(state: &mut EditorState, active: bool) -> Vec<BackendRequest> {
    if !active {
        return Vec::new();
    }

    match state.transport.state {
        TransportState::Paused => Vec::new(),
        TransportState::Playing => {
            log::warn!("Behavior aktiv: alle Player werden gestoppt");
            state.transport.force_pause();
            state.pending.play = None;
            state.needs_redraw = true;
            // Safety-Override stoppt nicht nur den eigenen Player
            let seq = state.pending.next();
            state.pending.stop = Some(seq);
            vec![BackendRequest {
                seq,
                kind: RequestKind::StopAll,
            }]
        }
        TransportState::Recording => {
            log::warn!("Behavior aktiv: Aufnahme wird verworfen");
            state.transport.force_pause();
            state.recording.clear();
            state.needs_redraw = true;
            let seq = state.pending.next();
            vec![BackendRequest {
                seq,
                kind: RequestKind::EnableMotors,
            }]
        }
    }
}

/// Verarbeitet eine Backend-Antwort. Nur Antworten mit der gemerkten
/// Sequenznummer im passenden Zustand werden angenommen.
pub fn apply_backend_reply(
    state: &mut EditorState,
    seq: u64,
    reply: BackendReply,
) -> Vec<BackendRequest> {
    match reply {
        BackendReply::PlayStarted { start_time } => {
            let expected = state.pending.play == Some(seq)
                && state.transport.state == TransportState::Playing;
            if expected {
                state.pending.play = None;
                state.transport.anchor(start_time, state.options.interval);
            } else {
                log::debug!("Verspätete PlayStarted-Antwort (seq {seq}) verworfen");
            }
        }
        BackendReply::Stopped => {
            if state.pending.stop == Some(seq) {
                state.pending.stop = None;
            } else {
                log::debug!("Verspätete Stop-Antwort (seq {seq}) verworfen");
            }
        }
        BackendReply::MotorsDisabled | BackendReply::MotorsEnabled => {
            // Rein informativ, keine Zustandsänderung
        }
        BackendReply::SplineFitted { record } => {
            if state.pending.fit != Some(seq) {
                log::debug!("Verspätete Fit-Antwort (seq {seq}) verworfen");
                return Vec::new();
            }
            state.pending.fit = None;
            match record.to_spline() {
                Ok(fitted) => {
                    log::info!(
                        "Fit übernommen: {} Segmente, Dauer {:.3} s",
                        fitted.n_segments(),
                        fitted.duration()
                    );
                    state.transport.duration = fitted.duration();
                    state.transport.position = 0.0;
                    state.history.capture(fitted.clone());
                    state.spline = Some(fitted);
                    state.needs_redraw = true;
                }
                Err(err) => {
                    log::warn!("Fit-Ergebnis unbrauchbar: {err}");
                    state.notify(format!("Aufnahme verworfen: {err}"));
                }
            }
        }
        BackendReply::Failed { message } => {
            return handle_failure(state, seq, message);
        }
    }

    Vec::new()
}

/// Rollt den Zustand des zugehörigen Requests zurück und meldet den
/// Fehler als Hinweis. Unbekannte Sequenznummern sind überholte Requests.
fn handle_failure(state: &mut EditorState, seq: u64, message: String) -> Vec<BackendRequest> {
    if state.pending.play == Some(seq) {
        log::warn!("Play fehlgeschlagen: {message}");
        state.pending.play = None;
        if state.transport.state == TransportState::Playing {
            state.transport.force_pause();
        }
        state.notify(format!("Playback fehlgeschlagen: {message}"));
    } else if state.pending.fit == Some(seq) {
        log::warn!("Fit fehlgeschlagen: {message}");
        state.pending.fit = None;
        // Aufnahme verwerfen, History bleibt unangetastet
        state.notify(format!("Aufnahme verworfen: {message}"));
    } else if state.pending.stop == Some(seq) {
        log::warn!("Stop fehlgeschlagen: {message}");
        state.pending.stop = None;
        state.notify(format!("Stop fehlgeschlagen: {message}"));
    } else {
        log::debug!("Fehler-Antwort auf überholten Request (seq {seq}): {message}");
    }
    Vec::new()
}

/// Baut den Stop-Request für den gewählten Player.
fn stop_request(state: &mut EditorState) -> Vec<BackendRequest> {
    let Some(info) = state.motion_player.as_ref() else {
        return Vec::new();
    };
    let player_id = info.id;
    let seq = state.pending.next();
    state.pending.stop = Some(seq);
    vec![BackendRequest {
        seq,
        kind: RequestKind::Stop { player_id },
    }]
}
