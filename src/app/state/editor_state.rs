//! Hauptzustand des Editors.

use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::comm::{MotorInfo, TrajectorySample};
use crate::core::Spline;
use crate::shared::EditorOptions;

use super::{Transport, ViewState};

/// Buchhaltung laufender Backend-Requests.
///
/// Jeder ausgehende Request bekommt eine monotone Sequenznummer; nur die
/// Antwort mit der gemerkten Nummer wird angenommen, alles andere ist eine
/// verspätete Antwort auf einen überholten Request und wird verworfen.
#[derive(Debug, Clone, Default)]
pub struct PendingRequests {
    next_seq: u64,
    /// Unbeantworteter Play-Request
    pub play: Option<u64>,
    /// Unbeantworteter Stop-Request
    pub stop: Option<u64>,
    /// Unbeantworteter Fit-Request
    pub fit: Option<u64>,
}

impl PendingRequests {
    /// Vergibt die nächste Sequenznummer.
    pub fn next(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Hauptzustand der Anwendung.
pub struct EditorState {
    /// Name der geladenen Motion (None = nichts geladen)
    pub motion_name: Option<String>,
    /// Arbeitskopie der Kurve
    pub spline: Option<Spline>,
    /// Ausgewählter Motion-Player samt Motor
    pub motion_player: Option<MotorInfo>,
    /// View-State
    pub view: ViewState,
    /// Transport-State
    pub transport: Transport,
    /// Undo/Redo-Verlauf (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Während einer Aufnahme gesammelte Trajektorie
    pub recording: Vec<TrajectorySample>,
    /// Laufende Backend-Requests
    pub pending: PendingRequests,
    /// Nutzer-Hinweise, von der Shell abgeholt und angezeigt
    pub notifications: Vec<String>,
    /// Render-Callback fällig
    pub needs_redraw: bool,
}

impl EditorState {
    /// Erstellt einen neuen, leeren Editor-State.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            motion_name: None,
            spline: None,
            motion_player: None,
            view: ViewState::new(),
            transport: Transport::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
            recording: Vec::new(),
            pending: PendingRequests::default(),
            notifications: Vec::new(),
            needs_redraw: false,
        }
    }

    /// Undo/Redo-Gating für die UI.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Save-Gating: erst nach einer echten Änderung speicherbar.
    pub fn is_savable(&self) -> bool {
        self.history.is_savable()
    }

    /// Hinterlegt einen Nutzer-Hinweis für die Notification-Schicht.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message.into());
    }

    /// Gibt alle anstehenden Hinweise heraus (Shell-seitig gerufen).
    pub fn drain_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
