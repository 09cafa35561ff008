//! Linearer Undo/Redo-Verlauf über ganze Spline-Snapshots.

use crate::core::Spline;

/// Snapshot-Verlauf mit Cursor (lineare History-Semantik).
///
/// `capture` nach einem Undo verwirft den Redo-Schwanz; es überlebt kein
/// Redo-Zweig eine neue Änderung. Der Cursor zeigt immer auf einen gültigen
/// Snapshot, sobald mindestens einmal `capture` gerufen wurde.
#[derive(Default)]
pub struct EditHistory {
    snapshots: Vec<Spline>,
    cursor: usize,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen Verlauf mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(max_depth),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Hängt einen Snapshot an. Ein vorhandener Redo-Schwanz wird
    /// abgeschnitten; bei Überlauf fällt der älteste Snapshot heraus.
    pub fn capture(&mut self, snapshot: Spline) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        if self.max_depth > 0 && self.snapshots.len() >= self.max_depth {
            self.snapshots.remove(0);
        }
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Snapshot unter dem Cursor (read-only; Aufrufer klonen vor Mutation).
    pub fn retrieve(&self) -> Option<&Spline> {
        self.snapshots.get(self.cursor)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor < self.snapshots.len() - 1
    }

    /// Bewegt den Cursor einen Schritt zurück und liefert den Snapshot.
    /// `None` wenn kein Undo möglich ist (Aufrufer prüfen `can_undo`).
    pub fn undo(&mut self) -> Option<&Spline> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.retrieve()
    }

    /// Bewegt den Cursor einen Schritt vor und liefert den Snapshot.
    pub fn redo(&mut self) -> Option<&Spline> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.retrieve()
    }

    /// Leert den Verlauf, z.B. beim Laden einer anderen Motion.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }

    /// Anzahl gehaltener Snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// `true` wenn kein Snapshot vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Save-Gating für die UI: das Laden legt genau einen Snapshot an,
    /// speicherbar ist der Zustand erst nach einer echten Änderung.
    pub fn is_savable(&self) -> bool {
        self.snapshots.len() > 1
    }
}
