//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Arbeitskopie,
/// Transport, View, offene Backend-Requests).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use history::EditHistory;
pub use state::{
    EditorState, PendingRequests, TickOutcome, Transport, TransportError, TransportState,
    ViewState,
};
