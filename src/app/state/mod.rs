//! Editor-Zustand: Arbeitskopie, View, Transport, History.

pub mod editor_state;
pub mod transport;
pub mod view;

pub use editor_state::{EditorState, PendingRequests};
pub use transport::{TickOutcome, Transport, TransportError, TransportState};
pub use view::ViewState;
