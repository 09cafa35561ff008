//! Eingabe-Verarbeitung an der UI-Grenze.

pub mod input;

pub use input::PanZoomController;
