//! Feature-Handler: dünner Dispatch vom Controller auf die Use-Cases.

pub mod content;
pub mod editing;
pub mod history;
pub mod transport;
pub mod view;
