//! Use-Case-Funktionen: die eigentliche Mutationslogik pro Feature.

pub mod content;
pub mod editing;
pub mod transport;
pub mod viewport;
