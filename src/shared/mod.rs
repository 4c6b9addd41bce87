//! Geteilte Werte: Laufzeit-Optionen und Farbpalette.

pub mod options;
pub mod palette;

pub use options::MapOptions;
