//! Feature-Handler für die Command-Verarbeitung.

pub mod dialog;
pub mod plan;
pub mod selection;
pub mod stitching;
pub mod view;
