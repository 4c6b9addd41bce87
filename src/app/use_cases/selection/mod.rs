//! Use-Cases der Rechteck-Selektion.

pub mod bounds;
pub mod bulk;

pub use bounds::bounds_from_drag;
pub use bulk::{evaluate_bulk_selection, BulkOutcome};
