//! Use-Cases: die Algorithmen hinter den Feature-Handlern.

pub mod markers;
pub mod route;
pub mod selection;
pub mod stitch;
