//! Anbindung des Planungs-Backends (opaker Request/Response-Austausch).

pub mod client;
pub mod models;

pub use client::{Frequency, PlanningClient, PlanningMode, PlanningParams};
pub use models::{BulkReassignPayload, ReassignPdvPayload, RouteUpdate};
