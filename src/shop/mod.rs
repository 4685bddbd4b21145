//! Furniture shop core: item model, list controller, persistence, and
//! reachability tracking.

pub mod connectivity;
pub mod controller;
pub mod model;
pub mod store;
