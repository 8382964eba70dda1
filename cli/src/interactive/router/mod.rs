//! UI glue for the core page router
//!
//! Route resolution lives in `hms_core::router`; this module shares a router
//! between components and draws the fallback for unknown routes.

pub mod integration;

pub use integration::{RouteNotFound, RouterHandle};
