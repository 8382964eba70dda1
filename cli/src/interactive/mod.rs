//! Full-screen interactive dashboard built on iocraft

pub mod app;
pub mod components;
pub mod pages;
pub mod router;

pub use app::run_dashboard;
