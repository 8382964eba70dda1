//! # HMS Core
//!
//! Core library for the Hospital Management System dashboard.
//!
//! Everything shown on the dashboard is literal sample data. This crate
//! builds that data, the colour theme, chart models and the patient form,
//! and renders each page into a backend-neutral [`PageView`]. Drawing the
//! view is up to the caller.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod form;
pub mod pages;
pub mod router;
pub mod theme;
pub mod view;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use error::{ConfigError, Error, Result};
pub use form::{Acknowledgement, PatientForm, PendingBackend, Predictor};
pub use router::{Page, PageRegistry, RenderContext, RouteId, Router, RouterError};
pub use theme::{theme, Rgb, Theme};
pub use view::{Block, PageView};

/// Initialize tracing to stderr
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
