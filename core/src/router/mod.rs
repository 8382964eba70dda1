//! Router module for managing page navigation and routing
//!
//! Pages are looked up by route ID in a [`PageRegistry`]; unknown IDs are
//! reported as [`RouterError`]s rather than rendering nothing.

pub mod registry;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;

// Re-export commonly used types
pub use registry::{PageRegistry, PageRenderer, RenderContext};
pub use route::{Page, Route, RouteId};
pub use router::{Router, RouterConfig, RouterError, RouterResult, RouterState, DEFAULT_HISTORY_LIMIT};
