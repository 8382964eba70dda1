//! UI framework integration for the router system
//!
//! Bridges the core router with iocraft components: a shareable handle for
//! navigation and a fallback view for routes the registry cannot render.

use hms_core::router::{Page, PageRegistry, Router, RouterResult};
use iocraft::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    /// Router over the standard dashboard pages, opened on `start`
    pub fn standard(registry: &PageRegistry, start: Page, max_history: usize) -> RouterResult<Self> {
        let mut router = registry.router(max_history)?;
        router.reset_to(start)?;
        Ok(Self::new(router))
    }

    fn lock(&self) -> MutexGuard<'_, Router> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the router
    pub fn with<R>(&self, f: impl FnOnce(&mut Router) -> R) -> R {
        f(&mut self.lock())
    }
}

#[derive(Default, Props)]
pub struct RouteNotFoundProps {
    pub route: String,
}

/// Shown when the current route has no renderer
#[component]
pub fn RouteNotFound(props: &RouteNotFoundProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            height: 100pct,
            padding: 2,
        ) {
            Text(
                content: "Route Not Found",
                weight: Weight::Bold,
                color: Color::Red
            )
            Text(
                content: format!("Unknown route: {}", props.route)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(handle: &RouterHandle) -> Option<Page> {
        handle.with(|router| Page::from_route_id(router.current_route_id()))
    }

    #[test]
    fn test_router_handle() {
        let registry = PageRegistry::standard();
        let handle = RouterHandle::standard(&registry, Page::Home, 10).unwrap();

        assert_eq!(page(&handle), Some(Page::Home));
        assert!(!handle.with(|router| router.can_go_back()));

        handle.with(|router| router.navigate(Page::CapacityPlanning)).unwrap();
        assert_eq!(page(&handle), Some(Page::CapacityPlanning));
        assert!(handle.with(|router| router.can_go_back()));

        assert!(handle.with(|router| router.go_back()));
        assert_eq!(page(&handle), Some(Page::Home));
    }

    #[test]
    fn test_start_page_has_no_history() {
        let registry = PageRegistry::standard();
        let handle = RouterHandle::standard(&registry, Page::QualitySafety, 10).unwrap();
        assert_eq!(page(&handle), Some(Page::QualitySafety));
        assert!(!handle.with(|router| router.can_go_back()));
    }

    #[test]
    fn test_shared_between_clones() {
        let registry = PageRegistry::standard();
        let handle = RouterHandle::standard(&registry, Page::Home, 10).unwrap();
        let other = handle.clone();
        other.with(|router| router.navigate("quality-safety")).unwrap();
        assert_eq!(page(&handle), Some(Page::QualitySafety));
        assert!(handle.with(|router| router.navigate("billing")).is_err());
    }
}
