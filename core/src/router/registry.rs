//! Lookup from route IDs to pure page renderers

use super::route::{Page, Route, RouteId};
use super::router::{Router, RouterConfig, RouterError, RouterResult};
use crate::form::{Acknowledgement, PatientForm};
use crate::pages;
use crate::view::PageView;
use std::collections::HashMap;

/// Per-render inputs: the only state a page may depend on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Current values of the patient form
    pub form: PatientForm,
    /// Set after the form has been submitted
    pub acknowledgement: Option<Acknowledgement>,
}

/// A page renderer builds a fresh view on every call
pub type PageRenderer = fn(&RenderContext) -> PageView;

/// Routes and their renderers
#[derive(Clone)]
pub struct PageRegistry {
    config: RouterConfig,
    renderers: HashMap<RouteId, PageRenderer>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            config: RouterConfig::new(),
            renderers: HashMap::new(),
        }
    }

    /// The four dashboard pages, Home first and default
    pub fn standard() -> Self {
        Page::ALL.into_iter().fold(Self::new(), |registry, page| {
            let route = Route::for_page(page).with_description(pages::description(page));
            let route = if page == Page::Home {
                route.as_default()
            } else {
                route
            };
            registry.route(route, pages::renderer(page))
        })
    }

    /// Register a route with its renderer
    pub fn route(mut self, route: Route, renderer: PageRenderer) -> Self {
        self.renderers.insert(route.id.clone(), renderer);
        self.config = self.config.add_route(route);
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Render the page registered under `id`
    pub fn render(&self, id: &RouteId, ctx: &RenderContext) -> RouterResult<PageView> {
        let renderer = self
            .renderers
            .get(id)
            .ok_or_else(|| RouterError::RouteNotFound(id.0.clone()))?;
        Ok(renderer(ctx))
    }

    /// Render a page given by label, slug or sidebar number
    pub fn render_named(&self, name: &str, ctx: &RenderContext) -> crate::Result<PageView> {
        let page: Page = name.parse()?;
        Ok(self.render(&page.route_id(), ctx)?)
    }

    /// Build a navigation router over the registered routes
    pub fn router(&self, max_history: usize) -> RouterResult<Router> {
        Router::new(self.config.clone().with_max_history(max_history))
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Router {
    /// Render the current route with `registry`
    pub fn render_current(
        &self,
        registry: &PageRegistry,
        ctx: &RenderContext,
    ) -> RouterResult<PageView> {
        registry.render(self.current_route_id(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry() {
        let registry = PageRegistry::standard();
        let ids: Vec<_> = registry.config().routes().map(|r| r.id.0.as_str()).collect();
        assert_eq!(
            ids,
            ["home", "patient-predictions", "capacity-planning", "quality-safety"]
        );
        assert_eq!(registry.config().default_route(), Some(&RouteId::from("home")));
    }

    #[test]
    fn test_each_page_renders_its_title() {
        let registry = PageRegistry::standard();
        let ctx = RenderContext::default();
        let expected = [
            (Page::Home, "Hospital Management Dashboard"),
            (Page::PatientPredictions, "Patient Predictions"),
            (Page::CapacityPlanning, "Capacity Planning"),
            (Page::QualitySafety, "Quality & Safety Monitors"),
        ];
        for (page, title) in expected {
            let view = registry.render(&page.route_id(), &ctx).unwrap();
            assert_eq!(view.page, page);
            assert_eq!(view.title, title);
        }
    }

    #[test]
    fn test_unregistered_route_is_error() {
        let registry = PageRegistry::standard();
        let err = registry
            .render(&RouteId::from("billing"), &RenderContext::default())
            .unwrap_err();
        assert_eq!(err, RouterError::RouteNotFound("billing".into()));
    }

    #[test]
    fn test_render_named() {
        let registry = PageRegistry::standard();
        let ctx = RenderContext::default();
        assert_eq!(registry.render_named("4", &ctx).unwrap().page, Page::QualitySafety);
        assert_eq!(
            registry.render_named("capacity-planning", &ctx).unwrap().page,
            Page::CapacityPlanning
        );

        let err = registry.render_named("billing", &ctx).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Router(RouterError::UnknownPage(ref name)) if name == "billing"
        ));
    }

    #[test]
    fn test_router_renders_current() {
        let registry = PageRegistry::standard();
        let mut router = registry.router(10).unwrap();
        let ctx = RenderContext::default();

        assert_eq!(router.render_current(&registry, &ctx).unwrap().page, Page::Home);
        router.navigate(Page::QualitySafety).unwrap();
        assert_eq!(
            router.render_current(&registry, &ctx).unwrap().page,
            Page::QualitySafety
        );
    }
}
