//! Navigation state over a fixed set of routes
//!
//! A [`Router`] only knows route IDs; turning a route into a page is the
//! job of the [`super::PageRegistry`].

use super::route::{Route, RouteId};
use std::collections::VecDeque;

/// Structured error type for router operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),
}

pub type RouterResult<T> = Result<T, RouterError>;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Where the router is and how it got there
#[derive(Debug, Clone)]
pub struct RouterState {
    current: RouteId,
    /// Most recent first
    history: VecDeque<RouteId>,
    limit: usize,
}

impl RouterState {
    pub fn new(initial_route: RouteId, limit: usize) -> Self {
        Self {
            current: initial_route,
            history: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    fn visit(&mut self, route_id: RouteId) {
        if route_id == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route_id);
        if self.limit > 0 {
            self.history.push_front(previous);
            self.history.truncate(self.limit);
        }
    }

    fn back(&mut self) -> bool {
        match self.history.pop_front() {
            Some(route_id) => {
                self.current = route_id;
                true
            }
            None => false,
        }
    }

    fn reset(&mut self, route_id: RouteId) {
        self.current = route_id;
        self.history.clear();
    }

    pub fn current_route(&self) -> &RouteId {
        &self.current
    }

    /// Previously visited routes, most recent first
    pub fn history(&self) -> impl Iterator<Item = &RouteId> {
        self.history.iter()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Registered routes in sidebar order
#[derive(Debug, Clone)]
pub struct RouterConfig {
    routes: Vec<Route>,
    default_route: Option<RouteId>,
    /// History entries kept; 0 turns history off
    history_limit: usize,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_route: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Register a route; re-registering an ID replaces it in place
    pub fn add_route(mut self, route: Route) -> Self {
        if route.is_default && self.default_route.is_none() {
            self.default_route = Some(route.id.clone());
        }
        match self.routes.iter_mut().find(|r| r.id == route.id) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
        self
    }

    pub fn with_default_route(mut self, route_id: RouteId) -> Self {
        self.default_route = Some(route_id);
        self
    }

    pub fn without_history(self) -> Self {
        self.with_max_history(0)
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.history_limit = max_history;
        self
    }

    pub fn get_route(&self, route_id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| &r.id == route_id)
    }

    pub fn contains(&self, route_id: &RouteId) -> bool {
        self.get_route(route_id).is_some()
    }

    pub fn default_route(&self) -> Option<&RouteId> {
        self.default_route.as_ref()
    }

    /// Routes in registration order
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Route registered after `route_id`, wrapping to the first
    pub fn route_after(&self, route_id: &RouteId) -> Option<&RouteId> {
        self.neighbour(route_id, 1)
    }

    /// Route registered before `route_id`, wrapping to the last
    pub fn route_before(&self, route_id: &RouteId) -> Option<&RouteId> {
        self.neighbour(route_id, self.routes.len().saturating_sub(1))
    }

    fn neighbour(&self, route_id: &RouteId, step: usize) -> Option<&RouteId> {
        let idx = self.routes.iter().position(|r| &r.id == route_id)?;
        self.routes.get((idx + step) % self.routes.len()).map(|r| &r.id)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation over a [`RouterConfig`]
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    state: RouterState,
}

impl Router {
    /// Start on the default route, or the first registered one
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        let initial = config
            .default_route()
            .cloned()
            .or_else(|| config.routes().next().map(|r| r.id.clone()))
            .ok_or(RouterError::NoRoutes)?;

        if !config.contains(&initial) {
            return Err(RouterError::InitialRouteMissing(initial.0));
        }

        let state = RouterState::new(initial, config.history_limit);
        Ok(Self { config, state })
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    fn known(&self, id: impl Into<RouteId>) -> RouterResult<RouteId> {
        let route_id = id.into();
        if self.config.contains(&route_id) {
            Ok(route_id)
        } else {
            Err(RouterError::RouteNotFound(route_id.0))
        }
    }

    /// Navigate to a route; unknown routes leave the state untouched
    pub fn navigate(&mut self, id: impl Into<RouteId>) -> RouterResult<()> {
        let route_id = self.known(id)?;
        tracing::debug!(from = %self.state.current, to = %route_id, "navigate");
        self.state.visit(route_id);
        Ok(())
    }

    /// Jump to a route and forget the history, e.g. for a configured start page
    pub fn reset_to(&mut self, id: impl Into<RouteId>) -> RouterResult<()> {
        let route_id = self.known(id)?;
        self.state.reset(route_id);
        Ok(())
    }

    pub fn go_back(&mut self) -> bool {
        self.state.back()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.config.get_route(self.state.current_route())
    }

    pub fn current_route_id(&self) -> &RouteId {
        self.state.current_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_routes() -> RouterConfig {
        RouterConfig::new()
            .add_route(Route::new("home", "Home").as_default())
            .add_route(Route::new("capacity", "Capacity"))
            .add_route(Route::new("quality", "Quality"))
    }

    fn history(router: &Router) -> Vec<&str> {
        router.state().history().map(|id| id.0.as_str()).collect()
    }

    #[test]
    fn test_empty_config_rejected() {
        assert_eq!(Router::new(RouterConfig::new()).unwrap_err(), RouterError::NoRoutes);

        let config = three_routes().with_default_route("missing".into());
        assert_eq!(
            Router::new(config).unwrap_err(),
            RouterError::InitialRouteMissing("missing".into())
        );
    }

    #[test]
    fn test_first_route_when_no_default() {
        let config = RouterConfig::new()
            .add_route(Route::new("a", "A"))
            .add_route(Route::new("b", "B"));
        assert_eq!(Router::new(config).unwrap().current_route_id().0, "a");
    }

    #[test]
    fn test_reregistering_keeps_order() {
        let config = three_routes().add_route(Route::new("capacity", "Beds"));
        let names: Vec<_> = config.routes().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Home", "Beds", "Quality"]);
    }

    #[test]
    fn test_navigation_history() {
        let mut router = Router::new(three_routes()).unwrap();
        assert_eq!(router.current_route_id().0, "home");
        assert!(!router.can_go_back());

        router.navigate("capacity").unwrap();
        router.navigate("quality").unwrap();
        assert_eq!(history(&router), ["capacity", "home"]);

        assert!(router.go_back());
        assert_eq!(router.current_route_id().0, "capacity");
        assert!(router.go_back());
        assert_eq!(router.current_route_id().0, "home");
        assert!(!router.go_back());
    }

    #[test]
    fn test_same_route_not_recorded() {
        let mut router = Router::new(three_routes()).unwrap();
        router.navigate("home").unwrap();
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_unknown_route_leaves_state() {
        let mut router = Router::new(three_routes()).unwrap();
        router.navigate("capacity").unwrap();

        let err = router.navigate("billing").unwrap_err();
        assert_eq!(err, RouterError::RouteNotFound("billing".into()));
        assert_eq!(err.to_string(), "Route 'billing' not found");
        assert_eq!(router.current_route_id().0, "capacity");
        assert_eq!(history(&router), ["home"]);
    }

    #[test]
    fn test_history_limit_and_disable() {
        let mut router = Router::new(three_routes().with_max_history(1)).unwrap();
        router.navigate("capacity").unwrap();
        router.navigate("quality").unwrap();
        assert_eq!(history(&router), ["capacity"]);

        let mut router = Router::new(three_routes().without_history()).unwrap();
        router.navigate("capacity").unwrap();
        assert_eq!(router.current_route_id().0, "capacity");
        assert!(!router.can_go_back());
        assert!(!router.go_back());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut router = Router::new(three_routes()).unwrap();
        router.navigate("capacity").unwrap();
        router.reset_to("quality").unwrap();
        assert_eq!(router.current_route_id().0, "quality");
        assert!(!router.can_go_back());
        assert!(router.reset_to("billing").is_err());
        assert_eq!(router.current_route_id().0, "quality");
    }

    #[test]
    fn test_neighbours_wrap() {
        let config = three_routes();
        let home = RouteId::from("home");
        assert_eq!(config.route_after(&home).unwrap().0, "capacity");
        assert_eq!(config.route_before(&home).unwrap().0, "quality");
        assert_eq!(config.route_after(&"quality".into()).unwrap().0, "home");
        assert_eq!(config.route_after(&"billing".into()), None);
        assert_eq!(RouterConfig::new().route_before(&home), None);
    }
}
