//! Route definitions and the dashboard page set

use super::RouterError;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteId(pub String);

impl RouteId {
    /// Create a new route ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<Page> for RouteId {
    fn from(page: Page) -> Self {
        Self(page.slug().to_string())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The four dashboard views selectable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    PatientPredictions,
    CapacityPlanning,
    QualitySafety,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::PatientPredictions,
        Page::CapacityPlanning,
        Page::QualitySafety,
    ];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::PatientPredictions => "Patient Predictions",
            Page::CapacityPlanning => "Capacity Planning",
            Page::QualitySafety => "Quality & Safety",
        }
    }

    /// Stable identifier used on the command line and as the route ID
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::PatientPredictions => "patient-predictions",
            Page::CapacityPlanning => "capacity-planning",
            Page::QualitySafety => "quality-safety",
        }
    }

    pub fn route_id(&self) -> RouteId {
        RouteId::from(*self)
    }

    /// Position in the sidebar, starting at 0
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_route_id(id: &RouteId) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.slug() == id.0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = RouterError;

    /// Accepts a sidebar label, a slug or a 1-based sidebar position
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(n) = wanted.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| RouterError::UnknownPage(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted) || p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RouterError::UnknownPage(s.to_string()))
    }
}

/// Route definition containing metadata and configuration
#[derive(Debug, Clone)]
pub struct Route {
    /// Unique identifier for this route
    pub id: RouteId,
    /// Human-readable name for this route
    pub name: String,
    /// Optional description of what this route displays
    pub description: Option<String>,
    /// Whether this route is the default route
    pub is_default: bool,
}

impl Route {
    /// Create a new route with the given ID and name
    pub fn new(id: impl Into<RouteId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            is_default: false,
        }
    }

    pub fn for_page(page: Page) -> Self {
        Self::new(page, page.label())
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parsing() {
        assert_eq!("Home".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("quality & safety".parse::<Page>().unwrap(), Page::QualitySafety);
        assert_eq!("capacity-planning".parse::<Page>().unwrap(), Page::CapacityPlanning);
        assert_eq!("2".parse::<Page>().unwrap(), Page::PatientPredictions);
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        for bad in ["Billing", "", "0", "5"] {
            let err = bad.parse::<Page>().unwrap_err();
            assert_eq!(err, RouterError::UnknownPage(bad.to_string()));
        }
    }

    #[test]
    fn test_route_id_traits() {
        let route_id = RouteId::from(Page::QualitySafety);

        assert_eq!(format!("{}", route_id), "quality-safety");

        let s: &str = route_id.as_ref();
        assert_eq!(s, "quality-safety");

        let s: &str = route_id.borrow();
        assert_eq!(s, "quality-safety");

        assert_eq!(Page::from_route_id(&route_id), Some(Page::QualitySafety));
        assert_eq!(Page::from_route_id(&RouteId::from("billing")), None);
    }

    #[test]
    fn test_page_order() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            ["Home", "Patient Predictions", "Capacity Planning", "Quality & Safety"]
        );
        assert_eq!(Page::CapacityPlanning.index(), 2);
    }
}
