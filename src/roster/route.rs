use serde::{Deserialize, Serialize};

pub type RouteId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub start: String,
    pub end: String,
}

impl Route {
    pub fn new(id: RouteId, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id,
            start: start.into(),
            end: end.into(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Route {} ({} – {})", self.id, self.start, self.end)
    }
}
