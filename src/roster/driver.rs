use super::{RouteId, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type DriverId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    /// Experience level
    pub exp: Tier,
    /// Routes this driver knows and may be put on
    pub routes: BTreeSet<RouteId>,
}

impl Driver {
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        exp: Tier,
        routes: impl IntoIterator<Item = RouteId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            exp,
            routes: routes.into_iter().collect(),
        }
    }

    pub fn knows(&self, route: RouteId) -> bool {
        self.routes.contains(&route)
    }
}

#[test]
fn parses_record() {
    let driver: Driver =
        serde_json::from_str(r#"{"id": 3, "name": "Ada", "exp": 2, "routes": [4, 1, 4]}"#)
            .unwrap();
    assert_eq!(driver, Driver::new(3, "Ada", Tier::ALL[1], vec![1, 4]));
    assert!(driver.knows(4));
    assert!(!driver.knows(2));
}

#[test]
fn rejects_out_of_range_experience() {
    let parsed = serde_json::from_str::<Driver>(r#"{"id": 1, "name": "X", "exp": 5, "routes": []}"#);
    assert!(parsed.is_err());
}
