use crate::{DriverId, RouteId, Tier};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub tier: Tier,
    pub driver: DriverId,
}

/// The four drivers of one route, one per tier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staffing {
    drivers: [DriverId; Tier::COUNT],
}

impl Staffing {
    pub fn new(drivers: [DriverId; Tier::COUNT]) -> Self {
        Self { drivers }
    }

    pub fn driver(&self, tier: Tier) -> DriverId {
        self.drivers[tier.index()]
    }

    /// Slots from tier 1 up to tier 4
    pub fn slots<'a>(&'a self) -> impl Iterator<Item = Slot> + DoubleEndedIterator + 'a {
        Tier::ALL.iter().map(move |&tier| Slot {
            tier,
            driver: self.driver(tier),
        })
    }
}

impl Serialize for Staffing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.slots())
    }
}

/// A complete staffing plan: every route of the instance, fully staffed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    routes: BTreeMap<RouteId, Staffing>,
}

impl Assignment {
    pub(crate) fn insert(&mut self, route: RouteId, staffing: Staffing) {
        self.routes.insert(route, staffing);
    }

    pub fn route(&self, route: RouteId) -> Option<&Staffing> {
        self.routes.get(&route)
    }

    /// Routes in ascending id order
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (RouteId, &'a Staffing)> + 'a {
        self.routes.iter().map(|(&route, staffing)| (route, staffing))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Where a driver ended up, if anywhere
    pub fn slot_of(&self, driver: DriverId) -> Option<(RouteId, Tier)> {
        self.iter().find_map(|(route, staffing)| {
            staffing
                .slots()
                .find(|slot| slot.driver == driver)
                .map(|slot| (route, slot.tier))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "assignment", rename_all = "snake_case")]
pub enum Plan {
    Staffed(Assignment),
    Infeasible,
}

impl Plan {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Plan::Staffed(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Plan::Staffed(assignment) => Some(assignment),
            Plan::Infeasible => None,
        }
    }
}

#[test]
fn serializes_plan() {
    let mut assignment = Assignment::default();
    assignment.insert(2, Staffing::new([5, 6, 7, 8]));
    let plan = Plan::Staffed(assignment);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["status"], "staffed");
    assert_eq!(json["assignment"]["2"][0]["tier"], 1);
    assert_eq!(json["assignment"]["2"][3]["driver"], 8);

    let json = serde_json::to_value(&Plan::Infeasible).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "infeasible" }));
}

#[test]
fn finds_driver_slot() {
    let mut assignment = Assignment::default();
    assignment.insert(1, Staffing::new([1, 2, 3, 4]));
    assignment.insert(3, Staffing::new([9, 8, 7, 6]));
    assert_eq!(assignment.slot_of(8), Some((3, Tier::ALL[1])));
    assert_eq!(assignment.slot_of(5), None);
    assert_eq!(
        assignment.route(1).unwrap().slots().rev().next(),
        Some(Slot {
            tier: Tier::HIGHEST,
            driver: 4
        })
    );
}
