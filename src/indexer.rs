use crate::{config::Qualification, DriverId, Instance, RouteId, Tier, Variable};
use std::{collections::HashMap, ops::Range};

/// "Driver `driver` staffs route `route` at tier `tier`"
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Proposition {
    pub driver: DriverId,
    pub route: RouteId,
    pub tier: Tier,
}

/// Bijection between qualified propositions and the variables `1..=len()`.
///
/// Only propositions where the driver knows the route and qualifies for the
/// tier get a variable, so the encoder can never mention a disqualified
/// assignment. Numbering walks drivers in input order, then each driver's
/// routes ascending, then tiers ascending; a driver's variables are therefore
/// contiguous.
#[derive(Clone, Debug)]
pub struct VariableIndexer {
    propositions: Vec<Proposition>,
    variables: HashMap<Proposition, Variable>,
    candidates: HashMap<(RouteId, Tier), Vec<Variable>>,
    by_driver: HashMap<DriverId, Range<Variable>>,
}

impl VariableIndexer {
    pub fn build(instance: &Instance, qualification: Qualification) -> Self {
        let mut indexer = Self {
            propositions: Vec::new(),
            variables: HashMap::new(),
            candidates: HashMap::new(),
            by_driver: HashMap::with_capacity(instance.drivers().len()),
        };

        for driver in instance.drivers() {
            let first = indexer.propositions.len() + 1;
            for &route in driver.routes.iter() {
                for &tier in Tier::ALL.iter() {
                    if qualification.qualifies(driver.exp, tier) {
                        indexer.insert(Proposition {
                            driver: driver.id,
                            route,
                            tier,
                        });
                    }
                }
            }
            let end = indexer.propositions.len() + 1;
            indexer.by_driver.insert(driver.id, first..end);
        }

        log::debug!(
            "indexed {} propositions over {} drivers",
            indexer.len(),
            instance.drivers().len()
        );
        indexer
    }

    fn insert(&mut self, proposition: Proposition) {
        self.propositions.push(proposition);
        let var = self.propositions.len();
        let previous = self.variables.insert(proposition, var);
        debug_assert!(previous.is_none(), "{:?} indexed twice", proposition);
        self.candidates
            .entry((proposition.route, proposition.tier))
            .or_insert_with(Vec::new)
            .push(var);
    }

    /// Number of proposition variables; auxiliary variables start above this
    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    /// `None` when the driver does not know the route or is not qualified for the tier
    pub fn id_of(&self, driver: DriverId, route: RouteId, tier: Tier) -> Option<Variable> {
        self.variables
            .get(&Proposition {
                driver,
                route,
                tier,
            })
            .copied()
    }

    /// `None` for variables outside `1..=len()`, i.e. auxiliary ones
    pub fn triple_of(&self, var: Variable) -> Option<Proposition> {
        var.checked_sub(1)
            .and_then(|idx| self.propositions.get(idx))
            .copied()
    }

    /// Variables of the drivers who could fill the slot, in driver input order
    pub fn candidates(&self, route: RouteId, tier: Tier) -> &[Variable] {
        self.candidates
            .get(&(route, tier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every variable that places this driver somewhere
    pub fn driver_variables(&self, driver: DriverId) -> Range<Variable> {
        self.by_driver.get(&driver).cloned().unwrap_or(0..0)
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Variable, Proposition)> + 'a {
        self.propositions
            .iter()
            .enumerate()
            .map(|(idx, proposition)| (idx + 1, *proposition))
    }
}

#[cfg(test)]
use crate::{Driver, Route};

#[cfg(test)]
fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

#[cfg(test)]
fn instance() -> Instance {
    Instance::new(
        vec![
            Driver::new(1, "Ann", tier(2), vec![1, 2]),
            Driver::new(2, "Bob", tier(1), vec![2]),
            Driver::new(3, "Cas", tier(4), vec![]),
        ],
        vec![Route::new(1, "a", "b"), Route::new(2, "c", "d")],
    )
    .unwrap()
}

#[test]
fn dense_numbering() {
    let indexer = VariableIndexer::build(&instance(), Qualification::AtLeast);
    // Ann: 2 routes x tiers 1-2, Bob: 1 route x tier 1
    assert_eq!(indexer.len(), 5);
    assert_eq!(
        indexer.iter().map(|(var, _)| var).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(indexer.id_of(1, 1, tier(1)), Some(1));
    assert_eq!(indexer.id_of(1, 2, tier(2)), Some(4));
    assert_eq!(indexer.id_of(2, 2, tier(1)), Some(5));
}

#[test]
fn disqualified_propositions_have_no_variable() {
    let indexer = VariableIndexer::build(&instance(), Qualification::AtLeast);
    assert_eq!(indexer.id_of(1, 1, tier(3)), None);
    assert_eq!(indexer.id_of(2, 1, tier(1)), None);
    assert_eq!(indexer.id_of(3, 1, tier(4)), None);
    assert_eq!(indexer.id_of(9, 1, tier(1)), None);
}

#[test]
fn exact_policy_gives_one_tier_per_route() {
    let indexer = VariableIndexer::build(&instance(), Qualification::Exact);
    assert_eq!(indexer.len(), 3);
    assert_eq!(indexer.id_of(1, 1, tier(1)), None);
    assert!(indexer.id_of(1, 1, tier(2)).is_some());
}

#[test]
fn inverse_lookup() {
    let indexer = VariableIndexer::build(&instance(), Qualification::AtLeast);
    for (var, p) in indexer.iter() {
        assert_eq!(indexer.id_of(p.driver, p.route, p.tier), Some(var));
        assert_eq!(indexer.triple_of(var), Some(p));
    }
    assert_eq!(indexer.triple_of(0), None);
    assert_eq!(indexer.triple_of(6), None);
}

#[test]
fn slot_candidates_and_driver_ranges() {
    let indexer = VariableIndexer::build(&instance(), Qualification::AtLeast);
    assert_eq!(indexer.candidates(2, tier(1)), &[3, 5]);
    assert_eq!(indexer.candidates(2, tier(2)), &[4]);
    assert!(indexer.candidates(1, tier(4)).is_empty());
    assert_eq!(indexer.driver_variables(1), 1..5);
    assert_eq!(indexer.driver_variables(2), 5..6);
    assert!(indexer.driver_variables(3).is_empty());
    assert!(indexer.driver_variables(42).is_empty());
}
