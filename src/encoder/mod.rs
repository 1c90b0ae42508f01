//! Staffing rules as CNF.
//!
//! For every route and tier exactly one candidate driver is chosen, and every
//! driver is chosen for at most one (route, tier) slot across the whole plan.
//! Qualification is not encoded at all: the [`VariableIndexer`] only hands out
//! variables for qualified propositions.

pub mod at_most_one;

use crate::{config::AtMostOne, Formula, Instance, Literal, Tier, VariableIndexer};

pub struct Encoder<'a> {
    indexer: &'a VariableIndexer,
    at_most_one: AtMostOne,
}

impl<'a> Encoder<'a> {
    pub fn new(indexer: &'a VariableIndexer, at_most_one: AtMostOne) -> Self {
        Self {
            indexer,
            at_most_one,
        }
    }

    pub fn encode(&self, instance: &Instance) -> Formula {
        let mut formula = Formula::new(self.indexer.len());

        for route in instance.routes() {
            for &tier in Tier::ALL.iter() {
                let candidates = self.indexer.candidates(route.id, tier);
                if candidates.is_empty() {
                    log::debug!("nobody can staff route {} at tier {}", route.id, tier);
                }

                // At least one; empty when there is no candidate
                formula.add_clause(
                    candidates
                        .iter()
                        .copied()
                        .map(Literal::positive)
                        .collect::<Vec<_>>(),
                );
                at_most_one::encode(&mut formula, candidates, self.at_most_one);
            }
        }

        for driver in instance.drivers() {
            let vars = self.indexer.driver_variables(driver.id).collect::<Vec<_>>();
            log::trace!("driver {} spans {} variables", driver.id, vars.len());
            at_most_one::encode(&mut formula, &vars, self.at_most_one);
        }

        log::debug!(
            "encoded {} clauses over {} variables ({} auxiliary)",
            formula.num_clauses(),
            formula.num_variables(),
            formula.num_variables() - self.indexer.len()
        );
        formula
    }
}

#[cfg(test)]
use crate::{config::Qualification, Clause, Driver, Route};

#[cfg(test)]
fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

#[cfg(test)]
fn clause(lits: Vec<i32>) -> Clause {
    Clause::new(lits.into_iter().map(Literal::from))
}

#[test]
fn pairwise_clauses_for_single_route() {
    // Two exact-tier-1 drivers and one tier-2 driver on one route
    let instance = Instance::new(
        vec![
            Driver::new(1, "A", tier(1), vec![1]),
            Driver::new(2, "B", tier(1), vec![1]),
            Driver::new(3, "C", tier(2), vec![1]),
        ],
        vec![Route::new(1, "x", "y")],
    )
    .unwrap();
    let indexer = VariableIndexer::build(&instance, Qualification::AtLeast);
    // A:1 -> t1, B:2 -> t1, C:3 -> t1, C:4 -> t2
    let formula = Encoder::new(&indexer, AtMostOne::Pairwise).encode(&instance);

    let expected = vec![
        // tier 1
        clause(vec![1, 2, 3]),
        clause(vec![-1, -2]),
        clause(vec![-1, -3]),
        clause(vec![-2, -3]),
        // tier 2
        clause(vec![4]),
        // tiers 3 and 4: nobody
        clause(vec![]),
        clause(vec![]),
        // C at most one slot
        clause(vec![-3, -4]),
    ];
    assert_eq!(formula.clauses(), expected.as_slice());
    assert_eq!(formula.num_variables(), 4);
}

#[test]
fn driver_exclusion_spans_routes() {
    let instance = Instance::new(
        vec![Driver::new(1, "A", tier(1), vec![1, 2])],
        vec![Route::new(1, "x", "y"), Route::new(2, "y", "z")],
    )
    .unwrap();
    let indexer = VariableIndexer::build(&instance, Qualification::AtLeast);
    let formula = Encoder::new(&indexer, AtMostOne::Pairwise).encode(&instance);
    assert_eq!(formula.clauses().last(), Some(&clause(vec![-1, -2])));
}

#[test]
fn encoding_is_deterministic() {
    let instance = Instance::new(
        vec![
            Driver::new(4, "A", tier(4), vec![1, 2]),
            Driver::new(2, "B", tier(3), vec![2]),
        ],
        vec![Route::new(1, "x", "y"), Route::new(2, "y", "z")],
    )
    .unwrap();
    let encode = || {
        let indexer = VariableIndexer::build(&instance, Qualification::AtLeast);
        Encoder::new(&indexer, AtMostOne::Sequential).encode(&instance)
    };
    assert_eq!(encode(), encode());
}
