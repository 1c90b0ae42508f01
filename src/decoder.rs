use crate::{
    assignment::{Assignment, Staffing},
    DriverId, Instance, Model, RouteId, Tier, VariableIndexer,
};
use std::collections::{hash_map::Entry, HashMap};
use thiserror::Error;

/// A satisfying model that does not describe a valid plan.
///
/// The clauses are supposed to rule all of these out, so any of them means the
/// encoding and the engine disagree; none is ever patched over.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("route {route} has no driver at tier {tier}")]
    Unfilled { route: RouteId, tier: Tier },
    #[error("route {route} tier {tier} is filled by both driver {first} and driver {second}")]
    DoubleFilled {
        route: RouteId,
        tier: Tier,
        first: DriverId,
        second: DriverId,
    },
    #[error("driver {driver} is placed on route {} tier {} and on route {} tier {}", .first.0, .first.1, .second.0, .second.1)]
    DriverReused {
        driver: DriverId,
        first: (RouteId, Tier),
        second: (RouteId, Tier),
    },
    #[error("driver {driver} is placed on route {route}, which is not in the instance")]
    UnknownRoute { driver: DriverId, route: RouteId },
    #[error("the model violates clause `{clause}`")]
    Unsatisfied { clause: String },
}

/// Reads the staffing plan out of a satisfying model.
///
/// Auxiliary variables are ignored; every true proposition fills one slot.
pub fn decode(
    model: &Model,
    indexer: &VariableIndexer,
    instance: &Instance,
) -> Result<Assignment, ConsistencyError> {
    let mut slots: HashMap<RouteId, [Option<DriverId>; Tier::COUNT]> = instance
        .routes()
        .iter()
        .map(|route| (route.id, [None; Tier::COUNT]))
        .collect();
    let mut placed: HashMap<DriverId, (RouteId, Tier)> = HashMap::new();

    for proposition in model
        .true_variables()
        .filter_map(|var| indexer.triple_of(var))
    {
        let (driver, route, tier) = (proposition.driver, proposition.route, proposition.tier);

        let slot = slots
            .get_mut(&route)
            .map(|tiers| &mut tiers[tier.index()])
            .ok_or(ConsistencyError::UnknownRoute { driver, route })?;
        if let Some(first) = *slot {
            return Err(ConsistencyError::DoubleFilled {
                route,
                tier,
                first,
                second: driver,
            });
        }
        *slot = Some(driver);

        match placed.entry(driver) {
            Entry::Occupied(entry) => {
                return Err(ConsistencyError::DriverReused {
                    driver,
                    first: *entry.get(),
                    second: (route, tier),
                })
            }
            Entry::Vacant(entry) => {
                entry.insert((route, tier));
            }
        }
    }

    let mut assignment = Assignment::default();
    for route in instance.routes() {
        let tiers = slots[&route.id];
        let mut drivers = [0; Tier::COUNT];
        for &tier in Tier::ALL.iter() {
            drivers[tier.index()] = tiers[tier.index()].ok_or(ConsistencyError::Unfilled {
                route: route.id,
                tier,
            })?;
        }
        assignment.insert(route.id, Staffing::new(drivers));
    }

    log::debug!(
        "decoded {} routes with {} drivers placed",
        assignment.len(),
        placed.len()
    );
    Ok(assignment)
}

#[cfg(test)]
use crate::{config::Qualification, Driver, Route};

#[cfg(test)]
fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

/// Route 1 with drivers 1..=4 at exp 1..=4, plus a spare exp-4 driver 5
#[cfg(test)]
fn setup() -> (Instance, VariableIndexer) {
    let mut drivers = (1..=4)
        .map(|id| Driver::new(id, format!("D{}", id), tier(id as u8), vec![1]))
        .collect::<Vec<_>>();
    drivers.push(Driver::new(5, "Spare", tier(4), vec![1]));
    let instance = Instance::new(drivers, vec![Route::new(1, "a", "b")]).unwrap();
    let indexer = VariableIndexer::build(&instance, Qualification::Exact);
    (instance, indexer)
}

#[cfg(test)]
fn model(indexer: &VariableIndexer, truths: &[(DriverId, u8)]) -> Model {
    let lits = truths
        .iter()
        .map(|&(driver, level)| indexer.id_of(driver, 1, tier(level)).unwrap() as i32)
        .collect::<Vec<_>>();
    Model::from_dimacs(indexer.len(), lits).unwrap()
}

#[test]
fn decodes_full_staffing() {
    let (instance, indexer) = setup();
    let model = model(&indexer, &[(1, 1), (2, 2), (3, 3), (5, 4)]);
    let assignment = decode(&model, &indexer, &instance).unwrap();
    assert_eq!(assignment.route(1), Some(&Staffing::new([1, 2, 3, 5])));
}

#[test]
fn reports_unfilled_tier() {
    let (instance, indexer) = setup();
    let model = model(&indexer, &[(1, 1), (2, 2), (3, 3)]);
    assert_eq!(
        decode(&model, &indexer, &instance),
        Err(ConsistencyError::Unfilled {
            route: 1,
            tier: tier(4)
        })
    );
}

#[test]
fn reports_double_filled_tier() {
    let (instance, indexer) = setup();
    let model = model(&indexer, &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 4)]);
    assert_eq!(
        decode(&model, &indexer, &instance),
        Err(ConsistencyError::DoubleFilled {
            route: 1,
            tier: tier(4),
            first: 4,
            second: 5
        })
    );
}

#[test]
fn reports_reused_driver() {
    let instance = Instance::new(
        vec![Driver::new(1, "Ann", tier(4), vec![1, 2])],
        vec![Route::new(1, "a", "b"), Route::new(2, "b", "c")],
    )
    .unwrap();
    let indexer = VariableIndexer::build(&instance, Qualification::AtLeast);
    let lits = vec![
        indexer.id_of(1, 1, tier(4)).unwrap() as i32,
        indexer.id_of(1, 2, tier(1)).unwrap() as i32,
    ];
    let model = Model::from_dimacs(indexer.len(), lits).unwrap();
    assert_eq!(
        decode(&model, &indexer, &instance),
        Err(ConsistencyError::DriverReused {
            driver: 1,
            first: (1, tier(4)),
            second: (2, tier(1))
        })
    );
}

#[test]
fn ignores_auxiliary_variables() {
    let (instance, indexer) = setup();
    let mut lits = [(1, 1), (2, 2), (3, 3), (4, 4)]
        .iter()
        .map(|&(driver, level)| indexer.id_of(driver, 1, tier(level)).unwrap() as i32)
        .collect::<Vec<_>>();
    let aux = indexer.len() as i32 + 1;
    lits.push(aux);
    let model = Model::from_dimacs(indexer.len() + 1, lits).unwrap();
    assert!(decode(&model, &indexer, &instance).is_ok());
}
