use fietsat::*;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;
use std::collections::HashSet;

/// A small random instance: 1-3 routes, up to 10 drivers
#[derive(Clone, Debug)]
struct Roster(Instance);

impl Arbitrary for Roster {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let num_routes = g.gen_range(1, 4);
        let num_drivers = g.gen_range(0, 11);
        let routes = (1..=num_routes)
            .map(|id| Route::new(id, "a", "b"))
            .collect::<Vec<_>>();
        let drivers = (1..=num_drivers)
            .map(|id| {
                let exp = Tier::ALL[g.gen_range(0, Tier::COUNT)];
                let known = (1..=num_routes)
                    .filter(|_| g.gen_bool(0.7))
                    .collect::<Vec<_>>();
                Driver::new(id, format!("D{}", id), exp, known)
            })
            .collect();
        Roster(Instance::new(drivers, routes).unwrap())
    }
}

fn qualifications() -> [Qualification; 2] {
    [Qualification::AtLeast, Qualification::Exact]
}

fn plan(instance: &Instance, config: Config) -> Plan {
    Planner::new(config, Splr).plan(instance).unwrap().plan
}

#[quickcheck]
fn staffed_plans_are_valid(roster: Roster) -> bool {
    let instance = &roster.0;
    qualifications().iter().all(|&qualification| {
        let config = Config::default().with_qualification(qualification);
        let assignment = match plan(instance, config) {
            Plan::Staffed(assignment) => assignment,
            Plan::Infeasible => return true,
        };

        let mut used = HashSet::new();
        assignment.len() == instance.routes().len()
            && assignment.iter().all(|(route, staffing)| {
                staffing.slots().all(|slot| {
                    let driver = instance.driver(slot.driver).unwrap();
                    used.insert(slot.driver)
                        && driver.knows(route)
                        && qualification.qualifies(driver.exp, slot.tier)
                })
            })
    })
}

#[quickcheck]
fn empty_slot_means_infeasible(roster: Roster) -> bool {
    let instance = &roster.0;
    qualifications().iter().all(|&qualification| {
        let empty_slot = instance.routes().iter().any(|route| {
            Tier::ALL.iter().any(|&tier| {
                instance
                    .drivers_of(route.id)
                    .all(|driver| !qualification.qualifies(driver.exp, tier))
            })
        });
        let config = Config::default().with_qualification(qualification);
        !empty_slot || plan(instance, config) == Plan::Infeasible
    })
}

#[quickcheck]
fn indexing_round_trips(roster: Roster) -> bool {
    let instance = &roster.0;
    let indexer = VariableIndexer::build(instance, Qualification::AtLeast);
    let round_trips = indexer.iter().all(|(var, p)| {
        indexer.triple_of(var) == Some(p) && indexer.id_of(p.driver, p.route, p.tier) == Some(var)
    });
    round_trips
}

#[quickcheck]
fn encoding_is_deterministic(roster: Roster) -> bool {
    let instance = &roster.0;
    let planner = Planner::new(Config::default(), Splr);
    planner.encode(instance).1 == planner.encode(instance).1
}

#[quickcheck]
fn encodings_agree_on_feasibility(roster: Roster) -> bool {
    let instance = &roster.0;
    let feasible = |amo| plan(instance, Config::default().with_at_most_one(amo)).is_feasible();
    let pairwise = feasible(AtMostOne::Pairwise);
    pairwise == feasible(AtMostOne::Sequential) && pairwise == feasible(AtMostOne::Auto)
}

#[quickcheck]
fn exact_feasible_implies_at_least_feasible(roster: Roster) -> bool {
    let instance = &roster.0;
    let exact = plan(
        instance,
        Config::default().with_qualification(Qualification::Exact),
    );
    !exact.is_feasible() || plan(instance, Config::default()).is_feasible()
}
