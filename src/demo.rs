//! Random instances for benchmarks and experiments.

use crate::{Driver, DriverId, Error, Instance, Route, RouteId, Tier};
use rand::{seq::SliceRandom, Rng};

const NAMES: &[&str] = &[
    "Anouk", "Bram", "Daan", "Eva", "Fenna", "Joris", "Lotte", "Milan", "Noor", "Ruben", "Sanne",
    "Thijs",
];
const TOWNS: &[&str] = &[
    "Amsterdam", "Utrecht", "Rotterdam", "Den Haag", "Haarlem", "Leiden", "Delft", "Gouda",
    "Arnhem", "Zwolle",
];

#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub drivers: usize,
    pub routes: usize,
    /// Chance that a driver knows any given route
    pub density: f64,
}

fn routes(rng: &mut impl Rng, count: usize) -> Vec<Route> {
    (1..=count as RouteId)
        .map(|id| {
            let mut towns = TOWNS.choose_multiple(rng, 2);
            let start = towns.next().copied().unwrap_or("Depot");
            let end = towns.next().copied().unwrap_or("Depot");
            Route::new(id, start, end)
        })
        .collect()
}

fn driver(rng: &mut impl Rng, id: DriverId, exp: Tier, routes: Vec<RouteId>) -> Driver {
    let name = NAMES.choose(rng).copied().unwrap_or("Driver");
    Driver::new(id, format!("{} {}", name, id), exp, routes)
}

/// Drivers with uniform experience and independently drawn route sets;
/// may well be infeasible
pub fn random(rng: &mut impl Rng, shape: Shape) -> Result<Instance, Error> {
    let routes = routes(rng, shape.routes);
    let drivers = (1..=shape.drivers as DriverId)
        .map(|id| {
            let exp = Tier::ALL[rng.gen_range(0, Tier::COUNT)];
            let known = routes
                .iter()
                .map(|route| route.id)
                .filter(|_| rng.gen_bool(shape.density))
                .collect();
            driver(rng, id, exp, known)
        })
        .collect();
    Instance::new(drivers, routes)
}

/// Like [`random`], but every route first gets four dedicated drivers, one
/// per tier, so the instance is always staffable. `shape.drivers` counts only
/// the extra drivers.
pub fn staffable(rng: &mut impl Rng, shape: Shape) -> Result<Instance, Error> {
    let mut instance = random(rng, shape)?;
    let mut drivers = instance.drivers().to_vec();
    let mut next_id = shape.drivers as DriverId + 1;
    for route in instance.routes().to_vec() {
        for &tier in Tier::ALL.iter() {
            drivers.push(driver(rng, next_id, tier, vec![route.id]));
            next_id += 1;
        }
    }
    drivers.shuffle(rng);
    instance = Instance::new(drivers, instance.routes().to_vec())?;
    Ok(instance)
}

#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn shapes() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(7);
    let shape = Shape {
        drivers: 12,
        routes: 3,
        density: 0.5,
    };

    let instance = random(&mut rng, shape)?;
    assert_eq!(instance.drivers().len(), 12);
    assert_eq!(instance.routes().len(), 3);

    let instance = staffable(&mut rng, shape)?;
    assert_eq!(instance.drivers().len(), 12 + 3 * 4);
    for route in instance.routes() {
        for &tier in Tier::ALL.iter() {
            assert!(instance
                .drivers_of(route.id)
                .any(|driver| driver.exp == tier && driver.routes.len() == 1));
        }
    }
    Ok(())
}
