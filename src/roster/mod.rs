//! Drivers and routes as handed to the encoder.
//!
//! An [`Instance`] is validated once on construction: ids are unique within
//! each collection and every route a driver lists exists. Everything
//! downstream relies on that and does not check again.

pub mod driver;
pub mod route;
pub mod tier;

pub use driver::{Driver, DriverId};
pub use route::{Route, RouteId};
pub use tier::{InvalidTier, Tier};

use crate::Error;
use serde::de::DeserializeOwned;
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

#[derive(Clone, Debug)]
pub struct Instance {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    driver_positions: HashMap<DriverId, usize>,
    route_positions: HashMap<RouteId, usize>,
}

impl Instance {
    pub fn new(drivers: Vec<Driver>, routes: Vec<Route>) -> Result<Self, Error> {
        let mut route_positions = HashMap::with_capacity(routes.len());
        for (position, route) in routes.iter().enumerate() {
            if route_positions.insert(route.id, position).is_some() {
                return Err(Error::DuplicateRoute(route.id));
            }
        }

        let mut driver_positions = HashMap::with_capacity(drivers.len());
        for (position, driver) in drivers.iter().enumerate() {
            if driver_positions.insert(driver.id, position).is_some() {
                return Err(Error::DuplicateDriver(driver.id));
            }
            if let Some(route) = driver
                .routes
                .iter()
                .find(|route| !route_positions.contains_key(route))
            {
                return Err(Error::UnknownRoute {
                    driver: driver.id,
                    route: *route,
                });
            }
        }

        Ok(Self {
            drivers,
            routes,
            driver_positions,
            route_positions,
        })
    }

    /// Reads a JSON array of drivers and a JSON array of routes
    pub fn load(drivers: impl AsRef<Path>, routes: impl AsRef<Path>) -> Result<Self, Error> {
        let drivers = read_json(drivers.as_ref())?;
        let routes = read_json(routes.as_ref())?;
        let instance = Self::new(drivers, routes)?;
        log::debug!(
            "loaded {} drivers and {} routes",
            instance.drivers.len(),
            instance.routes.len()
        );
        Ok(instance)
    }

    pub fn from_json_str(drivers: &str, routes: &str) -> Result<Self, Error> {
        let drivers = serde_json::from_str(drivers).map_err(|source| Error::Json {
            path: "<drivers>".into(),
            source,
        })?;
        let routes = serde_json::from_str(routes).map_err(|source| Error::Json {
            path: "<routes>".into(),
            source,
        })?;
        Self::new(drivers, routes)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.driver_positions.get(&id).map(|&pos| &self.drivers[pos])
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.route_positions.get(&id).map(|&pos| &self.routes[pos])
    }

    /// Drivers who know the route, in input order
    pub fn drivers_of<'a>(&'a self, route: RouteId) -> impl Iterator<Item = &'a Driver> + 'a {
        self.drivers.iter().filter(move |driver| driver.knows(route))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

#[test]
fn lookups() -> Result<(), Error> {
    let instance = Instance::new(
        vec![
            Driver::new(10, "A", tier(1), vec![1]),
            Driver::new(11, "B", tier(4), vec![1, 2]),
        ],
        vec![Route::new(1, "Delft", "Leiden"), Route::new(2, "Gouda", "Breda")],
    )?;

    assert_eq!(instance.driver(11).map(|d| d.name.as_str()), Some("B"));
    assert_eq!(instance.route(2).map(|r| r.end.as_str()), Some("Breda"));
    assert!(instance.route(3).is_none());
    assert_eq!(
        instance.drivers_of(1).map(|d| d.id).collect::<Vec<_>>(),
        vec![10, 11]
    );
    assert_eq!(
        instance.drivers_of(2).map(|d| d.id).collect::<Vec<_>>(),
        vec![11]
    );
    Ok(())
}

#[test]
fn rejects_duplicate_ids() {
    let routes = vec![Route::new(1, "a", "b")];
    let result = Instance::new(
        vec![
            Driver::new(1, "A", tier(1), vec![1]),
            Driver::new(1, "B", tier(2), vec![1]),
        ],
        routes.clone(),
    );
    assert!(matches!(result, Err(Error::DuplicateDriver(1))));

    let result = Instance::new(Vec::new(), vec![routes[0].clone(), routes[0].clone()]);
    assert!(matches!(result, Err(Error::DuplicateRoute(1))));
}

#[test]
fn rejects_unknown_routes() {
    let result = Instance::new(
        vec![Driver::new(7, "A", tier(3), vec![1, 9])],
        vec![Route::new(1, "a", "b")],
    );
    assert!(matches!(
        result,
        Err(Error::UnknownRoute { driver: 7, route: 9 })
    ));
}

#[test]
fn parses_json() -> Result<(), Error> {
    let instance = Instance::from_json_str(
        r#"[{"id": 1, "name": "Ada", "exp": 4, "routes": [1]}]"#,
        r#"[{"id": 1, "start": "Zwolle", "end": "Assen"}]"#,
    )?;
    assert_eq!(instance.drivers().len(), 1);
    assert_eq!(instance.routes()[0].start, "Zwolle");

    let bad = Instance::from_json_str(
        r#"[{"id": 1, "name": "Ada", "exp": 0, "routes": [1]}]"#,
        r#"[]"#,
    );
    assert!(matches!(bad, Err(Error::Json { .. })));
    Ok(())
}
