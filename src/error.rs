use crate::{backend::BackendError, decoder::ConsistencyError, DriverId, RouteId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize the plan: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("driver id {0} appears more than once")]
    DuplicateDriver(DriverId),
    #[error("route id {0} appears more than once")]
    DuplicateRoute(RouteId),
    #[error("driver {driver} lists route {route}, which does not exist")]
    UnknownRoute { driver: DriverId, route: RouteId },
    #[error("SAT backend failed: {0}")]
    Backend(#[from] BackendError),
    #[error("internal consistency fault: {0}")]
    Consistency(#[from] ConsistencyError),
}

#[test]
fn serialization_failures_are_not_read_errors() {
    let source = serde_json::from_str::<u8>("x").unwrap_err();
    let error = Error::Serialize(source);
    assert!(error.to_string().starts_with("failed to serialize the plan: "));
    assert!(std::error::Error::source(&error).is_some());
}
