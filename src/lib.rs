//! Staffing routes with tiered drivers through a SAT encoding.
//!
//! Every route needs one driver at each of four experience tiers, and no
//! driver may be used twice. [`VariableIndexer`] numbers the qualified
//! (driver, route, tier) propositions, [`Encoder`] writes the rules as CNF, a
//! [`Backend`] solves it, and [`decoder::decode`] turns the model back into an
//! [`Assignment`]. [`Planner`] runs the whole pipeline.

pub mod assignment;
pub mod backend;
pub mod config;
pub mod decoder;
pub mod demo;
pub mod encoder;
mod error;
mod evaluate;
pub mod formula;
mod indexer;
mod model;
pub mod planner;
pub mod report;
pub mod roster;
mod sign;

pub use assignment::{Assignment, Plan, Slot, Staffing};
pub use backend::{Backend, BackendError, Solution, Splr};
pub use config::{AtMostOne, Config, Qualification};
pub use decoder::ConsistencyError;
pub use encoder::Encoder;
pub use error::Error;
pub use evaluate::Evaluate;
pub use formula::{Clause, Formula, Literal};
pub use indexer::{Proposition, VariableIndexer};
pub use model::Model;
pub use planner::{Outcome, Planner, Stats};
pub use report::Report;
pub use roster::{Driver, DriverId, Instance, Route, RouteId, Tier};
pub use sign::Sign;

/// DIMACS variable number, starting at 1
pub type Variable = usize;
