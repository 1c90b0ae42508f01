//! The boundary to the SAT engine.
//!
//! A [`Backend`] gets one formula and gives back one verdict. It does not
//! retry, relax or repair anything: a malformed instance is the encoder's bug
//! and surfaces as a [`BackendError`].

use crate::{Formula, Model, Variable};
use splr::{Certificate, SolverError};
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Debug)]
pub enum Solution {
    Sat(Model),
    Unsat,
}

impl Solution {
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{engine} rejected the instance: {reason}")]
    Engine { engine: &'static str, reason: String },
    #[error("model literal {literal} is outside the declared {num_variables} variables")]
    OutOfRange { literal: i32, num_variables: Variable },
    #[error("model assigns variable {0} both ways")]
    Contradictory(Variable),
}

pub trait Backend {
    fn name(&self) -> &'static str;

    fn solve(&mut self, formula: &Formula) -> Result<Solution, BackendError>;
}

/// The `splr` CDCL solver, run with its default configuration
#[derive(Debug, Default)]
pub struct Splr;

impl Backend for Splr {
    fn name(&self) -> &'static str {
        "splr"
    }

    fn solve(&mut self, formula: &Formula) -> Result<Solution, BackendError> {
        let num_variables = formula.num_variables();

        // Nothing to decide; splr wants at least one clause to size itself
        if formula.num_clauses() == 0 {
            return Ok(Solution::Sat(Model::all_false(num_variables)));
        }
        // The empty clause is false under every assignment
        if formula.contains_empty_clause() {
            return Ok(Solution::Unsat);
        }

        match Certificate::try_from(formula.to_dimacs()) {
            Ok(Certificate::SAT(literals)) => {
                Model::from_dimacs(num_variables, literals).map(Solution::Sat)
            }
            Ok(Certificate::UNSAT) => Ok(Solution::Unsat),
            Err(SolverError::EmptyClause) | Err(SolverError::RootLevelConflict(..)) => {
                Ok(Solution::Unsat)
            }
            Err(e) => Err(BackendError::Engine {
                engine: self.name(),
                reason: format!("{:?}", e),
            }),
        }
    }
}

#[cfg(test)]
use crate::Evaluate;

#[test]
fn splr_finds_model() -> Result<(), BackendError> {
    let formula = Formula::from(vec![vec![1, 2], vec![-1, 3], vec![1, -3], vec![-1, 2]]);
    match Splr.solve(&formula)? {
        Solution::Sat(model) => assert!(formula.evaluate(&model)),
        Solution::Unsat => panic!("formula is satisfiable"),
    }
    Ok(())
}

#[test]
fn splr_proves_unsat() -> Result<(), BackendError> {
    let formula = Formula::from(vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]);
    assert!(!Splr.solve(&formula)?.is_sat());
    Ok(())
}

#[test]
fn empty_clause_is_unsat() -> Result<(), BackendError> {
    let formula = Formula::from(vec![vec![1, 2], vec![]]);
    assert!(!Splr.solve(&formula)?.is_sat());
    Ok(())
}

#[test]
fn no_clauses_is_sat() -> Result<(), BackendError> {
    let formula = Formula::new(3);
    match Splr.solve(&formula)? {
        Solution::Sat(model) => assert_eq!(model.true_variables().count(), 0),
        Solution::Unsat => panic!("empty formula is satisfiable"),
    }
    Ok(())
}
