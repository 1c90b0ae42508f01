use crate::{
    assignment::Plan,
    backend::{Backend, Solution},
    decoder::{self, ConsistencyError},
    encoder::Encoder,
    Config, Error, Evaluate, Formula, Instance, VariableIndexer,
};
use std::time::{Duration, Instant};

/// Sizes and timings of one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub propositions: usize,
    pub auxiliary: usize,
    pub clauses: usize,
    pub encode_time: Duration,
    pub solve_time: Duration,
}

#[derive(Debug)]
pub struct Outcome {
    pub plan: Plan,
    pub stats: Stats,
}

/// Runs index, encode, solve and decode for one instance.
pub struct Planner<B> {
    config: Config,
    backend: B,
}

impl<B: Backend> Planner<B> {
    pub fn new(config: Config, backend: B) -> Self {
        Self { config, backend }
    }

    /// Builds the indexer and the formula without solving
    pub fn encode(&self, instance: &Instance) -> (VariableIndexer, Formula) {
        let indexer = VariableIndexer::build(instance, self.config.qualification);
        let formula = Encoder::new(&indexer, self.config.at_most_one).encode(instance);
        (indexer, formula)
    }

    pub fn plan(&mut self, instance: &Instance) -> Result<Outcome, Error> {
        self.plan_with(instance, |_| Ok(()))
    }

    /// Like `plan`, but hands the encoded formula to `inspect` before solving.
    /// An error from `inspect` aborts the run.
    pub fn plan_with<F>(&mut self, instance: &Instance, inspect: F) -> Result<Outcome, Error>
    where
        F: FnOnce(&Formula) -> Result<(), Error>,
    {
        let start = Instant::now();
        let (indexer, formula) = self.encode(instance);
        let encode_time = start.elapsed();
        inspect(&formula)?;
        self.solve(instance, &indexer, &formula, encode_time)
    }

    /// Solves an already encoded instance; `formula` must come from `indexer`
    pub fn solve(
        &mut self,
        instance: &Instance,
        indexer: &VariableIndexer,
        formula: &Formula,
        encode_time: Duration,
    ) -> Result<Outcome, Error> {
        let start = Instant::now();
        let solution = self.backend.solve(formula)?;
        let solve_time = start.elapsed();

        log::info!(
            "{} answered {} in {}ms",
            self.backend.name(),
            if solution.is_sat() { "SAT" } else { "UNSAT" },
            solve_time.as_millis()
        );

        let plan = match solution {
            Solution::Unsat => Plan::Infeasible,
            Solution::Sat(model) => {
                if let Some(clause) = formula.first_violated(&model) {
                    return Err(ConsistencyError::Unsatisfied {
                        clause: clause.to_string(),
                    }
                    .into());
                }
                debug_assert!(formula.evaluate(&model));
                Plan::Staffed(decoder::decode(&model, indexer, instance)?)
            }
        };

        let stats = Stats {
            propositions: indexer.len(),
            auxiliary: formula.num_variables() - indexer.len(),
            clauses: formula.num_clauses(),
            encode_time,
            solve_time,
        };
        Ok(Outcome { plan, stats })
    }
}

#[cfg(test)]
use crate::{backend::BackendError, Driver, Model, Route, Tier};

/// Hands back a fixed answer regardless of the formula
#[cfg(test)]
struct Canned(Option<Vec<i32>>);

#[cfg(test)]
impl Backend for Canned {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn solve(&mut self, formula: &Formula) -> Result<Solution, BackendError> {
        match &self.0 {
            Some(lits) => Model::from_dimacs(formula.num_variables(), lits.clone())
                .map(Solution::Sat),
            None => Ok(Solution::Unsat),
        }
    }
}

#[cfg(test)]
fn instance() -> Instance {
    Instance::new(
        (1..=4)
            .map(|id| Driver::new(id, "", Tier::new(id as u8).unwrap(), vec![1]))
            .collect(),
        vec![Route::new(1, "a", "b")],
    )
    .unwrap()
}

#[test]
fn unsat_verdict_is_infeasible_plan() -> Result<(), Error> {
    let outcome = Planner::new(Config::default(), Canned(None)).plan(&instance())?;
    assert_eq!(outcome.plan, Plan::Infeasible);
    Ok(())
}

#[test]
fn rejects_model_violating_formula() {
    // Nobody staffed: every at-least-one clause is violated
    let result = Planner::new(Config::default(), Canned(Some(vec![]))).plan(&instance());
    assert!(matches!(
        result,
        Err(Error::Consistency(ConsistencyError::Unsatisfied { .. }))
    ));
}

#[test]
fn backend_errors_propagate() {
    let result = Planner::new(Config::default(), Canned(Some(vec![99]))).plan(&instance());
    assert!(matches!(
        result,
        Err(Error::Backend(BackendError::OutOfRange { literal: 99, .. }))
    ));
}

#[test]
fn inspects_formula_before_solving() -> Result<(), Error> {
    let mut seen = None;
    let outcome = Planner::new(Config::default(), crate::Splr).plan_with(&instance(), |formula| {
        seen = Some(formula.num_clauses());
        Ok(())
    })?;
    assert_eq!(seen, Some(outcome.stats.clauses));

    // A failing hook stops the run before the backend is asked
    let result = Planner::new(Config::default(), Canned(Some(vec![99]))).plan_with(
        &instance(),
        |_| Err(Error::DuplicateRoute(1)),
    );
    assert!(matches!(result, Err(Error::DuplicateRoute(1))));
    Ok(())
}

#[test]
fn stats_count_formula() -> Result<(), Error> {
    let instance = instance();
    let planner = Planner::new(Config::default(), crate::Splr);
    let (indexer, formula) = planner.encode(&instance);

    let mut planner = planner;
    let outcome = planner.solve(&instance, &indexer, &formula, Duration::default())?;
    assert!(outcome.plan.is_feasible());
    assert_eq!(outcome.stats.propositions, 10);
    assert_eq!(outcome.stats.auxiliary, 0);
    assert_eq!(outcome.stats.clauses, formula.num_clauses());
    Ok(())
}
