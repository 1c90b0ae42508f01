use crate::{
    formula::{Clause, Formula, Literal},
    Model,
};

pub trait Evaluate {
    fn evaluate(&self, model: &Model) -> bool;
}

impl Evaluate for Literal {
    fn evaluate(&self, model: &Model) -> bool {
        model.satisfies(*self)
    }
}

impl Evaluate for Clause {
    fn evaluate(&self, model: &Model) -> bool {
        self.literals().any(|literal| literal.evaluate(model))
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, model: &Model) -> bool {
        self.clauses().iter().all(|clause| clause.evaluate(model))
    }
}

impl Formula {
    /// The first clause the model leaves unsatisfied, if any
    pub fn first_violated(&self, model: &Model) -> Option<&Clause> {
        self.clauses().iter().find(|clause| !clause.evaluate(model))
    }
}

#[test]
fn evaluates_against_model() {
    let formula = Formula::from(vec![vec![1, 2], vec![-1, 3]]);
    let good = Model::from_dimacs(3, vec![1, -2, 3]).unwrap();
    let bad = Model::from_dimacs(3, vec![1, -2, -3]).unwrap();

    assert!(formula.evaluate(&good));
    assert!(!formula.evaluate(&bad));
    assert_eq!(
        formula.first_violated(&bad).map(|clause| clause.to_dimacs()),
        Some(vec![-1, 3])
    );
}

#[test]
fn empty_clause_is_never_satisfied() {
    let formula = Formula::from(vec![Vec::<i32>::new()]);
    assert!(!formula.evaluate(&Model::all_false(0)));
}
