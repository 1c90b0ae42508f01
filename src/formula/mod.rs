pub mod clause;
pub mod literal;

pub use clause::Clause;
pub use literal::Literal;

use crate::Variable;
use std::io::{self, Write};

/// A CNF instance over the variables `1..=num_variables`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    num_variables: Variable,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(num_variables: Variable) -> Self {
        Self {
            num_variables,
            clauses: Vec::new(),
        }
    }

    pub fn num_variables(&self) -> Variable {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Allocates a fresh variable above every variable declared so far
    pub fn new_variable(&mut self) -> Variable {
        self.num_variables += 1;
        self.num_variables
    }

    pub fn add_clause(&mut self, literals: impl Into<Clause>) {
        let clause = literals.into();
        if let Some(max) = clause.max_variable() {
            self.num_variables = std::cmp::max(self.num_variables, max);
        }
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn contains_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.clauses.iter().map(Clause::to_dimacs).collect()
    }

    pub fn write_dimacs(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "p cnf {} {}", self.num_variables, self.clauses.len())?;
        for clause in self.clauses.iter() {
            writeln!(out, "{}", clause)?;
        }
        out.flush()
    }
}

impl From<Vec<Vec<Literal>>> for Formula {
    fn from(clauses: Vec<Vec<Literal>>) -> Self {
        let mut formula = Formula::default();
        for clause in clauses {
            formula.add_clause(clause);
        }
        formula
    }
}

impl From<Vec<Vec<i32>>> for Formula {
    fn from(clauses: Vec<Vec<i32>>) -> Self {
        clauses
            .into_iter()
            .map(|clause| clause.into_iter().map(Literal::from).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .into()
    }
}

#[test]
fn declared_variables_grow_with_clauses() {
    let mut formula = Formula::new(2);
    formula.add_clause(vec![Literal::positive(1), Literal::negative(5)]);
    assert_eq!(formula.num_variables(), 5);
    assert_eq!(formula.new_variable(), 6);
    assert_eq!(formula.num_clauses(), 1);
    assert!(!formula.contains_empty_clause());

    formula.add_clause(Vec::<Literal>::new());
    assert!(formula.contains_empty_clause());
}

#[test]
fn writes_dimacs() -> io::Result<()> {
    let formula = Formula::from(vec![vec![1, -2], vec![2, 3], vec![]]);
    let mut out = Vec::new();
    formula.write_dimacs(&mut out)?;
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "p cnf 3 3\n1 -2 0\n2 3 0\n0\n"
    );
    Ok(())
}
