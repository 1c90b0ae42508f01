use crate::{formula::Literal, Variable};

/// A disjunction of literals. The empty clause is allowed and is never satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    pub fn literals<'a>(&'a self) -> impl Iterator<Item = Literal> + ExactSizeIterator + 'a {
        self.literals.iter().copied()
    }

    pub fn variables<'a>(&'a self) -> impl Iterator<Item = Variable> + 'a {
        self.literals().map(Literal::var)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }

    pub fn max_variable(&self) -> Option<Variable> {
        self.variables().max()
    }

    pub fn to_dimacs(&self) -> Vec<i32> {
        self.literals().map(Literal::to_dimacs).collect()
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Self { literals }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for literal in self.literals.iter() {
            write!(f, "{} ", literal)?;
        }
        write!(f, "0")
    }
}

#[test]
fn display_is_dimacs_line() {
    let clause = Clause::new(vec![Literal::negative(1), Literal::negative(4)]);
    assert_eq!(clause.to_string(), "-1 -4 0");
    assert_eq!(Clause::new(Vec::new()).to_string(), "0");
}

#[test]
fn max_variable() {
    let clause = Clause::new(vec![Literal::from(3), Literal::from(-9), Literal::from(2)]);
    assert_eq!(clause.max_variable(), Some(9));
    assert!(clause.contains(Literal::negative(9)));
    assert!(!clause.contains(Literal::positive(9)));
    assert_eq!(Clause::new(Vec::new()).max_variable(), None);
}
