use crate::{backend::BackendError, Literal, Variable};
use fixedbitset::FixedBitSet;

/// A total truth assignment over `1..=num_variables`, as returned by a backend.
///
/// Variables the engine never mentions are false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    num_variables: Variable,
    truths: FixedBitSet,
}

impl Model {
    pub fn all_false(num_variables: Variable) -> Self {
        Self {
            num_variables,
            truths: FixedBitSet::with_capacity(num_variables + 1),
        }
    }

    /// Builds a model from DIMACS-style signed literals, rejecting any literal
    /// outside the declared variable range or assigned both ways.
    pub fn from_dimacs(
        num_variables: Variable,
        literals: impl IntoIterator<Item = i32>,
    ) -> Result<Self, BackendError> {
        let mut model = Self::all_false(num_variables);
        let mut seen = FixedBitSet::with_capacity(num_variables + 1);
        for lit in literals {
            let var = lit.unsigned_abs() as Variable;
            if lit == 0 || var > num_variables {
                return Err(BackendError::OutOfRange {
                    literal: lit,
                    num_variables,
                });
            }
            if seen.put(var) && model.truths.contains(var) != (lit > 0) {
                return Err(BackendError::Contradictory(var));
            }
            model.truths.set(var, lit > 0);
        }
        Ok(model)
    }

    pub fn num_variables(&self) -> Variable {
        self.num_variables
    }

    #[inline]
    pub fn value(&self, var: Variable) -> bool {
        self.truths.contains(var)
    }

    #[inline]
    pub fn satisfies(&self, literal: Literal) -> bool {
        self.value(literal.var()) == literal.is_positive()
    }

    pub fn true_variables<'a>(&'a self) -> impl Iterator<Item = Variable> + 'a {
        self.truths.ones()
    }
}

#[test]
fn from_dimacs() -> Result<(), BackendError> {
    let model = Model::from_dimacs(4, vec![1, -2, 4])?;
    assert!(model.value(1));
    assert!(!model.value(2));
    assert!(!model.value(3));
    assert!(model.value(4));
    assert_eq!(model.true_variables().collect::<Vec<_>>(), vec![1, 4]);
    assert!(model.satisfies(Literal::negative(3)));
    Ok(())
}

#[test]
fn rejects_malformed_models() {
    assert!(matches!(
        Model::from_dimacs(2, vec![1, 3]),
        Err(BackendError::OutOfRange { literal: 3, .. })
    ));
    assert!(matches!(
        Model::from_dimacs(2, vec![0]),
        Err(BackendError::OutOfRange { literal: 0, .. })
    ));
    assert!(matches!(
        Model::from_dimacs(2, vec![i32::MIN]),
        Err(BackendError::OutOfRange {
            literal: i32::MIN,
            ..
        })
    ));
    assert!(matches!(
        Model::from_dimacs(2, vec![2, -2]),
        Err(BackendError::Contradictory(2))
    ));
}
