use crate::{Sign, Variable};

/// A signed reference to a variable, packed as `var << 1 | positive`.
///
/// Variables are numbered from 1 as in DIMACS; 0 is never a valid variable.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    code: Variable,
}

impl Literal {
    #[inline]
    pub fn new(var: Variable, sign: impl Into<Sign>) -> Self {
        assert!(var > 0, "variable 0 is reserved as the DIMACS clause terminator");
        assert!(var <= i32::max_value() as Variable);
        let sign = sign.into();
        Literal {
            code: (var << 1) | sign.is_positive() as Variable,
        }
    }

    #[inline]
    pub fn positive(var: Variable) -> Self {
        Self::new(var, Sign::Positive)
    }

    #[inline]
    pub fn negative(var: Variable) -> Self {
        Self::new(var, Sign::Negative)
    }

    #[inline]
    pub fn var(self) -> Variable {
        self.code >> 1
    }

    #[inline]
    pub fn sign(self) -> Sign {
        ((self.code & 1) == 1).into()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.sign().is_positive()
    }

    /// The signed integer form consumed by DIMACS-speaking engines
    #[inline]
    pub fn to_dimacs(self) -> i32 {
        let var = self.var() as i32;
        if self.is_positive() {
            var
        } else {
            -var
        }
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    #[inline]
    fn not(self) -> Self::Output {
        Literal {
            code: self.code ^ 1,
        }
    }
}

impl From<i32> for Literal {
    fn from(x: i32) -> Self {
        assert_ne!(x, 0, "literals can only be built from non-zero inputs");
        Self::new(x.abs() as Variable, x > 0)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.sign(), self.var())
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.sign(), self.var())
    }
}

#[test]
fn negation_flips_sign_only() {
    let lit = Literal::positive(7);
    assert_eq!((!lit).var(), 7);
    assert_eq!((!lit).sign(), Sign::Negative);
    assert_eq!(!!lit, lit);
}

#[test]
fn dimacs_form() {
    assert_eq!(Literal::positive(3).to_dimacs(), 3);
    assert_eq!(Literal::negative(3).to_dimacs(), -3);
    assert_eq!(Literal::from(-12), Literal::negative(12));
    assert_eq!(format!("{}", Literal::from(-12)), "-12");
}

#[test]
#[should_panic]
fn zero_is_not_a_variable() {
    let _ = Literal::positive(0);
}
