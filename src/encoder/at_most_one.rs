use crate::{config::AtMostOne, Formula, Literal, Variable};

/// Adds clauses allowing at most one of `vars` to be true
pub fn encode(formula: &mut Formula, vars: &[Variable], strategy: AtMostOne) {
    match strategy {
        AtMostOne::Pairwise => pairwise(formula, vars),
        AtMostOne::Sequential => sequential(formula, vars),
        AtMostOne::Auto if vars.len() <= AtMostOne::AUTO_PAIRWISE_LIMIT => pairwise(formula, vars),
        AtMostOne::Auto => sequential(formula, vars),
    }
}

/// `(¬a ∨ ¬b)` for every pair
pub fn pairwise(formula: &mut Formula, vars: &[Variable]) {
    for (i, &a) in vars.iter().enumerate() {
        for &b in vars[i + 1..].iter() {
            formula.add_clause(vec![Literal::negative(a), Literal::negative(b)]);
        }
    }
}

/// Sinz' sequential counter: auxiliary `s_i` is true once any of `x_1..=x_i` is.
/// Uses `n - 1` fresh variables and `3n - 4` clauses.
pub fn sequential(formula: &mut Formula, vars: &[Variable]) {
    let n = vars.len();
    if n < 2 {
        return;
    }

    let x = |i: usize| Literal::positive(vars[i]);
    let counters = (0..n - 1)
        .map(|_| Literal::positive(formula.new_variable()))
        .collect::<Vec<_>>();

    formula.add_clause(vec![!x(0), counters[0]]);
    for i in 1..n - 1 {
        formula.add_clause(vec![!x(i), counters[i]]);
        formula.add_clause(vec![!counters[i - 1], counters[i]]);
        formula.add_clause(vec![!x(i), !counters[i - 1]]);
    }
    formula.add_clause(vec![!x(n - 1), !counters[n - 2]]);
}

#[cfg(test)]
use crate::{Evaluate, Model};

/// Whether some assignment of the auxiliary variables satisfies the formula
/// once the first `inputs.len()` variables are fixed
#[cfg(test)]
fn extendable(formula: &Formula, inputs: &[bool]) -> bool {
    let aux = formula.num_variables() - inputs.len();
    (0..1u32 << aux).any(|bits| {
        let fixed = inputs
            .iter()
            .enumerate()
            .map(|(i, &value)| if value { i as i32 + 1 } else { -(i as i32 + 1) });
        let free = (0..aux).map(|j| {
            let var = (inputs.len() + j + 1) as i32;
            if bits & (1 << j) != 0 {
                var
            } else {
                -var
            }
        });
        let model = Model::from_dimacs(formula.num_variables(), fixed.chain(free)).unwrap();
        formula.evaluate(&model)
    })
}

#[cfg(test)]
fn check(strategy: AtMostOne, n: usize) {
    let vars = (1..=n).collect::<Vec<_>>();
    let mut formula = Formula::new(n);
    encode(&mut formula, &vars, strategy);

    for bits in 0..1u32 << n {
        let inputs = (0..n).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
        assert_eq!(
            extendable(&formula, &inputs),
            bits.count_ones() <= 1,
            "{:?} with n = {} on {:?}",
            strategy,
            n,
            inputs
        );
    }
}

#[test]
fn pairwise_allows_at_most_one() {
    for n in 0..=5 {
        check(AtMostOne::Pairwise, n);
    }
}

#[test]
fn sequential_allows_at_most_one() {
    for n in 0..=5 {
        check(AtMostOne::Sequential, n);
    }
}

#[test]
fn sizes() {
    let vars = (1..=8).collect::<Vec<_>>();

    let mut formula = Formula::new(8);
    pairwise(&mut formula, &vars);
    assert_eq!(formula.num_clauses(), 28);
    assert_eq!(formula.num_variables(), 8);

    let mut formula = Formula::new(8);
    sequential(&mut formula, &vars);
    assert_eq!(formula.num_clauses(), 3 * 8 - 4);
    assert_eq!(formula.num_variables(), 8 + 7);
}

#[test]
fn auto_switches_on_group_size() {
    let small = (1..=AtMostOne::AUTO_PAIRWISE_LIMIT).collect::<Vec<_>>();
    let mut formula = Formula::new(small.len());
    encode(&mut formula, &small, AtMostOne::Auto);
    assert_eq!(formula.num_variables(), small.len());

    let large = (1..=AtMostOne::AUTO_PAIRWISE_LIMIT + 1).collect::<Vec<_>>();
    let mut formula = Formula::new(large.len());
    encode(&mut formula, &large, AtMostOne::Auto);
    assert!(formula.num_variables() > large.len());
}
