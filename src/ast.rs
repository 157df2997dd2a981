//! Boolean expression trees over gate input variables.
//!
//! Only the operators that threshold-gate functions need are represented:
//! variable reference, NOT, AND, OR. Trees are built once per gate by the
//! [parser][crate::parser] and then evaluated many times.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        match value {
            Expr::Not(inner) => *inner,
            _ => Expr::Not(Box::new(value)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the expression under `assignment`.
    pub fn eval<F>(&self, assignment: F) -> bool
    where
        F: Fn(Var) -> bool + Copy,
    {
        match self {
            Expr::Var(v) => assignment(*v),
            Expr::Not(a) => !a.eval(assignment),
            Expr::And(a, b) => a.eval(assignment) && b.eval(assignment),
            Expr::Or(a, b) => a.eval(assignment) || b.eval(assignment),
        }
    }

    /// Variables referenced anywhere in the expression, in ascending order.
    pub fn support(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(a) => a.collect_vars(vars),
            Expr::And(a, b) | Expr::Or(a, b) => {
                a.collect_vars(vars);
                b.collect_vars(vars);
            }
        }
    }

    /// Highest variable referenced, if any.
    pub fn max_var(&self) -> Option<Var> {
        self.support().into_iter().next_back()
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

/// Fully parenthesised form, e.g. `((A & B) | ~C)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(a) => write!(f, "~{}", a),
            Expr::And(a, b) => write!(f, "({} & {})", a, b),
            Expr::Or(a, b) => write!(f, "({} | {})", a, b),
        }
    }
}
