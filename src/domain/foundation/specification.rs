//! Composable specification (predicate) engine.
//!
//! A specification is a stateless, reusable boolean predicate over a
//! candidate value. Specifications compose through `and`, `or` and `not`,
//! each of which builds a new tree without mutating its operands.
//!
//! The composite is an explicit tagged variant evaluated by a single
//! recursive evaluator: leaves hold a predicate function, inner nodes hold
//! their operands. `a.and(&b).and(&c)` builds a two-level tree rather than
//! a flat n-ary list; evaluation cost stays linear in predicate count
//! regardless of tree shape.

use std::fmt;
use std::sync::Arc;

/// A composable boolean predicate over values of type `T`.
pub enum Specification<T: ?Sized> {
    /// A concrete predicate.
    Leaf(Arc<dyn Fn(&T) -> bool + Send + Sync>),
    /// Satisfied when both operands are satisfied. Short-circuits left-to-right.
    And(Box<Specification<T>>, Box<Specification<T>>),
    /// Satisfied when either operand is satisfied. Short-circuits left-to-right.
    Or(Box<Specification<T>>, Box<Specification<T>>),
    /// Satisfied when the inner specification is not.
    Not(Box<Specification<T>>),
}

impl<T: ?Sized> Specification<T> {
    /// Creates a leaf specification from a predicate function.
    pub fn satisfying<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Specification::Leaf(Arc::new(predicate))
    }

    /// Evaluates the specification against a candidate.
    pub fn is_satisfied_by(&self, candidate: &T) -> bool {
        match self {
            Specification::Leaf(predicate) => predicate(candidate),
            Specification::And(left, right) => {
                left.is_satisfied_by(candidate) && right.is_satisfied_by(candidate)
            }
            Specification::Or(left, right) => {
                left.is_satisfied_by(candidate) || right.is_satisfied_by(candidate)
            }
            Specification::Not(inner) => !inner.is_satisfied_by(candidate),
        }
    }

    /// Returns a new specification satisfied when both `self` and `other` are.
    pub fn and(&self, other: &Self) -> Self {
        Specification::And(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Returns a new specification satisfied when either `self` or `other` is.
    pub fn or(&self, other: &Self) -> Self {
        Specification::Or(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Returns a new specification satisfied when `self` is not.
    pub fn not(&self) -> Self {
        Specification::Not(Box::new(self.clone()))
    }
}

// Manual impl: leaves clone via Arc, so no `T: Clone` bound is needed.
impl<T: ?Sized> Clone for Specification<T> {
    fn clone(&self) -> Self {
        match self {
            Specification::Leaf(predicate) => Specification::Leaf(Arc::clone(predicate)),
            Specification::And(left, right) => {
                Specification::And(left.clone(), right.clone())
            }
            Specification::Or(left, right) => Specification::Or(left.clone(), right.clone()),
            Specification::Not(inner) => Specification::Not(inner.clone()),
        }
    }
}

// Closures have no useful Debug output, so leaves print as a bare "Leaf".
impl<T: ?Sized> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specification::Leaf(_) => write!(f, "Leaf"),
            Specification::And(left, right) => write!(f, "And({:?}, {:?})", left, right),
            Specification::Or(left, right) => write!(f, "Or({:?}, {:?})", left, right),
            Specification::Not(inner) => write!(f, "Not({:?})", inner),
        }
    }
}
