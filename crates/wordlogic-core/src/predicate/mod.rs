//! Deferred predicates: nullary boolean computations and their combinators.
//!
//! Composition never evaluates anything. A composed predicate re-invokes its
//! constituents every time it is tested; nothing is memoized.

mod combinator;


pub use combinator::{And, Not, Or, Xor, not};

pub(crate) use combinator::{and_then, or_else, xor_with};

use std::{fmt, rc::Rc};

///
/// LogicOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogicOp {
    And,
    Or,
    Xor,
    Not,
}

impl LogicOp {
    /// Whether evaluating the left operand can make the right one unnecessary.
    #[must_use]
    pub const fn short_circuits(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Xor => write!(f, "xor"),
            Self::Not => write!(f, "not"),
        }
    }
}

///
/// DeferredPredicate
///
/// A computation that can be invoked with zero arguments to produce a
/// boolean. Implemented for every `Fn() -> bool`.
///
/// The provided combinators build new predicates and never invoke either
/// operand; evaluation happens only when the result is itself tested.
///

pub trait DeferredPredicate {
    /// Evaluate this predicate.
    fn test(&self) -> bool;

    /// Short-circuiting AND: `other` is not invoked when `self` is false.
    fn and<O>(self, other: O) -> And<Self, O>
    where
        Self: Sized,
        O: DeferredPredicate,
    {
        And::new(self, other)
    }

    /// Short-circuiting OR: `other` is not invoked when `self` is true.
    fn or<O>(self, other: O) -> Or<Self, O>
    where
        Self: Sized,
        O: DeferredPredicate,
    {
        Or::new(self, other)
    }

    /// XOR: both operands are always invoked, left first.
    fn xor<O>(self, other: O) -> Xor<Self, O>
    where
        Self: Sized,
        O: DeferredPredicate,
    {
        Xor::new(self, other)
    }

    /// Erase into a shared [`Predicate`] handle.
    ///
    /// Types that already wrap a shared handle return it as-is so that
    /// embedding never adds a layer of indirection.
    fn into_shared(self) -> Predicate
    where
        Self: Sized + 'static,
    {
        Predicate {
            inner: Rc::new(self),
        }
    }
}

impl<F> DeferredPredicate for F
where
    F: Fn() -> bool,
{
    fn test(&self) -> bool {
        self()
    }
}

///
/// Predicate
///
/// Type-erased, reference-counted deferred predicate. Cloning shares the same
/// underlying computation; identity is the computation, not its value.
///

#[derive(Clone)]
pub struct Predicate {
    inner: Rc<dyn DeferredPredicate>,
}

impl Predicate {
    #[must_use]
    pub fn new(predicate: impl DeferredPredicate + 'static) -> Self {
        predicate.into_shared()
    }

    pub(crate) fn from_shared(inner: Rc<dyn DeferredPredicate>) -> Self {
        Self { inner }
    }

    /// A predicate that always yields `value` and has no side effects.
    #[must_use]
    pub fn constant(value: bool) -> Self {
        Self::new(move || value)
    }

    /// Whether both handles point at the same computation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DeferredPredicate for Predicate {
    fn test(&self) -> bool {
        self.inner.test()
    }

    fn into_shared(self) -> Predicate {
        self
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("shared", &Rc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
