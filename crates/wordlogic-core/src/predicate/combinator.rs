use crate::{
    obs::{EvalEvent, sink},
    predicate::{DeferredPredicate, LogicOp},
};

///
/// And
///

#[derive(Clone, Copy, Debug)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> DeferredPredicate for And<L, R>
where
    L: DeferredPredicate,
    R: DeferredPredicate,
{
    fn test(&self) -> bool {
        and_then(self.left.test(), &self.right)
    }
}

///
/// Or
///

#[derive(Clone, Copy, Debug)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> DeferredPredicate for Or<L, R>
where
    L: DeferredPredicate,
    R: DeferredPredicate,
{
    fn test(&self) -> bool {
        or_else(self.left.test(), &self.right)
    }
}

///
/// Xor
///

#[derive(Clone, Copy, Debug)]
pub struct Xor<L, R> {
    left: L,
    right: R,
}

impl<L, R> Xor<L, R> {
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> DeferredPredicate for Xor<L, R>
where
    L: DeferredPredicate,
    R: DeferredPredicate,
{
    fn test(&self) -> bool {
        xor_with(self.left.test(), &self.right)
    }
}

///
/// Not
///

#[derive(Clone, Copy, Debug)]
pub struct Not<P> {
    target: P,
}

impl<P> Not<P> {
    #[must_use]
    pub const fn new(target: P) -> Self {
        Self { target }
    }
}

impl<P> DeferredPredicate for Not<P>
where
    P: DeferredPredicate,
{
    fn test(&self) -> bool {
        let value = !self.target.test();
        sink::record(EvalEvent::Combined { op: LogicOp::Not });

        value
    }
}

/// Negate a deferred predicate without invoking it.
#[must_use]
pub const fn not<P: DeferredPredicate>(target: P) -> Not<P> {
    Not::new(target)
}

// Right-hand halves of the binary operators, given an already evaluated
// left side. Shared by the adapters above and by flat lazy chains.

pub(crate) fn and_then<R>(left: bool, right: &R) -> bool
where
    R: DeferredPredicate + ?Sized,
{
    let value = if left {
        right.test()
    } else {
        sink::record(EvalEvent::ShortCircuit { op: LogicOp::And });
        false
    };
    sink::record(EvalEvent::Combined { op: LogicOp::And });

    value
}

pub(crate) fn or_else<R>(left: bool, right: &R) -> bool
where
    R: DeferredPredicate + ?Sized,
{
    let value = if left {
        sink::record(EvalEvent::ShortCircuit { op: LogicOp::Or });
        true
    } else {
        right.test()
    };
    sink::record(EvalEvent::Combined { op: LogicOp::Or });

    value
}

// The right side always runs; the left was evaluated by the caller first.
pub(crate) fn xor_with<R>(left: bool, right: &R) -> bool
where
    R: DeferredPredicate + ?Sized,
{
    let value = left ^ right.test();
    sink::record(EvalEvent::Combined { op: LogicOp::Xor });

    value
}
