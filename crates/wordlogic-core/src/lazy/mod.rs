//! Lazy logical expressions.
//!
//! Every operand is a [`DeferredPredicate`]. Chaining only composes; nothing
//! runs until [`LazyExpr::result`] is called, and evaluation then proceeds
//! left to right with AND/OR short-circuiting.
//!
//! There is no operator precedence: each chain call applies one named binary
//! operator to the accumulated predicate, strictly in call order. Embedding
//! another expression (`expr(...)` as an operand) is the equivalent of
//! parentheses: the embedded chain becomes a single opaque operand.


use crate::{
    error::{ExprError, ExprOp},
    obs::{EvalEvent, sink},
    predicate::{self, DeferredPredicate, Predicate},
};
use std::{
    ops::{BitAnd, BitOr, BitXor, Not},
    rc::Rc,
};

///
/// LazyExpr
///
/// Accumulator over exactly one deferred predicate. Values are immutable:
/// every chain call returns a new expression that closes over the previous
/// accumulated predicate and the new operand. Clones share the accumulated
/// predicate by reference.
///
/// Not `Send`/`Sync`; an expression lives on the thread that built it.
///

#[derive(Clone, Debug)]
pub struct LazyExpr {
    chain: Rc<Chain>,
}

/// Start an expression from a predicate or from another expression.
///
/// `expr(a).and(b).or(expr(c).or(d))` evaluates as `(a && b) || (c || d)`.
#[must_use]
pub fn expr(root: impl DeferredPredicate + 'static) -> LazyExpr {
    LazyExpr::new(root)
}

/// AND together every predicate, left to right. Empty input is `true`.
#[must_use]
pub fn all_of<I>(predicates: I) -> LazyExpr
where
    I: IntoIterator,
    I::Item: DeferredPredicate + 'static,
{
    LazyExpr::all_of(predicates)
}

/// OR together every predicate, left to right. Empty input is `false`.
#[must_use]
pub fn any_of<I>(predicates: I) -> LazyExpr
where
    I: IntoIterator,
    I::Item: DeferredPredicate + 'static,
{
    LazyExpr::any_of(predicates)
}

/// A new expression negating `target`.
#[must_use]
pub fn not(target: impl DeferredPredicate + 'static) -> LazyExpr {
    LazyExpr::not(target)
}

impl LazyExpr {
    // --- Construction ---

    #[must_use]
    pub fn new(root: impl DeferredPredicate + 'static) -> Self {
        Self::from_predicate(root.into_shared())
    }

    #[must_use]
    pub fn from_predicate(root: Predicate) -> Self {
        Self::from_chain(Chain {
            root,
            steps: Vec::new(),
        })
    }

    /// Embed another expression's accumulated predicate by reference.
    ///
    /// Nothing is evaluated; the other expression stays usable and later
    /// chain calls on either side do not affect the other.
    #[must_use]
    pub fn from_expr(other: &Self) -> Self {
        Self {
            chain: Rc::clone(&other.chain),
        }
    }

    #[must_use]
    pub fn all_of<I>(predicates: I) -> Self
    where
        I: IntoIterator,
        I::Item: DeferredPredicate + 'static,
    {
        Self::fold(predicates, true, Step::And)
    }

    #[must_use]
    pub fn any_of<I>(predicates: I) -> Self
    where
        I: IntoIterator,
        I::Item: DeferredPredicate + 'static,
    {
        Self::fold(predicates, false, Step::Or)
    }

    // Left fold seeded by the first element; `identity` only stands in for
    // an empty input.
    fn fold<I>(predicates: I, identity: bool, step: fn(Predicate) -> Step) -> Self
    where
        I: IntoIterator,
        I::Item: DeferredPredicate + 'static,
    {
        let mut predicates = predicates.into_iter().map(DeferredPredicate::into_shared);

        match predicates.next() {
            Some(root) => Self::from_chain(Chain {
                root,
                steps: predicates.map(step).collect(),
            }),
            None => Self::from_predicate(Predicate::constant(identity)),
        }
    }

    fn from_chain(chain: Chain) -> Self {
        Self {
            chain: Rc::new(chain),
        }
    }

    // --- Chaining ---

    #[must_use]
    pub fn and(self, operand: impl DeferredPredicate + 'static) -> Self {
        self.push(Step::And(operand.into_shared()))
    }

    #[must_use]
    pub fn or(self, operand: impl DeferredPredicate + 'static) -> Self {
        self.push(Step::Or(operand.into_shared()))
    }

    #[must_use]
    pub fn xor(self, operand: impl DeferredPredicate + 'static) -> Self {
        self.push(Step::Xor(operand.into_shared()))
    }

    /// A new expression negating `target`. Existing expressions are untouched.
    #[must_use]
    pub fn not(target: impl DeferredPredicate + 'static) -> Self {
        Self::new(predicate::not(target.into_shared()))
    }

    // Appends in place while this is the only handle on the chain; copies
    // the step list first when a clone or an embedding still shares it.
    fn push(self, step: Step) -> Self {
        let mut chain = self.chain;
        Rc::make_mut(&mut chain).steps.push(step);

        Self { chain }
    }

    // --- Fallible twins ---
    //
    // For operands assembled at runtime where a slot may be empty. Each
    // validates fully before composing; chain twins leave `self` untouched.

    pub fn try_expr<P>(root: Option<P>) -> Result<Self, ExprError>
    where
        P: DeferredPredicate + 'static,
    {
        root.map(Self::new)
            .ok_or(ExprError::missing_operand(ExprOp::Expr))
    }

    pub fn try_all_of<I, P>(predicates: Option<I>) -> Result<Self, ExprError>
    where
        I: IntoIterator<Item = Option<P>>,
        P: DeferredPredicate + 'static,
    {
        let predicates = require_all(ExprOp::AllOf, predicates)?;

        Ok(Self::all_of(predicates))
    }

    pub fn try_any_of<I, P>(predicates: Option<I>) -> Result<Self, ExprError>
    where
        I: IntoIterator<Item = Option<P>>,
        P: DeferredPredicate + 'static,
    {
        let predicates = require_all(ExprOp::AnyOf, predicates)?;

        Ok(Self::any_of(predicates))
    }

    pub fn try_and<P>(&self, operand: Option<P>) -> Result<Self, ExprError>
    where
        P: DeferredPredicate + 'static,
    {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::And))?;

        Ok(self.clone().and(operand))
    }

    pub fn try_or<P>(&self, operand: Option<P>) -> Result<Self, ExprError>
    where
        P: DeferredPredicate + 'static,
    {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::Or))?;

        Ok(self.clone().or(operand))
    }

    pub fn try_xor<P>(&self, operand: Option<P>) -> Result<Self, ExprError>
    where
        P: DeferredPredicate + 'static,
    {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::Xor))?;

        Ok(self.clone().xor(operand))
    }

    pub fn try_not<P>(target: Option<P>) -> Result<Self, ExprError>
    where
        P: DeferredPredicate + 'static,
    {
        target
            .map(Self::not)
            .ok_or(ExprError::missing_operand(ExprOp::Not))
    }

    // --- Evaluation ---

    /// Evaluate the accumulated predicate once and return its value.
    ///
    /// Panics raised by caller predicates propagate unchanged.
    #[must_use]
    pub fn result(&self) -> bool {
        sink::record(EvalEvent::ResultForced);

        self.chain.test()
    }

    /// The accumulated predicate, shared by reference.
    #[must_use]
    pub fn predicate(&self) -> Predicate {
        self.clone().into_predicate()
    }

    #[must_use]
    pub fn into_predicate(self) -> Predicate {
        if self.chain.steps.is_empty() {
            self.chain.root.clone()
        } else {
            Predicate::from_shared(self.chain)
        }
    }
}

///
/// Chain
///
/// Flat left-deep fold: `root`, then each step applied to the running value
/// in order. Evaluation and drop are iterative, so chain length is bounded
/// by memory rather than stack depth.
///

#[derive(Clone, Debug)]
struct Chain {
    root: Predicate,
    steps: Vec<Step>,
}

impl DeferredPredicate for Chain {
    fn test(&self) -> bool {
        self.steps
            .iter()
            .fold(self.root.test(), |value, step| step.apply(value))
    }
}

#[derive(Clone, Debug)]
enum Step {
    And(Predicate),
    Or(Predicate),
    Xor(Predicate),
}

impl Step {
    fn apply(&self, left: bool) -> bool {
        match self {
            Self::And(right) => predicate::and_then(left, right),
            Self::Or(right) => predicate::or_else(left, right),
            Self::Xor(right) => predicate::xor_with(left, right),
        }
    }
}

// Unwrap every slot, failing on the first gap.
fn require_all<I, P>(op: ExprOp, predicates: Option<I>) -> Result<Vec<P>, ExprError>
where
    I: IntoIterator<Item = Option<P>>,
{
    let predicates = predicates.ok_or(ExprError::missing_collection(op))?;

    predicates
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(ExprError::missing_element(op, index)))
        .collect()
}

impl DeferredPredicate for LazyExpr {
    fn test(&self) -> bool {
        self.chain.test()
    }

    fn into_shared(self) -> Predicate {
        self.into_predicate()
    }
}

impl From<Predicate> for LazyExpr {
    fn from(predicate: Predicate) -> Self {
        Self::from_predicate(predicate)
    }
}

impl Not for LazyExpr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(self)
    }
}

impl<P> BitAnd<P> for LazyExpr
where
    P: DeferredPredicate + 'static,
{
    type Output = Self;

    fn bitand(self, rhs: P) -> Self::Output {
        self.and(rhs)
    }
}

impl<P> BitOr<P> for LazyExpr
where
    P: DeferredPredicate + 'static,
{
    type Output = Self;

    fn bitor(self, rhs: P) -> Self::Output {
        self.or(rhs)
    }
}

impl<P> BitXor<P> for LazyExpr
where
    P: DeferredPredicate + 'static,
{
    type Output = Self;

    fn bitxor(self, rhs: P) -> Self::Output {
        self.xor(rhs)
    }
}
