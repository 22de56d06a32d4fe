//! Eager logical expressions over already-computed booleans.
//!
//! Same surface as [`crate::lazy`], but every operand has been evaluated by
//! the caller before it is passed in, so each chain call applies its
//! operator immediately and nothing is left to short-circuit.

use crate::error::{ExprError, ExprOp};
use std::ops::{BitAnd, BitOr, BitXor, Not};

///
/// EagerExpr
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EagerExpr {
    value: bool,
}

/// Start an expression from a boolean or from another expression.
#[must_use]
pub fn expr(root: impl Into<EagerExpr>) -> EagerExpr {
    root.into()
}

#[must_use]
pub fn all_of<I>(values: I) -> EagerExpr
where
    I: IntoIterator,
    I::Item: Into<EagerExpr>,
{
    EagerExpr::all_of(values)
}

#[must_use]
pub fn any_of<I>(values: I) -> EagerExpr
where
    I: IntoIterator,
    I::Item: Into<EagerExpr>,
{
    EagerExpr::any_of(values)
}

#[must_use]
pub fn not(target: impl Into<EagerExpr>) -> EagerExpr {
    EagerExpr::not(target)
}

/// Named NOT for a plain boolean.
#[must_use]
pub const fn negate(value: bool) -> bool {
    !value
}

impl EagerExpr {
    #[must_use]
    pub const fn new(root: bool) -> Self {
        Self { value: root }
    }

    #[must_use]
    pub const fn from_expr(other: &Self) -> Self {
        Self::new(other.value)
    }

    #[must_use]
    pub fn all_of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        values
            .into_iter()
            .fold(Self::new(true), |acc, value| acc.and(value))
    }

    #[must_use]
    pub fn any_of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        values
            .into_iter()
            .fold(Self::new(false), |acc, value| acc.or(value))
    }

    #[must_use]
    pub fn and(self, operand: impl Into<Self>) -> Self {
        let operand = operand.into().value;

        Self::new(self.value && operand)
    }

    #[must_use]
    pub fn or(self, operand: impl Into<Self>) -> Self {
        let operand = operand.into().value;

        Self::new(self.value || operand)
    }

    #[must_use]
    pub fn xor(self, operand: impl Into<Self>) -> Self {
        Self::new(self.value ^ operand.into().value)
    }

    #[must_use]
    pub fn not(target: impl Into<Self>) -> Self {
        Self::new(!target.into().value)
    }

    #[must_use]
    pub const fn result(self) -> bool {
        self.value
    }

    // --- Fallible twins ---

    pub fn try_expr(root: Option<impl Into<Self>>) -> Result<Self, ExprError> {
        root.map(Into::into)
            .ok_or(ExprError::missing_operand(ExprOp::Expr))
    }

    pub fn try_all_of<I, T>(values: Option<I>) -> Result<Self, ExprError>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<Self>,
    {
        let values = require_all(ExprOp::AllOf, values)?;

        Ok(Self::all_of(values))
    }

    pub fn try_any_of<I, T>(values: Option<I>) -> Result<Self, ExprError>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<Self>,
    {
        let values = require_all(ExprOp::AnyOf, values)?;

        Ok(Self::any_of(values))
    }

    pub fn try_and(self, operand: Option<impl Into<Self>>) -> Result<Self, ExprError> {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::And))?;

        Ok(self.and(operand))
    }

    pub fn try_or(self, operand: Option<impl Into<Self>>) -> Result<Self, ExprError> {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::Or))?;

        Ok(self.or(operand))
    }

    pub fn try_xor(self, operand: Option<impl Into<Self>>) -> Result<Self, ExprError> {
        let operand = operand.ok_or(ExprError::missing_operand(ExprOp::Xor))?;

        Ok(self.xor(operand))
    }

    pub fn try_not(target: Option<impl Into<Self>>) -> Result<Self, ExprError> {
        target
            .map(Self::not)
            .ok_or(ExprError::missing_operand(ExprOp::Not))
    }
}

fn require_all<I, T>(op: ExprOp, values: Option<I>) -> Result<Vec<T>, ExprError>
where
    I: IntoIterator<Item = Option<T>>,
{
    let values = values.ok_or(ExprError::missing_collection(op))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(ExprError::missing_element(op, index)))
        .collect()
}

impl From<bool> for EagerExpr {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<EagerExpr> for bool {
    fn from(expr: EagerExpr) -> Self {
        expr.value
    }
}

impl Not for EagerExpr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

impl<T: Into<Self>> BitAnd<T> for EagerExpr {
    type Output = Self;

    fn bitand(self, rhs: T) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: Into<Self>> BitOr<T> for EagerExpr {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: Into<Self>> BitXor<T> for EagerExpr {
    type Output = Self;

    fn bitxor(self, rhs: T) -> Self::Output {
        self.xor(rhs)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentFault;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn chains_match_native_operators() {
        for a in BOOLS {
            for b in BOOLS {
                assert_eq!(expr(a).and(b).result(), a && b);
                assert_eq!(expr(a).or(b).result(), a || b);
                assert_eq!(expr(a).xor(b).result(), a ^ b);
                assert_eq!(not(a).result(), !a);
                assert_eq!(not(not(a)).result(), a);
            }
        }
    }

    #[test]
    fn chain_has_no_precedence() {
        // (true || true) && false
        assert!(!expr(true).or(true).and(false).result());
        // true && (false || true)
        assert!(expr(true).and(expr(false).or(true)).result());
    }

    #[test]
    fn nested_expressions_act_as_parentheses() {
        // (c1 && c2) || (c3 || c4)
        let (c1, c2, c3, c4) = (true, false, false, true);
        assert_eq!(
            expr(c1).and(c2).or(expr(c3).or(c4)).result(),
            (c1 && c2) || (c3 || c4)
        );

        // c1 && ((c2 || c3) && !c4)
        assert_eq!(
            expr(c1).and(expr(expr(c2).or(c3).and(not(c4)))).result(),
            c1 && ((c2 || c3) && !c4)
        );
    }

    #[test]
    fn aggregates_and_identities() {
        assert!(all_of(Vec::<bool>::new()).result());
        assert!(!any_of(Vec::<bool>::new()).result());
        assert!(all_of([true, true, !false, true]).result());
        assert!(!any_of([false, false, false]).result());
        assert!(expr(true).xor(expr(true).and(false)).result());
    }

    #[test]
    fn aggregates_accept_expressions() {
        assert!(!all_of([expr(true), not(true)]).result());
        assert!(any_of([expr(false), expr(true).and(true)]).result());
    }

    #[test]
    fn from_expr_copies_the_value() {
        let inner = expr(true).and(false);
        let outer = EagerExpr::from_expr(&inner).or(true);

        assert!(!inner.result());
        assert!(outer.result());
    }

    #[test]
    fn operators_and_conversions() {
        assert!((expr(true) & true).result());
        assert!(!(expr(true) ^ expr(true)).result());
        assert!((expr(false) | true).result());
        assert!((!expr(false)).result());
        assert!(bool::from(expr(true)));
        assert!(negate(false));
    }

    #[test]
    fn fallible_twins_reject_absence() {
        let base = expr(true);

        assert_eq!(
            base.try_and(None::<bool>).unwrap_err(),
            ExprError::missing_operand(ExprOp::And)
        );
        assert_eq!(base.try_or(None::<bool>).unwrap_err().op(), ExprOp::Or);
        assert_eq!(base.try_xor(None::<bool>).unwrap_err().op(), ExprOp::Xor);
        assert_eq!(
            EagerExpr::try_not(None::<EagerExpr>).unwrap_err().op(),
            ExprOp::Not
        );
        assert_eq!(
            EagerExpr::try_expr(None::<bool>).unwrap_err().op(),
            ExprOp::Expr
        );
        assert!(base.result());

        assert_eq!(
            EagerExpr::try_all_of(Some([Some(true), None])).unwrap_err().fault(),
            ArgumentFault::MissingElement { index: 1 }
        );
        assert_eq!(
            EagerExpr::try_any_of(None::<Vec<Option<bool>>>)
                .unwrap_err()
                .fault(),
            ArgumentFault::MissingCollection
        );
        assert!(base.try_xor(Some(false)).unwrap().result());
        assert!(!EagerExpr::try_not(Some(true)).unwrap().result());
    }
}
