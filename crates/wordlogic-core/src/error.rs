use std::fmt;
use thiserror::Error as ThisError;

///
/// ExprError
///
/// Programmer-error class raised synchronously by the fallible factories and
/// chain methods. Returned before any accumulated state is touched.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("invalid argument to `{op}`: {fault}")]
    InvalidArgument { op: ExprOp, fault: ArgumentFault },
}

impl ExprError {
    /// A single required operand was absent.
    pub(crate) const fn missing_operand(op: ExprOp) -> Self {
        Self::InvalidArgument {
            op,
            fault: ArgumentFault::MissingOperand,
        }
    }

    /// The operand collection itself was absent.
    pub(crate) const fn missing_collection(op: ExprOp) -> Self {
        Self::InvalidArgument {
            op,
            fault: ArgumentFault::MissingCollection,
        }
    }

    /// One element of an operand collection was absent.
    pub(crate) const fn missing_element(op: ExprOp, index: usize) -> Self {
        Self::InvalidArgument {
            op,
            fault: ArgumentFault::MissingElement { index },
        }
    }

    #[must_use]
    pub const fn op(&self) -> ExprOp {
        match self {
            Self::InvalidArgument { op, .. } => *op,
        }
    }

    #[must_use]
    pub const fn fault(&self) -> ArgumentFault {
        match self {
            Self::InvalidArgument { fault, .. } => *fault,
        }
    }
}

///
/// ExprOp
///
/// Stable name of the operation that rejected its input.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExprOp {
    AllOf,
    And,
    AnyOf,
    Expr,
    Not,
    Or,
    Xor,
}

impl ExprOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllOf => "all_of",
            Self::And => "and",
            Self::AnyOf => "any_of",
            Self::Expr => "expr",
            Self::Not => "not",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

impl fmt::Display for ExprOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ArgumentFault
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ArgumentFault {
    #[error("operand is absent")]
    MissingOperand,

    #[error("operand collection is absent")]
    MissingCollection,

    #[error("operand at position {index} is absent")]
    MissingElement { index: usize },
}

///
/// TESTS
///
