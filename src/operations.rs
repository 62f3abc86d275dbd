//! Enumerated operation tables for the gateway's transaction surface.
//!
//! Two closed families exist: lifecycle actions applied to an existing
//! transaction by UID, and operations that create a new transaction. Each
//! variant maps to one POST route.

use std::fmt;

/// Lifecycle action applied to an existing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionAction {
    Renotify,
    Recover,
    Confirm,
    Proof,
}

impl TransactionAction {
    /// Route segment for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Renotify => "renotify",
            TransactionAction::Recover => "recover",
            TransactionAction::Confirm => "confirm",
            TransactionAction::Proof => "proof",
        }
    }

    pub(crate) fn path(&self, uid: &str) -> String {
        format!("/transactions/{uid}/{}", self.as_str())
    }
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation that creates a new transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionOp {
    Payment,
    Refund,
    Payout,
    Credit,
}

impl TransactionOp {
    /// Route segment for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionOp::Payment => "payment",
            TransactionOp::Refund => "refund",
            TransactionOp::Payout => "payout",
            TransactionOp::Credit => "credit",
        }
    }

    pub(crate) fn path(&self) -> String {
        format!("/transactions/{}", self.as_str())
    }
}

impl fmt::Display for TransactionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
