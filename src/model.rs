//! Core ledger types: operations fed into an account and the records it keeps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Amount;

/// An operation representing the possible inputs of a [`BankAccount`](crate::BankAccount).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Add funds to the deposit balance.
    Deposit { amount: Amount },
    /// Remove funds from the deposit balance, bounded by the total balance.
    Withdrawal { amount: Amount },
    /// Draw a credit loan; only one loan may be outstanding.
    TakeCredit { amount: Amount },
    /// Repay part or all of the outstanding credit loan.
    PayCredit { amount: Amount },
}

impl Operation {
    pub fn amount(&self) -> Amount {
        match self {
            Operation::Deposit { amount }
            | Operation::Withdrawal { amount }
            | Operation::TakeCredit { amount }
            | Operation::PayCredit { amount } => *amount,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Deposit { .. } => "deposit",
            Operation::Withdrawal { .. } => "withdrawal",
            Operation::TakeCredit { .. } => "take credit",
            Operation::PayCredit { .. } => "pay credit",
        }
    }
}

/// Kind of a recorded ledger movement.
///
/// Credit repayments are recorded as `Credit`, same as drawdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Credit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Credit => "credit",
        };
        f.write_str(name)
    }
}

/// Immutable record of a successful ledger movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: Amount,
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
}

impl Transaction {
    /// Record a movement happening now.
    pub fn new(amount: Amount, kind: TransactionKind) -> Self {
        Self::at(amount, kind, Utc::now())
    }

    /// Record a movement at an explicit point in time.
    pub fn at(amount: Amount, kind: TransactionKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            amount,
            timestamp,
            kind,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}
