//! Error types for ledger operations.

use thiserror::Error;

use crate::Amount;

/// Top-level error returned by [`BankAccount::apply`](super::BankAccount::apply).
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("deposit failed: {0}")]
    Deposit(#[from] DepositError),

    #[error("withdrawal failed: {0}")]
    Withdrawal(#[from] WithdrawalError),

    #[error("{0}")]
    Credit(#[from] CreditError),
}

/// Rejected account configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("credit limit {0} must be finite and not negative")]
    InvalidCreditLimit(Amount),
}

/// Error during deposit processing.
#[derive(Debug, Error)]
pub enum DepositError {
    #[error("amount {0} is not a positive finite number")]
    InvalidAmount(Amount),
}

/// Error during withdrawal processing.
#[derive(Debug, Error)]
pub enum WithdrawalError {
    #[error("amount {0} is not a positive finite number")]
    InvalidAmount(Amount),
    #[error("insufficient funds: balance {0}, requested {1}")]
    InsufficientFunds(Amount, Amount),
}

/// The credit operation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditOperation {
    Take,
    Pay,
}

/// Unified error for credit operations (take, pay).
#[derive(Debug, Error)]
pub enum CreditError {
    #[error("{0:?} credit: amount {1} is not a positive finite number")]
    InvalidAmount(CreditOperation, Amount),

    #[error("Take credit: amount {0} exceeds credit limit {1}")]
    LimitExceeded(Amount, Amount),

    #[error("Take credit: loan of {0} is still outstanding")]
    LoanOutstanding(Amount),

    #[error("Pay credit: amount {0} exceeds outstanding loan {1}")]
    ExceedsLoan(Amount, Amount),
}
