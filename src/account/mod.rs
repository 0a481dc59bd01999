//! Bank account ledger.
//!
//! The account tracks a deposit balance and a single-slot credit loan, and
//! records every successful movement in an append-only history.
//! Operations can also be replayed from an async stream.

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::model::{Operation, Transaction, TransactionKind};

mod state;
pub use state::Balances;

mod error;
pub use error::{
    AccountError, ConfigError, CreditError, CreditOperation, DepositError, WithdrawalError,
};

/// Credit limit used by [`BankAccount::new`].
pub const DEFAULT_CREDIT_LIMIT: Amount = Amount::new(10_000.0);

/// A single-user bank account with deposits, withdrawals and a credit facility.
///
/// `balance = deposit_balance + credit_loan`. At most one non-zero loan may be
/// outstanding at a time.
#[derive(Debug)]
pub struct BankAccount {
    balances: Balances,
    credit_limit: Amount,
    history: Vec<Transaction>,
}

/// Public API
impl BankAccount {
    pub fn new() -> Self {
        Self {
            balances: Balances::default(),
            credit_limit: DEFAULT_CREDIT_LIMIT,
            history: Vec::new(),
        }
    }

    /// Account with a custom credit limit, which must be finite and not negative.
    pub fn with_credit_limit(credit_limit: impl Into<Amount>) -> Result<Self, ConfigError> {
        let credit_limit = credit_limit.into();
        if !credit_limit.is_finite() || credit_limit < Amount::ZERO {
            return Err(ConfigError::InvalidCreditLimit(credit_limit));
        }

        Ok(Self {
            credit_limit,
            ..Self::new()
        })
    }

    /// Run the account over the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // rejected operations are logged and must not stop the replay
            let _ = self.apply(op);
        }
    }

    /// Apply a single operation on top of the current account state
    pub fn apply(&mut self, op: Operation) -> Result<(), AccountError> {
        match op {
            Operation::Deposit { amount } => self.try_deposit(amount)?,
            Operation::Withdrawal { amount } => self.try_withdraw(amount)?,
            Operation::TakeCredit { amount } => self.try_take_credit(amount)?,
            Operation::PayCredit { amount } => self.try_pay_credit(amount)?,
        }
        Ok(())
    }

    /// Deposit funds. Amounts that are not positive and finite are ignored.
    pub fn deposit(&mut self, amount: impl Into<Amount>) {
        let _ = self.try_deposit(amount);
    }

    pub fn withdraw(&mut self, amount: impl Into<Amount>) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    pub fn take_credit(&mut self, amount: impl Into<Amount>) -> bool {
        self.try_take_credit(amount).is_ok()
    }

    pub fn pay_credit(&mut self, amount: impl Into<Amount>) -> bool {
        self.try_pay_credit(amount).is_ok()
    }

    pub fn try_deposit(&mut self, amount: impl Into<Amount>) -> Result<(), DepositError> {
        let amount = amount.into();
        let result = self.apply_deposit(amount);
        self.log_result("deposit", amount, &result);
        result
    }

    pub fn try_withdraw(&mut self, amount: impl Into<Amount>) -> Result<(), WithdrawalError> {
        let amount = amount.into();
        let result = self.apply_withdrawal(amount);
        self.log_result("withdrawal", amount, &result);
        result
    }

    pub fn try_take_credit(&mut self, amount: impl Into<Amount>) -> Result<(), CreditError> {
        let amount = amount.into();
        let result = self.apply_take_credit(amount);
        self.log_result("take credit", amount, &result);
        result
    }

    pub fn try_pay_credit(&mut self, amount: impl Into<Amount>) -> Result<(), CreditError> {
        let amount = amount.into();
        let result = self.apply_pay_credit(amount);
        self.log_result("pay credit", amount, &result);
        result
    }

    /// Deposit balance plus outstanding credit loan.
    pub fn balance(&self) -> Amount {
        self.balances.total()
    }

    pub fn deposit_balance(&self) -> Amount {
        self.balances.deposit
    }

    pub fn credit_loan(&self) -> Amount {
        self.balances.credit_loan
    }

    pub fn credit_limit(&self) -> Amount {
        self.credit_limit
    }

    /// Amount that could be drawn right now by [`take_credit`](Self::take_credit).
    pub fn available_credit(&self) -> Amount {
        if self.balances.has_outstanding_loan() {
            Amount::ZERO
        } else {
            self.credit_limit
        }
    }

    /// All recorded transactions, oldest first.
    pub fn transaction_history(&self) -> &[Transaction] {
        &self.history
    }
}

/// Private API
impl BankAccount {
    /// Small helper to log operation results
    fn log_result<E: std::fmt::Display>(&self, op: &str, amount: Amount, result: &Result<(), E>) {
        match result {
            Ok(()) => {
                info!(
                    amount = %amount,
                    balance = %self.balance(),
                    credit_loan = %self.balances.credit_loan,
                    "{op} applied"
                );
            }
            Err(e) => {
                info!(
                    amount = %amount,
                    reason = %e,
                    "{op} skipped"
                );
            }
        }
    }

    fn record(&mut self, amount: Amount, kind: TransactionKind) {
        self.history.push(Transaction::new(amount, kind));
    }

    /// Apply a deposit:
    /// - Ensure amount is positive and finite
    /// - Increment deposit balance
    fn apply_deposit(&mut self, amount: Amount) -> Result<(), DepositError> {
        if !amount.is_valid_movement() {
            return Err(DepositError::InvalidAmount(amount));
        }

        self.balances.deposit += amount;
        self.record(amount, TransactionKind::Deposit);

        Ok(())
    }

    /// Apply a withdrawal:
    /// - Ensure amount is positive, finite and covered by the total balance
    /// - Decrement deposit balance (the loan is untouched, so the deposit
    ///   balance may go negative when credit funds are spent)
    fn apply_withdrawal(&mut self, amount: Amount) -> Result<(), WithdrawalError> {
        if !amount.is_valid_movement() {
            return Err(WithdrawalError::InvalidAmount(amount));
        }

        let balance = self.balance();
        if amount > balance {
            return Err(WithdrawalError::InsufficientFunds(balance, amount));
        }

        self.balances.deposit -= amount;
        self.record(amount, TransactionKind::Withdrawal);

        Ok(())
    }

    /// Apply a credit drawdown:
    /// - Ensure amount is positive, finite and within the credit limit
    /// - Ensure no loan is outstanding
    fn apply_take_credit(&mut self, amount: Amount) -> Result<(), CreditError> {
        if !amount.is_valid_movement() {
            return Err(CreditError::InvalidAmount(CreditOperation::Take, amount));
        }

        if amount > self.credit_limit {
            return Err(CreditError::LimitExceeded(amount, self.credit_limit));
        }

        if self.balances.has_outstanding_loan() {
            return Err(CreditError::LoanOutstanding(self.balances.credit_loan));
        }

        self.balances.credit_loan += amount;
        self.record(amount, TransactionKind::Credit);

        Ok(())
    }

    /// Apply a credit repayment:
    /// - Ensure amount is positive, finite and does not exceed the loan
    /// - Decrement the loan only; deposited funds are not consumed
    fn apply_pay_credit(&mut self, amount: Amount) -> Result<(), CreditError> {
        if !amount.is_valid_movement() {
            return Err(CreditError::InvalidAmount(CreditOperation::Pay, amount));
        }

        let loan = self.balances.credit_loan;
        if amount > loan {
            return Err(CreditError::ExceedsLoan(amount, loan));
        }

        self.balances.credit_loan -= amount;
        self.record(amount, TransactionKind::Credit);

        Ok(())
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new()
    }
}
