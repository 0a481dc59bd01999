use crate::Amount;

/// The two independently tracked balances of an account.
///
/// Repaying credit lowers `credit_loan` only; withdrawals lower `deposit` only.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Balances {
    pub deposit: Amount,
    pub credit_loan: Amount,
}

impl Balances {
    pub fn total(&self) -> Amount {
        self.deposit + self.credit_loan
    }

    pub fn has_outstanding_loan(&self) -> bool {
        self.credit_loan != Amount::ZERO
    }
}
