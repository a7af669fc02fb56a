//! Ledger entries recorded against an account.
use std::fmt;

use crate::bank::types::{Money, format_money};

/// A single entry in an account's transaction history.
///
/// Every entry carries the gross amount of the operation; fees are never
/// recorded in the ledger, only in the printed confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// The deposit an account is opened with.
    InitialDeposit(Money),
    Deposit(Money),
    Withdrawal(Money),
    /// An outgoing transfer. The receiving account records nothing.
    Transfer(Money),
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::InitialDeposit(amount) => {
                write!(f, "Initial Deposit ${}", format_money(*amount))
            }
            Transaction::Deposit(amount) => write!(f, "Deposit ${}", format_money(*amount)),
            Transaction::Withdrawal(amount) => write!(f, "Withdrawal ${}", format_money(*amount)),
            Transaction::Transfer(amount) => write!(f, "Transfer ${}", format_money(*amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn test_ledger_entry_rendering() {
        assert_eq!(
            Transaction::InitialDeposit(1_000_000).to_string(),
            "Initial Deposit $1000.000"
        );
        assert_eq!(Transaction::Deposit(200_000).to_string(), "Deposit $200.000");
        assert_eq!(
            Transaction::Withdrawal(50_000).to_string(),
            "Withdrawal $50.000"
        );
        assert_eq!(
            Transaction::Transfer(100_000).to_string(),
            "Transfer $100.000"
        );
    }
}
