//! Account model and the operations a command can perform on it.
use thiserror::Error;

use crate::bank::{
    Transaction,
    types::{Money, format_money},
};

/// The kind of an account. Kinds differ only in the fee charged on
/// withdrawals and outgoing transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Checking,
    Business,
}

impl AccountKind {
    /// The fee rate in basis points of the transaction amount.
    fn fee_basis_points(self) -> Money {
        match self {
            AccountKind::Savings => 150,
            AccountKind::Checking => 200,
            AccountKind::Business => 250,
        }
    }

    /// Computes the fee charged on a withdrawal or transfer of `amount`.
    pub fn fee(self, amount: Money) -> Money {
        amount * self.fee_basis_points() / 10_000
    }

    /// The kind name as printed in confirmations and views.
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
            AccountKind::Business => "Business",
        }
    }

    /// The fee rate as printed in confirmations, e.g. `1.5`.
    pub fn fee_percent(self) -> &'static str {
        match self {
            AccountKind::Savings => "1.5",
            AccountKind::Checking => "2.0",
            AccountKind::Business => "2.5",
        }
    }
}

/// Represents a bank account held by a named owner.
pub struct Account {
    /// The owner's name. Also the key the registry resolves commands by.
    owner: String,

    /// The kind of the account, fixed at creation.
    kind: AccountKind,

    /// The current balance.
    balance: Money,

    /// Whether the account accepts withdrawals and transfers.
    active: bool,

    /// Chronological transaction history, starting with the initial deposit.
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an active account seeded with an initial deposit.
    pub fn new(owner: String, kind: AccountKind, initial_deposit: Money) -> Self {
        Account {
            owner,
            kind,
            balance: initial_deposit,
            active: true,
            transactions: vec![Transaction::InitialDeposit(initial_deposit)],
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deposits the specified amount. Deposits are accepted even while the
    /// account is deactivated.
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
        self.transactions.push(Transaction::Deposit(amount));
        println!(
            "{} successfully deposited ${}. New Balance: ${}.",
            self.owner,
            format_money(amount),
            format_money(self.balance)
        );
    }

    /// Withdraws the specified amount. The full amount is debited; the fee
    /// is reported against the amount paid out, not charged on top.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        self.check_debit(amount)?;
        let fee = self.kind.fee(amount);
        self.balance -= amount;
        self.transactions.push(Transaction::Withdrawal(amount));
        println!(
            "{} successfully withdrew ${}. New Balance: ${}. Transaction Fee: ${} ({}%) in the system.",
            self.owner,
            format_money(amount - fee),
            format_money(self.balance),
            format_money(fee),
            self.kind.fee_percent()
        );
        Ok(())
    }

    /// Debits the specified amount as the sending side of a transfer and
    /// returns the net amount to credit to the recipient. The fee always
    /// follows the sender's kind.
    pub fn transfer_out(&mut self, amount: Money) -> Result<Money, AccountError> {
        self.check_debit(amount)?;
        self.balance -= amount;
        self.transactions.push(Transaction::Transfer(amount));
        Ok(amount - self.kind.fee(amount))
    }

    /// Credits the receiving side of a transfer. No ledger entry is recorded
    /// for the recipient.
    pub fn receive(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Activates or deactivates the account. Returns an error if the account
    /// is already in the requested state.
    pub fn set_active(&mut self, active: bool) -> Result<(), AccountError> {
        if self.active == active {
            return Err(AccountError::AlreadyInState {
                owner: self.owner.clone(),
                requested: active,
            });
        }
        self.active = active;
        if active {
            println!("{}'s account is now activated.", self.owner);
        } else {
            println!("{}'s account is now deactivated.", self.owner);
        }
        Ok(())
    }

    /// Prints the account details and full transaction history on one line.
    pub fn view(&self) {
        let history = self
            .transactions
            .iter()
            .map(Transaction::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}'s Account: Type: {}, Balance: ${}, State: {}, Transactions: [{}].",
            self.owner,
            self.kind.label(),
            format_money(self.balance),
            if self.active { "Active" } else { "Inactive" },
            history
        );
    }

    /// Guards shared by withdraw and transfer: the account must be active
    /// and the balance must cover the full requested amount.
    fn check_debit(&self, amount: Money) -> Result<(), AccountError> {
        if !self.active {
            return Err(AccountError::InactiveAccount(self.owner.clone()));
        }
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds(self.owner.clone()));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

fn state_label(requested: &bool) -> &'static str {
    if *requested { "activated" } else { "deactivated" }
}

/// Errors that can occur while executing a command against an account.
/// The `Display` form of each variant is the exact line printed for it.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Error: Account {0} does not exist.")]
    AccountNotFound(String),
    #[error("Error: Insufficient funds for {0}.")]
    InsufficientFunds(String),
    #[error("Error: Account {0} is inactive.")]
    InactiveAccount(String),
    #[error("Error: Account {} is already {}.", .owner, state_label(.requested))]
    AlreadyInState { owner: String, requested: bool },
}

#[cfg(test)]
mod tests {
    use crate::bank::{Account, AccountError, AccountKind, Transaction};

    #[test]
    fn test_new_account_starts_with_initial_deposit_entry() {
        let account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        assert_eq!(account.balance, 1_000_000);
        assert!(account.active);
        assert_eq!(
            account.transactions,
            vec![Transaction::InitialDeposit(1_000_000)]
        );
    }

    #[test]
    fn test_deposit() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        account.deposit(200_000);
        assert_eq!(account.balance, 1_200_000);
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(account.transactions[1], Transaction::Deposit(200_000));
    }

    #[test]
    fn test_deposit_ignores_inactive_state() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        account.set_active(false).unwrap();
        account.deposit(200_000);
        assert_eq!(account.balance, 1_200_000);
        assert_eq!(account.transactions.len(), 2);
    }

    #[test]
    fn test_withdraw_debits_full_amount() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        assert!(account.withdraw(50_000).is_ok());
        assert_eq!(account.balance, 950_000);
        assert_eq!(account.transactions[1], Transaction::Withdrawal(50_000));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 40_000);
        assert!(matches!(
            account.withdraw(50_000),
            Err(AccountError::InsufficientFunds(_))
        ));
        assert_eq!(account.balance, 40_000);
        assert_eq!(account.transactions.len(), 1);
    }

    #[test]
    fn test_withdraw_on_inactive_account() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        account.set_active(false).unwrap();
        assert!(matches!(
            account.withdraw(50_000),
            Err(AccountError::InactiveAccount(_))
        ));
        assert_eq!(account.balance, 1_000_000);
    }

    #[test]
    fn test_withdraw_checks_balance_against_requested_amount() {
        // A balance covering the post-fee payout but not the full request
        // must still be rejected.
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 99_000);
        assert!(matches!(
            account.withdraw(100_000),
            Err(AccountError::InsufficientFunds(_))
        ));
    }

    #[test]
    fn test_fee_rates_by_kind() {
        assert_eq!(AccountKind::Savings.fee(100_000), 1_500);
        assert_eq!(AccountKind::Checking.fee(100_000), 2_000);
        assert_eq!(AccountKind::Business.fee(100_000), 2_500);
    }

    #[test]
    fn test_transfer_out_uses_sender_fee_rate() {
        let mut alice = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        let mut bob = Account::new("Bob".to_string(), AccountKind::Checking, 0);
        let credited = alice.transfer_out(100_000).unwrap();
        bob.receive(credited);
        assert_eq!(credited, 98_500);
        assert_eq!(alice.balance, 900_000);
        assert_eq!(bob.balance, 98_500);
        assert_eq!(alice.transactions[1], Transaction::Transfer(100_000));
    }

    #[test]
    fn test_receive_records_no_ledger_entry() {
        let mut bob = Account::new("Bob".to_string(), AccountKind::Checking, 0);
        bob.receive(98_500);
        assert_eq!(bob.balance, 98_500);
        assert_eq!(bob.transactions.len(), 1);
    }

    #[test]
    fn test_transfer_out_on_inactive_account() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        account.set_active(false).unwrap();
        assert!(matches!(
            account.transfer_out(100_000),
            Err(AccountError::InactiveAccount(_))
        ));
        assert_eq!(account.balance, 1_000_000);
        assert_eq!(account.transactions.len(), 1);
    }

    #[test]
    fn test_set_active_round_trip() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        assert!(account.set_active(false).is_ok());
        assert!(!account.active);
        assert!(account.set_active(true).is_ok());
        assert!(account.active);
        // State changes never touch the ledger.
        assert_eq!(account.transactions.len(), 1);
    }

    #[test]
    fn test_set_active_already_in_state() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        assert!(matches!(
            account.set_active(true),
            Err(AccountError::AlreadyInState {
                requested: true,
                ..
            })
        ));
        assert!(account.active);
    }

    #[test]
    fn test_already_in_state_messages() {
        let mut account = Account::new("Alice".to_string(), AccountKind::Savings, 1_000_000);
        let err = account.set_active(true).unwrap_err();
        assert_eq!(err.to_string(), "Error: Account Alice is already activated.");
        account.set_active(false).unwrap();
        let err = account.set_active(false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Account Alice is already deactivated."
        );
    }
}
