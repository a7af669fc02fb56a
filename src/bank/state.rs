//! The `State` module owns the accounts and executes commands against them.
use tokio::sync::mpsc;

use crate::bank::{
    Account, AccountError, AccountKind, Command,
    types::{Money, format_money},
};

/// Represents the state of the banking system, including all accounts.
///
/// Accounts are kept in creation order and resolved by a linear first-match
/// scan over owner names. Duplicate owners are permitted; every lookup then
/// settles on the earliest account created under that name.
pub struct State {
    /// All accounts, in creation order.
    accounts: Vec<Account>,
    /// A channel receiver for incoming commands.
    receiver: mpsc::Receiver<Command>,
}

impl State {
    /// Creates a new instance of `State` with no accounts.
    pub fn new(receiver: mpsc::Receiver<Command>) -> Self {
        State {
            accounts: Vec::new(),
            receiver,
        }
    }

    /// Creates an account and prints the creation confirmation. Owner names
    /// are not checked for uniqueness.
    pub fn create(&mut self, owner: String, kind: AccountKind, initial_deposit: Money) {
        let account = Account::new(owner, kind, initial_deposit);
        println!(
            "A new {} account created for {} with an initial balance of ${}.",
            kind.label(),
            account.owner(),
            format_money(initial_deposit)
        );
        self.accounts.push(account);
    }

    /// Resolves the first account created under the given owner name.
    fn position(&self, owner: &str) -> Result<usize, AccountError> {
        self.accounts
            .iter()
            .position(|account| account.owner() == owner)
            .ok_or_else(|| AccountError::AccountNotFound(owner.to_string()))
    }

    /// Executes a command, resolving the accounts it names. Success output
    /// is printed by the account operations themselves.
    fn process_command(&mut self, command: Command) -> Result<(), AccountError> {
        match command {
            Command::Create {
                owner,
                kind,
                initial_deposit,
            } => {
                self.create(owner, kind, initial_deposit);
                Ok(())
            }
            Command::Deposit { owner, amount } => {
                let index = self.position(&owner)?;
                self.accounts[index].deposit(amount);
                Ok(())
            }
            Command::Withdraw { owner, amount } => {
                let index = self.position(&owner)?;
                self.accounts[index].withdraw(amount)
            }
            Command::Transfer { from, to, amount } => self.transfer(&from, &to, amount),
            Command::Activate { owner } => {
                let index = self.position(&owner)?;
                self.accounts[index].set_active(true)
            }
            Command::Deactivate { owner } => {
                let index = self.position(&owner)?;
                self.accounts[index].set_active(false)
            }
            Command::View { owner } => {
                let index = self.position(&owner)?;
                self.accounts[index].view();
                Ok(())
            }
        }
    }

    /// Moves money between two accounts. The sender is resolved and charged
    /// first; the recipient is credited the amount net of the sender's fee.
    fn transfer(&mut self, from: &str, to: &str, amount: Money) -> Result<(), AccountError> {
        let from_index = self.position(from)?;
        let to_index = self.position(to)?;
        let credited = self.accounts[from_index].transfer_out(amount)?;
        self.accounts[to_index].receive(credited);
        // Re-read the sender after the credit so a self-transfer reports the
        // balance it actually ends up with.
        let sender = &self.accounts[from_index];
        println!(
            "{} successfully transferred ${} to {}. New Balance: ${}. Transaction Fee: ${} ({}%) in the system.",
            sender.owner(),
            format_money(credited),
            to,
            format_money(sender.balance()),
            format_money(amount - credited),
            sender.kind().fee_percent()
        );
        Ok(())
    }

    /// Runs the command loop, processing commands from the receiver until
    /// the sending side closes. Operation errors are part of the printed
    /// output and never stop the loop.
    pub async fn run(&mut self) {
        while let Some(command) = self.receiver.recv().await {
            if let Err(e) = self.process_command(command) {
                println!("{e}");
            }
        }
    }
}
