//! Banking module for handling accounts, commands, and state management.
mod account;
mod command;
mod state;
mod transaction;
mod types;

pub use account::*;
pub use command::*;
pub use state::*;
pub use transaction::*;
pub use types::*;
