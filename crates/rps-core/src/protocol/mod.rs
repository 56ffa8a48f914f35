//! Protocol types, sessions and receipts.

mod messages;
mod session;
mod types;

pub use messages::RoundReceipt;
pub use session::{Session, Verdict};
pub use types::{Outcome, Player, RoundId};
