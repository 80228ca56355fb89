//! # sl-sui-mock
//!
//! Stand-ins for the Sui side of SuiLaughs: a wallet that hands out random
//! addresses and "executes" `joke_platform` calls after a fixed delay, and
//! an in-memory ledger the wallet writes to.

pub mod identity;
pub mod ledger;
pub mod wallet;

pub use identity::RandomIdentity;
pub use ledger::MockLedger;
pub use wallet::MockWallet;
