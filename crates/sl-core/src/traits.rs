//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.
//! The feed never talks to a wallet or a fullnode except through them.

use async_trait::async_trait;

use crate::error::Result;
use crate::ledger::{LedgerObject, ObjectFilter, Transaction, TxReceipt};
use crate::models::WalletKind;

/// Browser wallet contract: connection handshake and transaction signing.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the address of the connected account.
    /// Fails with `ConnectionRefused` or `ProviderUnavailable`.
    async fn connect(&self, wallet: WalletKind) -> Result<String>;

    /// Signs and executes a transaction, waiting for its effects.
    async fn sign_and_execute(&self, tx: &Transaction) -> anyhow::Result<TxReceipt>;
}

/// Read-only fullnode queries.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn get_owned_objects(&self, filter: &ObjectFilter) -> anyhow::Result<Vec<LedgerObject>>;
}

/// Source of account addresses for simulated wallets.
pub trait IdentityProvider: Send + Sync {
    fn generate_address(&self) -> anyhow::Result<String>;
}
