//! Simulated browser wallet. Connecting hands out a random address;
//! executing a transaction waits out a fixed latency and then applies the
//! `joke_platform` calls to the shared [`MockLedger`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use log::info;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use sl_core::error::{AppError, Result};
use sl_core::ledger::{CallArg, LedgerObject, MoveCall, Transaction, TxReceipt};
use sl_core::models::WalletKind;
use sl_core::traits::{IdentityProvider, WalletProvider};

use crate::ledger::MockLedger;

pub struct MockWallet {
    identity: Arc<dyn IdentityProvider>,
    ledger: Arc<MockLedger>,
    /// Simulated network round trip for every transaction
    latency: Duration,
    account: Mutex<Option<String>>,
    nonce: AtomicU64,
}

impl MockWallet {
    pub fn new(identity: Arc<dyn IdentityProvider>, ledger: Arc<MockLedger>, latency: Duration) -> Self {
        Self {
            identity,
            ledger,
            latency,
            account: Mutex::new(None),
            nonce: AtomicU64::new(0),
        }
    }

    fn account(&self) -> anyhow::Result<String> {
        self.account
            .lock()
            .map_err(|_| anyhow::anyhow!("wallet account lock poisoned"))?
            .clone()
            .ok_or_else(|| anyhow::anyhow!("wallet is not connected"))
    }

    /// Hex SHA-256 over a per-wallet nonce and the base64 transaction bytes.
    fn digest(&self, tx: &Transaction) -> anyhow::Result<String> {
        let bytes = base64::engine::general_purpose::STANDARD.encode(tx.to_bytes()?);
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);

        let mut hasher = Sha256::new();
        hasher.update(nonce.to_le_bytes());
        hasher.update(bytes.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    fn apply(&self, call: &MoveCall, object_id: String, author: &str) -> anyhow::Result<Option<String>> {
        let (module_path, function) = call
            .target
            .rsplit_once("::")
            .ok_or_else(|| anyhow::anyhow!("malformed move call target {}", call.target))?;
        let timestamp = chrono::Utc::now().timestamp_millis().to_string();

        let (struct_name, fields) = match function {
            "add_joke" => (
                "Joke",
                json!({
                    "content": pure_str(&call.arguments, 0)?,
                    "category": pure_str(&call.arguments, 1)?,
                    "author": author,
                    "likes": "0",
                    "timestamp": timestamp,
                }),
            ),
            "add_meme" => (
                "Meme",
                json!({
                    "title": pure_str(&call.arguments, 0)?,
                    "image_url": pure_str(&call.arguments, 1)?,
                    "category": pure_str(&call.arguments, 2)?,
                    "author": author,
                    "likes": "0",
                    "timestamp": timestamp,
                }),
            ),
            "like_joke" => {
                let target = match call.arguments.first() {
                    Some(CallArg::Object(id)) => id,
                    _ => anyhow::bail!("like_joke expects an object argument"),
                };
                self.ledger.update_fields(target, |fields| {
                    let likes = fields
                        .get("likes")
                        .and_then(Value::as_str)
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(0);
                    fields["likes"] = json!((likes + 1).to_string());
                })?;
                return Ok(None);
            }
            other => anyhow::bail!("unknown function {}", other),
        };

        self.ledger.insert(LedgerObject {
            object_id: object_id.clone(),
            struct_type: format!("{}::{}", module_path, struct_name),
            fields,
        })?;
        Ok(Some(object_id))
    }
}

fn pure_str(arguments: &[CallArg], index: usize) -> anyhow::Result<String> {
    match arguments.get(index) {
        Some(CallArg::Pure(Value::String(s))) => Ok(s.clone()),
        other => anyhow::bail!("argument {} should be a string, got {:?}", index, other),
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn connect(&self, wallet: WalletKind) -> Result<String> {
        let address = self
            .identity
            .generate_address()
            .map_err(|e| AppError::ProviderUnavailable(e.to_string()))?;
        let mut account = self
            .account
            .lock()
            .map_err(|_| AppError::Internal("wallet account lock poisoned".into()))?;
        *account = Some(address.clone());
        info!("{} approved connection for {}", wallet.label(), address);
        Ok(address)
    }

    async fn sign_and_execute(&self, tx: &Transaction) -> anyhow::Result<TxReceipt> {
        tokio::time::sleep(self.latency).await;

        let author = self.account()?;
        let digest = self.digest(tx)?;
        let mut created = Vec::new();
        for (index, call) in tx.calls.iter().enumerate() {
            let mut hasher = Sha256::new();
            hasher.update(digest.as_bytes());
            hasher.update((index as u64).to_le_bytes());
            let object_id = format!("0x{}", hex::encode(hasher.finalize()));

            if let Some(id) = self.apply(call, object_id, &author)? {
                created.push(id);
            }
        }
        Ok(TxReceipt { digest, created })
    }
}
