//! # Ledger Types
//!
//! Shapes of the Sui `joke_platform` package calls and of the objects it
//! owns. Nothing here talks to a network; `WalletProvider` and
//! `LedgerClient` implementations carry these values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::{Category, Payload, Post, PostId, PostKind};

const MODULE: &str = "joke_platform";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

impl FromStr for Network {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" => Ok(Network::Localnet),
            other => Err(AppError::ValidationError(format!("unknown network '{}'", other))),
        }
    }
}

/// A single argument of a move call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallArg {
    /// Plain value (string, bool, number)
    Pure(Value),
    /// Reference to an on-chain object by id
    Object(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCall {
    /// `{package}::{module}::{function}`
    pub target: String,
    pub arguments: Vec<CallArg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub calls: Vec<MoveCall>,
    pub show_effects: bool,
}

impl Transaction {
    pub fn single(call: MoveCall) -> Self {
        Self {
            calls: vec![call],
            show_effects: true,
        }
    }

    /// Serialized form that a wallet would sign.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Effects of an executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub digest: String,
    /// Object ids created by the transaction
    pub created: Vec<String>,
}

/// Query for `LedgerClient::get_owned_objects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectFilter {
    pub owner: String,
    pub struct_type: String,
}

/// An object as returned by a ledger query, with its raw move fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerObject {
    pub object_id: String,
    pub struct_type: String,
    pub fields: Value,
}

/// Builder for calls into the `joke_platform` move package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokePlatform {
    package_id: String,
}

impl JokePlatform {
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
        }
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    fn target(&self, function: &str) -> String {
        format!("{}::{}::{}", self.package_id, MODULE, function)
    }

    /// Fully qualified type of a struct in the package, e.g. `Joke`.
    pub fn struct_type(&self, name: &str) -> String {
        self.target(name)
    }

    pub fn add_joke(&self, content: &str, category: Category, store_on_chain: bool) -> Transaction {
        Transaction::single(MoveCall {
            target: self.target("add_joke"),
            arguments: vec![
                CallArg::Pure(json!(content)),
                CallArg::Pure(json!(category.slug())),
                CallArg::Pure(json!(store_on_chain)),
            ],
        })
    }

    pub fn add_meme(&self, title: &str, image_url: &str, category: Category) -> Transaction {
        Transaction::single(MoveCall {
            target: self.target("add_meme"),
            arguments: vec![
                CallArg::Pure(json!(title)),
                CallArg::Pure(json!(image_url)),
                CallArg::Pure(json!(category.slug())),
            ],
        })
    }

    pub fn like_joke(&self, joke_id: &str) -> Transaction {
        Transaction::single(MoveCall {
            target: self.target("like_joke"),
            arguments: vec![CallArg::Object(joke_id.to_string())],
        })
    }

    /// The transaction that stores a validated post payload.
    pub fn store_post(&self, payload: &Payload, category: Category) -> Transaction {
        match payload {
            Payload::Joke { content } => self.add_joke(content, category, true),
            Payload::Meme { title, image_url } => self.add_meme(title, image_url, category),
        }
    }

    pub fn filter_for(&self, kind: PostKind) -> ObjectFilter {
        ObjectFilter {
            owner: self.package_id.clone(),
            struct_type: self.struct_type(kind.label()),
        }
    }
}

fn str_field(fields: &Value, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Move serializes u64 as strings; accept either form, default 0.
fn u64_field(fields: &Value, name: &str) -> u64 {
    match fields.get(name) {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Decodes a `Joke` or `Meme` object into a persisted post.
/// Missing fields fall back to empty strings and zero.
pub fn post_from_object(object: &LedgerObject, kind: PostKind) -> Post {
    let fields = &object.fields;
    let payload = match kind {
        PostKind::Joke => Payload::Joke {
            content: str_field(fields, "content"),
        },
        PostKind::Meme => Payload::Meme {
            title: str_field(fields, "title"),
            image_url: str_field(fields, "image_url"),
        },
    };
    let timestamp = i64::try_from(u64_field(fields, "timestamp")).unwrap_or(0);

    Post {
        id: PostId(object.object_id.clone()),
        payload,
        author: str_field(fields, "author"),
        likes: u64_field(fields, "likes"),
        category: str_field(fields, "category")
            .parse()
            .unwrap_or(Category::General),
        created_at: DateTime::<Utc>::from_timestamp_millis(timestamp).unwrap_or_default(),
        persisted: true,
    }
}
