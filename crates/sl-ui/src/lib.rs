//! # sl-ui
//!
//! Askama templates for the SuiLaughs feed. Templates only print what the
//! view models in [`view`] already formatted.

pub mod view;

use askama::Template;
use chrono::{DateTime, Utc};
use sl_core::format::short_address;
use sl_core::models::{Category, Post, PostKind, WalletKind};
use sl_core::service::FeedSnapshot;
use sl_core::store::FeedStats;

pub use view::{CategoryOption, PostCard, WalletOption};

/// Per-request render choices.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub tab: PostKind,
    /// Alert banner text
    pub notice: Option<String>,
    pub estimated_gas_sui: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            tab: PostKind::Joke,
            notice: None,
            estimated_gas_sui: 0.001,
        }
    }
}

#[derive(Template)]
#[template(path = "feed.html")]
pub struct FeedTemplate {
    pub title: String,
    pub stats: FeedStats,
    pub jokes: Vec<PostCard>,
    pub memes: Vec<PostCard>,
    pub connected: bool,
    /// Truncated address for the wallet widget
    pub address: String,
    pub wallets: Vec<WalletOption>,
    pub categories: Vec<CategoryOption>,
    pub active_tab: String,
    pub notice: Option<String>,
    pub gas_estimate: String,
    pub submitting: bool,
}

impl FeedTemplate {
    pub fn from_snapshot(snapshot: &FeedSnapshot, options: PageOptions, now: DateTime<Utc>) -> Self {
        let cards = |posts: &[Post]| {
            posts.iter().map(|p| PostCard::from_post(p, now)).collect::<Vec<_>>()
        };
        Self {
            title: "SuiLaughs - Decentralized Comedy Platform".to_string(),
            stats: snapshot.stats,
            jokes: cards(snapshot.jokes.as_slice()),
            memes: cards(snapshot.memes.as_slice()),
            connected: snapshot.session.is_connected(),
            address: snapshot.session.address().map(short_address).unwrap_or_default(),
            wallets: WalletKind::ALL.into_iter().map(WalletOption::from).collect(),
            categories: Category::ALL.into_iter().map(CategoryOption::from).collect(),
            active_tab: options.tab.as_path().to_string(),
            notice: options.notice,
            gas_estimate: format!("~{} SUI", options.estimated_gas_sui),
            submitting: snapshot.submitting,
        }
    }
}
