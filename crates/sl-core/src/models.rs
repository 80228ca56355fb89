//! # Domain Models
//!
//! Jokes and memes share one `Post` shape and differ only in payload.
//! Seed posts use short numeric ids; posts created at runtime use UUID v7.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Identifier of a post, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Which collection a post lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Joke,
    Meme,
}

impl PostKind {
    /// Plural path segment used in routes and tab names.
    pub fn as_path(&self) -> &'static str {
        match self {
            PostKind::Joke => "jokes",
            PostKind::Meme => "memes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostKind::Joke => "Joke",
            PostKind::Meme => "Meme",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for PostKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "joke" | "jokes" => Ok(PostKind::Joke),
            "meme" | "memes" => Ok(PostKind::Meme),
            other => Err(AppError::NotFound("Post kind".into(), other.into())),
        }
    }
}

/// Fixed set of feed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DadJokes,
    Puns,
    Science,
    Tech,
    Food,
    Crypto,
    General,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::DadJokes,
        Category::Puns,
        Category::Science,
        Category::Tech,
        Category::Food,
        Category::Crypto,
        Category::General,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::DadJokes => "dad-jokes",
            Category::Puns => "puns",
            Category::Science => "science",
            Category::Tech => "tech",
            Category::Food => "food",
            Category::Crypto => "crypto",
            Category::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::DadJokes => "Dad Jokes",
            Category::Puns => "Puns",
            Category::Science => "Science",
            Category::Tech => "Tech",
            Category::Food => "Food",
            Category::Crypto => "Crypto",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    /// Accepts either the slug ("dad-jokes") or the label ("Dad Jokes").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::ValidationError(format!("unknown category '{}'", needle)))
    }
}

/// Kind-specific body of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    Joke { content: String },
    Meme { title: String, image_url: String },
}

/// A joke or meme with its engagement metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub payload: Payload,
    /// Wallet-address-like string of the poster
    pub author: String,
    pub likes: u64,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    /// Marked as stored on chain (mock)
    pub persisted: bool,
}

impl Post {
    pub fn kind(&self) -> PostKind {
        match self.payload {
            Payload::Joke { .. } => PostKind::Joke,
            Payload::Meme { .. } => PostKind::Meme,
        }
    }

    /// Joke text or meme title; what gets shared.
    pub fn headline(&self) -> &str {
        match &self.payload {
            Payload::Joke { content } => content,
            Payload::Meme { title, .. } => title,
        }
    }
}

/// User input from the add-post dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub kind: PostKind,
    pub content: String,
    pub title: String,
    pub image_url: String,
    pub category: Option<Category>,
    pub persist_on_chain: bool,
}

impl PostDraft {
    pub fn joke(content: impl Into<String>, category: Category) -> Self {
        Self {
            kind: PostKind::Joke,
            content: content.into(),
            title: String::new(),
            image_url: String::new(),
            category: Some(category),
            persist_on_chain: true,
        }
    }

    pub fn meme(title: impl Into<String>, image_url: impl Into<String>, category: Category) -> Self {
        Self {
            kind: PostKind::Meme,
            content: String::new(),
            title: title.into(),
            image_url: image_url.into(),
            category: Some(category),
            persist_on_chain: true,
        }
    }

    pub fn off_chain(mut self) -> Self {
        self.persist_on_chain = false;
        self
    }

    /// Checks the required fields for the draft's kind and returns the
    /// trimmed payload and category.
    pub fn validate(&self) -> Result<(Payload, Category), AppError> {
        let category = self
            .category
            .ok_or_else(|| AppError::ValidationError("category is required".into()))?;

        let payload = match self.kind {
            PostKind::Joke => Payload::Joke {
                content: required("content", &self.content)?,
            },
            PostKind::Meme => Payload::Meme {
                title: required("title", &self.title)?,
                image_url: required("image_url", &self.image_url)?,
            },
        };
        Ok((payload, category))
    }
}

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Wallets offered by the connect dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Suiet,
    Sui,
    Ethos,
}

impl WalletKind {
    pub const ALL: [WalletKind; 3] = [WalletKind::Suiet, WalletKind::Sui, WalletKind::Ethos];

    pub fn slug(&self) -> &'static str {
        match self {
            WalletKind::Suiet => "suiet",
            WalletKind::Sui => "sui",
            WalletKind::Ethos => "ethos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletKind::Suiet => "Suiet Wallet",
            WalletKind::Sui => "Sui Wallet",
            WalletKind::Ethos => "Ethos Wallet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WalletKind::Suiet => "Connect using Suiet",
            WalletKind::Sui => "Official Sui Wallet",
            WalletKind::Ethos => "Connect using Ethos",
        }
    }
}

impl FromStr for WalletKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletKind::ALL
            .into_iter()
            .find(|w| w.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::ProviderUnavailable(format!("unknown wallet '{}'", s.trim())))
    }
}

/// What the share button hands to the browser's share sheet or clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_post(post: &Post, url: &str) -> Self {
        Self {
            title: "Check out this joke!".to_string(),
            text: post.headline().to_string(),
            url: url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_slug_and_label() {
        assert_eq!("dad-jokes".parse::<Category>().unwrap(), Category::DadJokes);
        assert_eq!("Dad Jokes".parse::<Category>().unwrap(), Category::DadJokes);
        assert_eq!("CRYPTO".parse::<Category>().unwrap(), Category::Crypto);
        assert!(matches!("memes".parse::<Category>(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn blank_joke_content_is_rejected() {
        let draft = PostDraft::joke("   ", Category::Puns);
        assert!(matches!(draft.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn meme_needs_title_and_image() {
        let draft = PostDraft::meme("Gas fees", "", Category::Crypto);
        assert!(matches!(draft.validate(), Err(AppError::ValidationError(_))));

        let draft = PostDraft::meme(" Gas fees ", "/gas.png", Category::Crypto);
        let (payload, category) = draft.validate().unwrap();
        assert_eq!(
            payload,
            Payload::Meme { title: "Gas fees".into(), image_url: "/gas.png".into() }
        );
        assert_eq!(category, Category::Crypto);
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut draft = PostDraft::joke("An impasta!", Category::Food);
        draft.category = None;
        assert!(matches!(draft.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!("jokes".parse::<PostKind>().unwrap(), PostKind::Joke);
        assert_eq!("meme".parse::<PostKind>().unwrap(), PostKind::Meme);
        assert!("gifs".parse::<PostKind>().is_err());
    }
}
