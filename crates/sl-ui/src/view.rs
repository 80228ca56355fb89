//! View models: pre-formatted values the templates print as-is.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sl_core::format::{short_address, time_ago};
use sl_core::models::{Category, Payload, Post, WalletKind};

const FALLBACK_IMAGE: &str = "/placeholder.svg";

/// One joke or meme card.
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    /// "jokes" or "memes", used to build action URLs
    pub kind: &'static str,
    pub id: String,
    pub category: &'static str,
    pub on_chain: bool,
    pub time_ago: String,
    /// Joke text or meme title
    pub headline: String,
    /// Escaped joke text with line breaks; empty for memes
    pub body_html: String,
    /// Empty for jokes
    pub image_url: String,
    pub author: String,
    pub likes: u64,
    /// Filled heart
    pub liked: bool,
}

impl PostCard {
    pub fn from_post(post: &Post, now: DateTime<Utc>) -> Self {
        let (body_html, image_url) = match &post.payload {
            Payload::Joke { content } => (sanitize_content(content), String::new()),
            Payload::Meme { image_url, .. } if image_url.trim().is_empty() => {
                (String::new(), FALLBACK_IMAGE.to_string())
            }
            Payload::Meme { image_url, .. } => (String::new(), image_url.clone()),
        };
        Self {
            kind: post.kind().as_path(),
            id: post.id.to_string(),
            category: post.category.label(),
            on_chain: post.persisted,
            time_ago: time_ago(post.created_at, now),
            headline: post.headline().to_string(),
            body_html,
            image_url,
            author: short_address(&post.author),
            likes: post.likes,
            liked: post.likes > 0,
        }
    }
}

/// Entry in the connect-wallet picker.
#[derive(Debug, Clone, Serialize)]
pub struct WalletOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<WalletKind> for WalletOption {
    fn from(wallet: WalletKind) -> Self {
        Self {
            slug: wallet.slug(),
            label: wallet.label(),
            description: wallet.description(),
        }
    }
}

/// Entry in the category select.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<Category> for CategoryOption {
    fn from(category: Category) -> Self {
        Self {
            slug: category.slug(),
            label: category.label(),
        }
    }
}

/// Escapes HTML and turns newlines into `<br />`.
pub fn sanitize_content(raw: &str) -> String {
    raw.lines()
        .map(|line| html_escape::encode_safe(line).to_string())
        .collect::<Vec<_>>()
        .join("<br />")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sl_core::models::PostId;

    fn meme(image_url: &str) -> Post {
        Post {
            id: PostId::from("9"),
            payload: Payload::Meme {
                title: "Gas fees".into(),
                image_url: image_url.into(),
            },
            author: "0x7777aaaabbbb8888".into(),
            likes: 0,
            category: Category::Crypto,
            created_at: Utc::now() - Duration::hours(30),
            persisted: false,
        }
    }

    #[test]
    fn sanitize_escapes_and_breaks_lines() {
        assert_eq!(
            sanitize_content("<i>Knock & knock\nWho is there"),
            "&lt;i&gt;Knock &amp; knock<br />Who is there"
        );
    }

    #[test]
    fn meme_card_falls_back_to_placeholder() {
        let card = PostCard::from_post(&meme("  "), Utc::now());
        assert_eq!(card.image_url, "/placeholder.svg");
        assert_eq!(card.kind, "memes");
        assert_eq!(card.time_ago, "1d ago");
        assert_eq!(card.author, "0x7777...8888");
        assert!(!card.liked);
        assert!(card.body_html.is_empty());
    }

    #[test]
    fn meme_card_keeps_image() {
        let card = PostCard::from_post(&meme("/gas.png"), Utc::now());
        assert_eq!(card.image_url, "/gas.png");
        assert_eq!(card.category, "Crypto");
    }
}
