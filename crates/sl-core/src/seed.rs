//! Sample jokes and memes shown before anything has been submitted.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Payload, Post, PostId};
use crate::store::ContentStore;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=400";

#[allow(clippy::too_many_arguments)]
fn joke(id: &str, content: &str, author: &str, likes: u64, category: Category, minutes_ago: i64, on_chain: bool, now: DateTime<Utc>) -> Post {
    Post {
        id: PostId::from(id),
        payload: Payload::Joke { content: content.to_string() },
        author: author.to_string(),
        likes,
        category,
        created_at: now - Duration::minutes(minutes_ago),
        persisted: on_chain,
    }
}

#[allow(clippy::too_many_arguments)]
fn meme(id: &str, title: &str, author: &str, likes: u64, category: Category, minutes_ago: i64, on_chain: bool, now: DateTime<Utc>) -> Post {
    Post {
        id: PostId::from(id),
        payload: Payload::Meme {
            title: title.to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        author: author.to_string(),
        likes,
        category,
        created_at: now - Duration::minutes(minutes_ago),
        persisted: on_chain,
    }
}

/// Four jokes followed by three memes, timestamped relative to `now`.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        joke("1", "Why don't scientists trust atoms? Because they make up everything!", "0x1234...5678", 42, Category::Science, 60, true, now),
        joke("2", "I told my wife she was drawing her eyebrows too high. She looked surprised.", "0x9876...5432", 28, Category::DadJokes, 120, true, now),
        joke("3", "Why did the scarecrow win an award? He was outstanding in his field!", "0xabcd...efgh", 35, Category::Puns, 180, false, now),
        joke("4", "What do you call a fake noodle? An impasta!", "0x1111...2222", 67, Category::Food, 240, true, now),
        meme("1", "When you finally understand blockchain", "0x3333...4444", 89, Category::Tech, 30, true, now),
        meme("2", "Me explaining crypto to my parents", "0x5555...6666", 156, Category::Crypto, 90, true, now),
        meme("3", "When gas fees are higher than your transaction", "0x7777...8888", 203, Category::Crypto, 150, false, now),
    ]
}

pub fn sample_store() -> ContentStore {
    ContentStore::with_posts(sample_posts(Utc::now()))
}
