//! # Content Store
//!
//! The explicit state container behind the feed: both post collections
//! and the session. Posts are only ever appended or liked.

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Post, PostDraft, PostId, PostKind};
use crate::session::Session;

/// Aggregates shown in the stats cards. Recomputed from the collections
/// on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub total_jokes: usize,
    pub jokes_on_chain: usize,
    pub total_memes: usize,
    pub memes_on_chain: usize,
    pub total_likes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    jokes: Vec<Post>,
    memes: Vec<Post>,
    session: Session,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing posts, routing each to its collection.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut store = Self::new();
        for post in posts {
            store.import_post(post);
        }
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn list(&self, kind: PostKind) -> &[Post] {
        match kind {
            PostKind::Joke => &self.jokes,
            PostKind::Meme => &self.memes,
        }
    }

    pub fn get(&self, kind: PostKind, id: &PostId) -> Option<&Post> {
        self.list(kind).iter().find(|p| &p.id == id)
    }

    fn collection_mut(&mut self, kind: PostKind) -> &mut Vec<Post> {
        match kind {
            PostKind::Joke => &mut self.jokes,
            PostKind::Meme => &mut self.memes,
        }
    }

    /// Adds one like. Unknown ids are a silent no-op (`Ok(None)`).
    pub fn like_post(&mut self, kind: PostKind, id: &PostId) -> Result<Option<Post>> {
        self.session.require_connected("like content")?;

        let post = self.collection_mut(kind).iter_mut().find(|p| &p.id == id);
        Ok(post.map(|p| {
            p.likes += 1;
            p.clone()
        }))
    }

    /// Validates the draft and the session, returning the author address
    /// the new post would carry.
    pub fn check_submission(&self, draft: &PostDraft) -> Result<String> {
        draft.validate()?;
        let author = self.session.require_connected("submit content")?;
        Ok(author.to_string())
    }

    /// Appends a post built from the draft with zero likes.
    pub fn add_post(&mut self, draft: &PostDraft) -> Result<Post> {
        self.add_post_as(draft, PostId::generate())
    }

    /// Like `add_post`, but keeps a caller-chosen id (e.g. the object id
    /// the ledger assigned). A taken id is replaced by a fresh one.
    pub fn add_post_as(&mut self, draft: &PostDraft, id: PostId) -> Result<Post> {
        let author = self.session.require_connected("submit content")?.to_string();
        self.append_post(draft, id, author)
    }

    /// Appends a post for an author resolved earlier, without consulting the
    /// session. Used once a ledger transaction has already been executed on
    /// that author's behalf.
    pub fn append_post(&mut self, draft: &PostDraft, id: PostId, author: String) -> Result<Post> {
        let (payload, category) = draft.validate()?;

        let id = if self.get(draft.kind, &id).is_some() {
            PostId::generate()
        } else {
            id
        };
        let post = Post {
            id,
            payload,
            author,
            likes: 0,
            category,
            created_at: Utc::now(),
            persisted: draft.persist_on_chain,
        };
        self.collection_mut(draft.kind).push(post.clone());
        Ok(post)
    }

    /// Appends a post loaded from elsewhere (seed data, the ledger) unless
    /// its id is already taken. Returns whether it was appended.
    pub fn import_post(&mut self, post: Post) -> bool {
        let kind = post.kind();
        if self.get(kind, &post.id).is_some() {
            return false;
        }
        self.collection_mut(kind).push(post);
        true
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats {
            total_jokes: self.jokes.len(),
            jokes_on_chain: self.jokes.iter().filter(|p| p.persisted).count(),
            total_memes: self.memes.len(),
            memes_on_chain: self.memes.iter().filter(|p| p.persisted).count(),
            total_likes: self.jokes.iter().chain(&self.memes).map(|p| p.likes).sum(),
        }
    }
}
