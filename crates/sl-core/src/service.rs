//! # FeedService
//!
//! The page controller: owns the content store and the injected ports,
//! and turns user intents (connect, like, submit, share) into store
//! mutations. The store lock is never held across an `.await`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::ledger::{post_from_object, JokePlatform};
use crate::models::{Post, PostDraft, PostId, PostKind, SharePayload, WalletKind};
use crate::session::{ConnectStart, Session};
use crate::store::{ContentStore, FeedStats};
use crate::traits::{LedgerClient, WalletProvider};

/// Everything a page render needs, copied out of the store.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub jokes: Vec<Post>,
    pub memes: Vec<Post>,
    pub session: Session,
    pub stats: FeedStats,
    /// A submission is in flight; the submit button is disabled
    pub submitting: bool,
}

/// Holds the single submit slot; released on drop.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::SubmissionInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct FeedService {
    store: Mutex<ContentStore>,
    wallet: Arc<dyn WalletProvider>,
    ledger: Arc<dyn LedgerClient>,
    platform: JokePlatform,
    submitting: AtomicBool,
}

impl FeedService {
    pub fn new(
        store: ContentStore,
        wallet: Arc<dyn WalletProvider>,
        ledger: Arc<dyn LedgerClient>,
        platform: JokePlatform,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            wallet,
            ledger,
            platform,
            submitting: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ContentStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("content store lock poisoned".into()))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> Result<FeedSnapshot> {
        let store = self.lock()?;
        Ok(FeedSnapshot {
            jokes: store.list(PostKind::Joke).to_vec(),
            memes: store.list(PostKind::Meme).to_vec(),
            session: store.session().clone(),
            stats: store.stats(),
            submitting: self.is_submitting(),
        })
    }

    pub fn stats(&self) -> Result<FeedStats> {
        Ok(self.lock()?.stats())
    }

    pub fn list(&self, kind: PostKind) -> Result<Vec<Post>> {
        Ok(self.lock()?.list(kind).to_vec())
    }

    pub fn session(&self) -> Result<Session> {
        Ok(self.lock()?.session().clone())
    }

    /// Runs the wallet handshake. Connecting an already connected session
    /// returns the current address without asking the wallet again.
    pub async fn connect(&self, wallet: WalletKind) -> Result<String> {
        let start = self.lock()?.session_mut().begin_connect(wallet)?;
        if let ConnectStart::AlreadyConnected(address) = start {
            return Ok(address);
        }

        match self.wallet.connect(wallet).await {
            Ok(address) => {
                self.lock()?.session_mut().complete_connect(address.clone())?;
                info!("Wallet {} connected as {}", wallet.slug(), address);
                Ok(address)
            }
            Err(err) => {
                self.lock()?.session_mut().fail_connect();
                Err(err)
            }
        }
    }

    pub fn disconnect(&self) -> Result<()> {
        self.lock()?.session_mut().disconnect();
        info!("Wallet disconnected");
        Ok(())
    }

    /// Full address of the connected wallet, for the copy button.
    pub fn copy_address(&self) -> Result<String> {
        let store = self.lock()?;
        let address = store.session().require_connected("copy your address")?;
        Ok(address.to_string())
    }

    pub fn like(&self, kind: PostKind, id: &PostId) -> Result<Option<Post>> {
        let liked = self.lock()?.like_post(kind, id)?;
        match &liked {
            Some(post) => debug!("{} {} now has {} likes", kind.label(), id, post.likes),
            None => debug!("Like ignored, no {} with id {}", kind.label(), id),
        }
        Ok(liked)
    }

    /// Validates and appends a draft. On-chain drafts are first signed and
    /// executed through the wallet; the created object id becomes the post id.
    pub async fn submit(&self, draft: PostDraft) -> Result<Post> {
        let _guard = SubmitGuard::acquire(&self.submitting)?;

        let author = self.lock()?.check_submission(&draft)?;
        let (payload, category) = draft.validate()?;

        let id = if draft.persist_on_chain {
            let tx = self.platform.store_post(&payload, category);
            let receipt = self
                .wallet
                .sign_and_execute(&tx)
                .await
                .map_err(|e| AppError::SubmissionFailure(e.to_string()))?;
            info!("{} from {} stored on chain, digest {}", draft.kind.label(), author, receipt.digest);
            receipt
                .created
                .first()
                .map(|object_id| PostId(object_id.clone()))
                .unwrap_or_else(PostId::generate)
        } else {
            PostId::generate()
        };

        // The session may have changed while the wallet was busy; the post
        // keeps the author the transaction was signed for.
        let post = self.lock()?.append_post(&draft, id, author)?;
        info!("New {} {} added", draft.kind.label(), post.id);
        Ok(post)
    }

    pub fn share(&self, kind: PostKind, id: &PostId, url: &str) -> Result<SharePayload> {
        let store = self.lock()?;
        let post = store
            .get(kind, id)
            .ok_or_else(|| AppError::NotFound(kind.label().to_string(), id.to_string()))?;
        Ok(SharePayload::for_post(post, url))
    }

    /// Imports every joke and meme object the package owns. Query failures
    /// are logged and skipped; the feed keeps what it already has.
    pub async fn sync_from_ledger(&self) -> Result<usize> {
        let mut imported = 0;
        for kind in [PostKind::Joke, PostKind::Meme] {
            let filter = self.platform.filter_for(kind);
            let objects = match self.ledger.get_owned_objects(&filter).await {
                Ok(objects) => objects,
                Err(e) => {
                    warn!("Error fetching {}: {}", kind.as_path(), e);
                    continue;
                }
            };

            let mut store = self.lock()?;
            for object in &objects {
                if store.import_post(post_from_object(object, kind)) {
                    imported += 1;
                }
            }
        }
        info!("Imported {} posts from the ledger", imported);
        Ok(imported)
    }
}
