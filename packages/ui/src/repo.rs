//! Shared store constructor for all platforms.
//!
//! Returns an [`AppStore`] backed by the hosted database when a URL is
//! configured (see [`store::PostboardConfig::load`]), otherwise by an
//! in-memory [`store::MemoryStore`] so the app still runs offline.
//!
//! Build it once at the root with `use_context_provider(make_store)` and read it
//! from views with [`use_post_store`]; the in-memory variant only keeps its
//! posts across views if they share the one instance.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use store::error::Result;
use store::{HttpStore, MemoryStore, NewPost, PostPatch, PostRecord, PostStore, PostboardConfig};

/// The store the running app talks to.
#[derive(Clone, Debug)]
pub enum AppStore {
    Remote(HttpStore),
    Local(MemoryStore),
}

impl PostStore for AppStore {
    async fn list_all(&self) -> Result<BTreeMap<String, PostRecord>> {
        match self {
            AppStore::Remote(s) => s.list_all().await,
            AppStore::Local(s) => s.list_all().await,
        }
    }

    async fn read_one(&self, id: &str) -> Result<Option<PostRecord>> {
        match self {
            AppStore::Remote(s) => s.read_one(id).await,
            AppStore::Local(s) => s.read_one(id).await,
        }
    }

    async fn create(&self, post: &NewPost) -> Result<String> {
        match self {
            AppStore::Remote(s) => s.create(post).await,
            AppStore::Local(s) => s.create(post).await,
        }
    }

    async fn update(&self, id: &str, patch: &PostPatch) -> Result<()> {
        match self {
            AppStore::Remote(s) => s.update(id, patch).await,
            AppStore::Local(s) => s.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            AppStore::Remote(s) => s.delete(id).await,
            AppStore::Local(s) => s.delete(id).await,
        }
    }
}

/// Create the store for the current configuration.
pub fn make_store() -> AppStore {
    make_store_for(&PostboardConfig::load())
}

/// Create the store for an explicit configuration.
pub fn make_store_for(config: &PostboardConfig) -> AppStore {
    let Some(url) = config.database_url() else {
        tracing::warn!("no database URL configured; posts are kept in memory only");
        return AppStore::Local(MemoryStore::new());
    };

    match HttpStore::new(url) {
        Ok(store) => {
            tracing::info!("using remote store at {}", store.base_url());
            AppStore::Remote(store)
        }
        Err(e) => {
            tracing::error!("invalid database URL {url:?}: {e}; falling back to memory");
            AppStore::Local(MemoryStore::new())
        }
    }
}

/// Consume the [`AppStore`] from context.
pub fn use_post_store() -> AppStore {
    use_context::<AppStore>()
}
