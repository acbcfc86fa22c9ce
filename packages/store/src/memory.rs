use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::models::{NewPost, PostPatch, PostRecord};
use crate::client::PostStore;

/// In-memory PostStore for testing and as the fallback when no database URL is configured.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    posts: Arc<Mutex<BTreeMap<String, PostRecord>>>,
    next_key: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with records under fixed keys.
    pub fn with_posts(posts: impl IntoIterator<Item = (String, PostRecord)>) -> Self {
        let store = Self::new();
        store.lock().extend(posts);
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, PostRecord>> {
        // A poisoned map is still a consistent map; every write is a single insert or remove.
        self.posts.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn assign_key(&self) -> String {
        let n = self.next_key.fetch_add(1, Ordering::Relaxed);
        format!("-M{n:08}")
    }
}

impl PostStore for MemoryStore {
    async fn list_all(&self) -> Result<BTreeMap<String, PostRecord>> {
        Ok(self.lock().clone())
    }

    async fn read_one(&self, id: &str) -> Result<Option<PostRecord>> {
        Ok(self.lock().get(id).cloned())
    }

    async fn create(&self, post: &NewPost) -> Result<String> {
        let id = self.assign_key();
        self.lock().insert(id.clone(), post.clone().into());
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &PostPatch) -> Result<()> {
        // PATCH on a missing key creates it, same as the hosted store.
        let mut posts = self.lock();
        let record = posts.entry(id.to_string()).or_default();
        patch.apply_to(record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.lock().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostInput;

    fn new_post(caption: &str, created_at: i64) -> NewPost {
        NewPost::new(
            PostInput {
                caption: caption.to_string(),
                image: format!("http://img/{caption}.png"),
            },
            "u1",
            created_at,
        )
    }

    #[tokio::test]
    async fn test_create_and_read() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.list_all().await.unwrap().is_empty());

        let id = store.create(&new_post("hello", 10)).await.unwrap();

        let record = store.read_one(&id).await.unwrap().unwrap();
        assert_eq!(record.caption, "hello");
        assert_eq!(record.uid, "u1");
        assert_eq!(record.created_at, 10);
    }

    #[tokio::test]
    async fn test_keys_are_unique() {
        let store = MemoryStore::new();
        let first = store.create(&new_post("a", 1)).await.unwrap();
        let second = store.create(&new_post("b", 2)).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let store = MemoryStore::new();
        let id = store.create(&new_post("old", 100)).await.unwrap();

        let patch = PostPatch {
            caption: "new".into(),
            image: "http://img/new.png".into(),
            uid: "u1".into(),
        };
        store.update(&id, &patch).await.unwrap();

        let record = store.read_one(&id).await.unwrap().unwrap();
        assert_eq!(record.caption, "new");
        assert_eq!(record.created_at, 100);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let first = store.create(&new_post("first", 1)).await.unwrap();
        store.create(&new_post("second", 2)).await.unwrap();

        store.delete(&first).await.unwrap();

        let posts = store.list_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(store.read_one(&first).await.unwrap().is_none());
    }
}
