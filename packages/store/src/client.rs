//! # Remote store client
//!
//! All reads and writes go through the [`PostStore`] trait, so views and flows
//! work the same against the hosted JSON database ([`HttpStore`]) and the
//! in-process [`crate::MemoryStore`].
//!
//! ## Endpoints
//!
//! | Method | Verb | Path | Body |
//! |--------|------|------|------|
//! | [`list_all`](PostStore::list_all) | `GET` | `/posts.json` | none |
//! | [`read_one`](PostStore::read_one) | `GET` | `/posts/{id}.json` | none |
//! | [`create`](PostStore::create) | `POST` | `/posts.json` | [`NewPost`] |
//! | [`update`](PostStore::update) | `PATCH` | `/posts/{id}.json` | [`PostPatch`] |
//! | [`delete`](PostStore::delete) | `DELETE` | `/posts/{id}.json` | none |
//!
//! [`fetch_posts`](PostStore::fetch_posts) and [`fetch_post`](PostStore::fetch_post)
//! wrap the two reads with the adapters from [`crate::models`]; views use these
//! rather than the raw calls.
//!
//! The store answers `null` for an empty collection or a missing key; both are
//! mapped to an empty result rather than an error. Nothing here retries.

use std::collections::BTreeMap;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, StoreError};
use crate::models::{post_from_record, posts_from_collection, NewPost, Post, PostPatch, PostRecord};

/// Async interface to the posts collection.
pub trait PostStore {
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<BTreeMap<String, PostRecord>>>;
    fn read_one(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<PostRecord>>>;
    /// Returns the id the store assigned.
    fn create(
        &self,
        post: &NewPost,
    ) -> impl std::future::Future<Output = Result<String>>;
    fn update(
        &self,
        id: &str,
        patch: &PostPatch,
    ) -> impl std::future::Future<Output = Result<()>>;
    fn delete(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<()>>;

    /// List every post as entities, ids paired back up with their records.
    fn fetch_posts(&self) -> impl std::future::Future<Output = Result<Vec<Post>>> {
        async move { Ok(posts_from_collection(self.list_all().await?)) }
    }

    /// Read one post as an entity; `None` when the key does not exist.
    fn fetch_post(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Post>>> {
        async move { Ok(post_from_record(id, self.read_one(id).await?)) }
    }
}

/// Response to a `POST` on a collection.
#[derive(Debug, Serialize, Deserialize)]
struct CreatedKey {
    name: String,
}

/// [`PostStore`] backed by the hosted JSON database over HTTP.
#[derive(Clone, Debug)]
pub struct HttpStore {
    client: Client,
    base: Url,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))?;
        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self) -> Url {
        self.endpoint(&["posts.json"])
    }

    fn record_url(&self, id: &str) -> Url {
        self.endpoint(&["posts", &format!("{id}.json")])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        tracing::debug!(%method, %url, "store request");
        let mut req = self.client.request(method.clone(), url.clone());
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, %url, "store unreachable: {e}");
            StoreError::Network(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(%method, %url, %status, "store rejected request");
            return Err(StoreError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PostStore for HttpStore {
    async fn list_all(&self) -> Result<BTreeMap<String, PostRecord>> {
        let resp = self.send(Method::GET, self.collection_url(), None).await?;
        let collection: Option<BTreeMap<String, PostRecord>> = Self::decode(resp).await?;
        Ok(collection.unwrap_or_default())
    }

    async fn read_one(&self, id: &str) -> Result<Option<PostRecord>> {
        let resp = self.send(Method::GET, self.record_url(id), None).await?;
        Self::decode(resp).await
    }

    async fn create(&self, post: &NewPost) -> Result<String> {
        let body = serde_json::to_value(post)?;
        let resp = self
            .send(Method::POST, self.collection_url(), Some(body))
            .await?;
        let created: CreatedKey = Self::decode(resp).await?;
        tracing::info!(id = %created.name, "post created");
        Ok(created.name)
    }

    async fn update(&self, id: &str, patch: &PostPatch) -> Result<()> {
        let body = serde_json::to_value(patch)?;
        self.send(Method::PATCH, self.record_url(id), Some(body))
            .await?;
        tracing::info!(%id, "post updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.send(Method::DELETE, self.record_url(id), None).await?;
        tracing::info!(%id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostInput;
    use httpmock::MockServer;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths() {
        let store = HttpStore::new("https://example.firebaseio.com/").unwrap();
        assert_eq!(
            store.collection_url().as_str(),
            "https://example.firebaseio.com/posts.json"
        );
        assert_eq!(
            store.record_url("abc123").as_str(),
            "https://example.firebaseio.com/posts/abc123.json"
        );
        // Ids never escape their path segment.
        assert_eq!(
            store.record_url("a/b").as_str(),
            "https://example.firebaseio.com/posts/a%2Fb.json"
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert!(matches!(
            HttpStore::new("not a url"),
            Err(StoreError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpStore::new("mailto:someone@example.com"),
            Err(StoreError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_list_all_returns_mapping() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/posts.json");
                then.status(200).json_body(json!({
                    "abc123": {"caption": "Cat", "image": "http://x/cat.png", "uid": "u1", "createdAt": 100},
                    "def456": {"caption": "Dog", "image": "http://x/dog.png", "uid": "u2", "createdAt": 200}
                }));
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        let posts = store.list_all().await.unwrap();
        mock.assert_async().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts["def456"].caption, "Dog");
    }

    #[tokio::test]
    async fn test_list_all_null_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/posts.json");
                then.status(200).body("null");
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_one_null_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/posts/missing.json");
                then.status(200).body("null");
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        assert!(store.read_one("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_assigned_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/posts.json")
                    .header("content-type", "application/json")
                    .json_body(json!({"caption": "Hi", "image": "http://x", "uid": "u1", "createdAt": 5}));
                then.status(200).json_body(json!({"name": "-Nxyz"}));
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        let post = NewPost::new(
            PostInput {
                caption: "Hi".into(),
                image: "http://x".into(),
            },
            "u1",
            5,
        );
        let id = store.create(&post).await.unwrap();
        mock.assert_async().await;
        assert_eq!(id, "-Nxyz");
    }

    #[tokio::test]
    async fn test_non_success_is_remote_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("DELETE").path("/posts/abc123.json");
                then.status(401).body(r#"{"error":"Permission denied"}"#);
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        let err = store.delete("abc123").await.unwrap_err();
        match err {
            StoreError::Remote { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Permission denied"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        // Nothing listens on port 9 locally.
        let store = HttpStore::new("http://127.0.0.1:9").unwrap();
        let err = store.list_all().await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/posts.json");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let store = HttpStore::new(&server.base_url()).unwrap();
        assert!(matches!(
            store.list_all().await,
            Err(StoreError::Decode(_))
        ));
    }
}
