//! # Domain models for posts
//!
//! The remote store keeps posts under `/posts` as a JSON object keyed by a
//! store-assigned id. Records on the wire never carry their own id, so every
//! read goes through the adapters in this module to pair keys back up with
//! their values.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PostRecord`] | A stored value as it appears under its key. Every field defaults when absent since the store is schemaless. |
//! | [`Post`] | A [`PostRecord`] paired with its id. This is what views render. |
//! | [`NewPost`] | Body of a create request. The only type carrying `createdAt` outward. |
//! | [`PostPatch`] | Body of an update request. Has no `createdAt` field, so an update cannot rewrite it. |
//! | [`PostInput`] | The trimmed caption/image pair a validated form hands to a flow. |
//!
//! ## Adapters
//!
//! - [`posts_from_collection`] turns the `id -> record` mapping from a list call
//!   into a `Vec<Post>`.
//! - [`post_from_record`] does the same for a single read, where the store answers
//!   `null` for a missing key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A post value as stored under its key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: String,
    /// Author id.
    #[serde(default)]
    pub uid: String,
    /// Milliseconds since the Unix epoch, set once at creation.
    #[serde(default)]
    pub created_at: i64,
}

/// A persisted post together with its store-assigned id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub caption: String,
    pub image: String,
    pub uid: String,
    pub created_at: i64,
}

impl Post {
    pub fn from_record(id: impl Into<String>, record: PostRecord) -> Self {
        Self {
            id: id.into(),
            caption: record.caption,
            image: record.image,
            uid: record.uid,
            created_at: record.created_at,
        }
    }
}

/// Request body for creating a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub caption: String,
    pub image: String,
    pub uid: String,
    pub created_at: i64,
}

impl NewPost {
    pub fn new(input: PostInput, uid: impl Into<String>, created_at: i64) -> Self {
        Self {
            caption: input.caption,
            image: input.image,
            uid: uid.into(),
            created_at,
        }
    }
}

impl From<NewPost> for PostRecord {
    fn from(post: NewPost) -> Self {
        Self {
            caption: post.caption,
            image: post.image,
            uid: post.uid,
            created_at: post.created_at,
        }
    }
}

/// Request body for updating a post.
///
/// Sent with `PATCH`, so the store keeps any field not listed here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub caption: String,
    pub image: String,
    pub uid: String,
}

impl PostPatch {
    /// Replace caption and image, keeping the author of the existing post.
    pub fn merge(input: PostInput, existing: &Post) -> Self {
        Self {
            caption: input.caption,
            image: input.image,
            uid: existing.uid.clone(),
        }
    }

    pub fn apply_to(&self, record: &mut PostRecord) {
        record.caption.clone_from(&self.caption);
        record.image.clone_from(&self.image);
        record.uid.clone_from(&self.uid);
    }
}

/// Validated, trimmed form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub caption: String,
    pub image: String,
}

/// Pair every key of a collection response with its value.
///
/// The order of the returned list follows the map, which callers must not read
/// meaning into; ordering is the job of [`crate::feed`].
pub fn posts_from_collection(collection: BTreeMap<String, PostRecord>) -> Vec<Post> {
    collection
        .into_iter()
        .map(|(id, record)| Post::from_record(id, record))
        .collect()
}

/// Pair a single read with the id it was requested under.
pub fn post_from_record(id: &str, record: Option<PostRecord>) -> Option<Post> {
    record.map(|record| Post::from_record(id, record))
}
