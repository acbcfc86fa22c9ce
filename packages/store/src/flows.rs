//! # Mutating flows: create, update, delete
//!
//! Each flow wraps one write with the same discipline:
//!
//! 1. raise the busy flag through `on_busy(true)`,
//! 2. issue the request,
//! 3. lower the flag with `on_busy(false)` whatever the result,
//! 4. report where to go next ([`FlowOutcome::Navigate`]) or what to tell the
//!    user ([`FlowOutcome::Alert`]).
//!
//! The flows hold no UI state of their own, so views pass a signal setter as
//! `on_busy` and tests pass a recorder.

use crate::client::PostStore;
use crate::error::StoreError;
use crate::models::{NewPost, Post, PostInput, PostPatch};
use crate::session::Session;

pub const NETWORK_ALERT: &str = "Network error - please try again";
pub const CREATE_FAILED_ALERT: &str = "Could not create the post";
pub const UPDATE_FAILED_ALERT: &str = "Could not update the post";
pub const DELETE_FAILED_ALERT: &str = "Could not delete the post";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";

/// Where a finished flow sends the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Collection,
    Detail(String),
    Edit(String),
}

/// What the view should do once a flow returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Navigate(Destination),
    /// Show a blocking alert and stay put.
    Alert(String),
    /// Nothing was sent.
    Cancelled,
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn alert_for(err: &StoreError, fallback: &str) -> FlowOutcome {
    if err.is_network() {
        FlowOutcome::Alert(NETWORK_ALERT.to_string())
    } else {
        FlowOutcome::Alert(fallback.to_string())
    }
}

/// Store a new post authored by the current session.
pub async fn create_post<S, A>(
    store: &S,
    session: &A,
    input: PostInput,
    created_at: i64,
    mut on_busy: impl FnMut(bool),
) -> FlowOutcome
where
    S: PostStore,
    A: Session + ?Sized,
{
    on_busy(true);
    let post = NewPost::new(input, session.author_id(), created_at);
    let result = store.create(&post).await;
    on_busy(false);

    match result {
        Ok(id) => {
            tracing::info!(%id, "created post");
            FlowOutcome::Navigate(Destination::Collection)
        }
        Err(e) => {
            tracing::error!("failed to create post: {e}");
            alert_for(&e, CREATE_FAILED_ALERT)
        }
    }
}

/// Replace caption and image of `existing`, keeping its author.
pub async fn update_post<S: PostStore>(
    store: &S,
    existing: &Post,
    input: PostInput,
    mut on_busy: impl FnMut(bool),
) -> FlowOutcome {
    on_busy(true);
    let patch = PostPatch::merge(input, existing);
    let result = store.update(&existing.id, &patch).await;
    on_busy(false);

    match result {
        Ok(()) => FlowOutcome::Navigate(Destination::Detail(existing.id.clone())),
        Err(e) => {
            tracing::error!(id = %existing.id, "failed to update post: {e}");
            alert_for(&e, UPDATE_FAILED_ALERT)
        }
    }
}

/// Delete a post the user has confirmed; without confirmation nothing is sent.
pub async fn delete_post<S: PostStore>(
    store: &S,
    id: &str,
    confirmed: bool,
    mut on_busy: impl FnMut(bool),
) -> FlowOutcome {
    if !confirmed {
        return FlowOutcome::Cancelled;
    }

    on_busy(true);
    let result = store.delete(id).await;
    on_busy(false);

    match result {
        Ok(()) => FlowOutcome::Navigate(Destination::Collection),
        Err(e) => {
            tracing::error!(%id, "failed to delete post: {e}");
            alert_for(&e, DELETE_FAILED_ALERT)
        }
    }
}
