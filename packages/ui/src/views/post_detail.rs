use dioxus::prelude::*;
use store::flows::{self, DELETE_CONFIRMATION};
use store::{Destination, Post, PostStore};

use super::settle;
use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::{dialogs, log_activity, use_activity_log, use_post_store, Icon, LogLevel, PostCard};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Detail view for a single post with edit and delete actions.
#[component]
pub fn PostDetailView(
    /// Store id of the post to show.
    id: String,
    /// Called to leave the view: to the edit form, or home after a delete.
    on_navigate: EventHandler<Destination>,
) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut post = use_signal(|| Option::<Post>::None);
    let mut is_deleting = use_signal(|| false);
    let mut activity_log = use_activity_log();
    let store = use_post_store();

    let _loader = use_resource({
        let store = store.clone();
        move || {
            let id = id_signal();
            let store = store.clone();
            async move {
                match store.fetch_post(&id).await {
                    Ok(Some(found)) => post.set(Some(found)),
                    Ok(None) => {
                        post.set(None);
                        log_activity(&mut activity_log, LogLevel::Warning, &format!("Post {id} not found"));
                    }
                    Err(e) => {
                        tracing::warn!(%id, "error loading post: {e}");
                        log_activity(&mut activity_log, LogLevel::Warning, &format!("Could not load post {id}: {e}"));
                    }
                }
            }
        }
    });

    let handle_edit = move |_| {
        on_navigate.call(Destination::Edit(id_signal()));
    };

    let handle_delete = move |_| {
        let store = store.clone();
        spawn(async move {
            let confirmed = dialogs::confirm(DELETE_CONFIRMATION).await;
            let id = id_signal();
            let outcome =
                flows::delete_post(&store, &id, confirmed, move |busy| is_deleting.set(busy)).await;
            settle(outcome, on_navigate, &mut activity_log, &format!("Deleted post {id}")).await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "page",
            id: "post-page",
            div {
                class: "container",
                if let Some(current) = post() {
                    PostCard { post: current }
                }

                div {
                    class: "btns",
                    button {
                        class: "btn-outline",
                        disabled: is_deleting(),
                        onclick: handle_edit,
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        " Edit"
                    }
                    button {
                        class: "btn-outline btn-delete",
                        disabled: is_deleting(),
                        onclick: handle_delete,
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        if is_deleting() { " Deleting..." } else { " Delete" }
                    }
                }
            }
        }
    }
}
