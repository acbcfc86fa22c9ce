use dioxus::prelude::*;
use store::flows;
use store::{Destination, Post, PostInput, PostStore};

use super::settle;
use crate::{log_activity, use_activity_log, use_post_store, LogLevel, PostForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Edit page: loads the post, then hands it to the shared form.
#[component]
pub fn UpdatePostView(id: String, on_navigate: EventHandler<Destination>) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut existing = use_signal(|| Option::<Post>::None);
    let mut loading = use_signal(|| true);
    let mut is_submitting = use_signal(|| false);
    let mut activity_log = use_activity_log();
    let store = use_post_store();

    let _loader = use_resource({
        let store = store.clone();
        move || {
            let id = id_signal();
            let store = store.clone();
            async move {
                loading.set(true);
                match store.fetch_post(&id).await {
                    Ok(found) => existing.set(found),
                    Err(e) => {
                        tracing::warn!(%id, "error loading post for edit: {e}");
                        log_activity(&mut activity_log, LogLevel::Warning, &format!("Could not load post {id}: {e}"));
                    }
                }
                loading.set(false);
            }
        }
    });

    let update_post = move |input: PostInput| {
        let store = store.clone();
        // The form only renders once the post is loaded.
        let Some(post) = existing() else {
            return;
        };
        spawn(async move {
            let outcome =
                flows::update_post(&store, &post, input, move |busy| is_submitting.set(busy)).await;
            settle(outcome, on_navigate, &mut activity_log, &format!("Updated post {}", post.id)).await;
        });
    };

    let handle_cancel = move |_: ()| {
        on_navigate.call(Destination::Detail(id_signal()));
    };

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            section {
                class: "page",
                div { class: "container", h1 { "Loading..." } }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "page",
            div {
                class: "container",
                h1 { "Edit post" }
                if existing().is_some() {
                    PostForm {
                        save_post: update_post,
                        post: existing(),
                        is_submitting: is_submitting(),
                        on_cancel: handle_cancel,
                    }
                } else {
                    p { class: "view-placeholder", "This post no longer exists." }
                }
            }
        }
    }
}
