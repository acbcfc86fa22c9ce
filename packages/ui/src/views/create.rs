use dioxus::prelude::*;
use store::flows::{self, now_millis};
use store::{Destination, PostInput};

use super::settle;
use crate::{use_activity_log, use_post_store, use_session, PostForm};

/// New post page.
#[component]
pub fn CreatePostView(on_navigate: EventHandler<Destination>) -> Element {
    let mut is_submitting = use_signal(|| false);
    let mut activity_log = use_activity_log();
    let session = use_session();
    let store = use_post_store();

    let create_post = move |input: PostInput| {
        let store = store.clone();
        spawn(async move {
            let outcome = flows::create_post(
                &store,
                &session(),
                input,
                now_millis(),
                move |busy| is_submitting.set(busy),
            )
            .await;
            settle(outcome, on_navigate, &mut activity_log, "Post created").await;
        });
    };

    rsx! {
        section {
            class: "page",
            div {
                class: "container",
                h1 { "New post" }
                PostForm {
                    save_post: create_post,
                    is_submitting: is_submitting(),
                    on_cancel: move |_: ()| on_navigate.call(Destination::Collection),
                }
            }
        }
    }
}
