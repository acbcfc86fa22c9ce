use dioxus::prelude::*;
use store::Post;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// A single post: author badge, image, caption.
///
/// Clicking the card calls `on_open` with the post id; leave it unset to render
/// a static card (detail view).
#[component]
pub fn PostCard(post: Post, on_open: Option<EventHandler<String>>) -> Element {
    let clickable = on_open.is_some();
    let initial = post
        .uid
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let id = post.id.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        article {
            class: if clickable { "post-card clickable" } else { "post-card" },
            onclick: move |_| {
                if let Some(handler) = on_open {
                    handler.call(id.clone());
                }
            },
            div {
                class: "user-avatar",
                title: "{post.uid}",
                "{initial}"
            }
            img { src: "{post.image}", alt: "{post.caption}" }
            h2 { "{post.caption}" }
        }
    }
}
