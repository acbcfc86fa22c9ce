use dioxus::prelude::*;
use store::feed::{self, SortMode};
use store::{Destination, Post, PostStore};

use crate::{log_activity, use_activity_log, use_post_store, LogLevel, PostCard};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Collection view: every post, filtered by caption and sorted.
#[component]
pub fn HomeView(on_navigate: EventHandler<Destination>) -> Element {
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut sort = use_signal(SortMode::default);
    let mut activity_log = use_activity_log();
    let store = use_post_store();

    // Load posts on mount
    let _loader = use_resource(move || {
        let store = store.clone();
        async move {
            loading.set(true);
            match store.fetch_posts().await {
                Ok(fetched) => {
                    log_activity(&mut activity_log, LogLevel::Info, &format!("Loaded {} posts", fetched.len()));
                    posts.set(fetched);
                }
                Err(e) => {
                    tracing::warn!("error loading posts: {e}");
                    log_activity(&mut activity_log, LogLevel::Warning, &format!("Could not load posts: {e}"));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            section {
                class: "page",
                div { class: "container", h1 { "Loading..." } }
            }
        };
    }

    let visible = feed::project(&posts.read(), &query(), sort());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "page",
            h1 { "My posts" }

            form {
                class: "grid-filter",
                role: "search",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                label {
                    "Search captions"
                    input {
                        r#type: "text",
                        placeholder: "Search...",
                        value: "{query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
                label {
                    "Sort by"
                    select {
                        value: "{sort}",
                        onchange: move |evt: FormEvent| {
                            sort.set(evt.value().parse().unwrap_or_default());
                        },
                        for mode in SortMode::ALL {
                            option {
                                key: "{mode}",
                                value: "{mode}",
                                selected: mode == sort(),
                                {mode.label()}
                            }
                        }
                    }
                }
            }

            section {
                class: "grid",
                for post in visible {
                    PostCard {
                        key: "{post.id}",
                        post: post.clone(),
                        on_open: move |id: String| on_navigate.call(Destination::Detail(id)),
                    }
                }
            }
        }
    }
}
