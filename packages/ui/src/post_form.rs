use dioxus::prelude::*;
use store::form::{PostForm as FormState, BROKEN_PREVIEW_URL};
use store::{Post, PostInput};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Caption + image URL form shared by the create and edit views.
///
/// Validates locally and hands the trimmed pair to `save_post`; the parent owns
/// the request and the `is_submitting` flag.
#[component]
pub fn PostForm(
    save_post: EventHandler<PostInput>,
    /// Existing post to edit. Fields are filled once it has a caption and an image.
    post: Option<Post>,
    #[props(default)] is_submitting: bool,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut form = use_signal(FormState::new);
    let mut preview_broken = use_signal(|| false);

    use_effect(use_reactive!(|post| {
        if let Some(post) = post {
            form.write().prefill(&post);
        }
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // On failure the message is kept on the form state and rendered below.
        let result = form.write().submit();
        if let Ok(input) = result {
            save_post.call(input);
        }
    };

    let state = form();
    let preview = if preview_broken() {
        BROKEN_PREVIEW_URL.to_string()
    } else {
        state.preview_url().to_string()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        form {
            class: "form-grid",
            onsubmit: handle_submit,

            label { r#for: "caption", "Caption" }
            input {
                id: "caption",
                r#type: "text",
                value: "{state.caption}",
                placeholder: "Write a caption...",
                disabled: is_submitting,
                oninput: move |evt: FormEvent| form.write().set_caption(evt.value()),
            }

            label { r#for: "image-url", "Image URL" }
            input {
                id: "image-url",
                r#type: "url",
                value: "{state.image}",
                placeholder: "Paste an image URL...",
                disabled: is_submitting,
                oninput: move |evt: FormEvent| {
                    form.write().set_image(evt.value());
                    preview_broken.set(false);
                },
            }

            label { r#for: "image-preview", "Preview" }
            img {
                id: "image-preview",
                class: "image-preview",
                src: "{preview}",
                alt: "Preview",
                onerror: move |_| preview_broken.set(true),
            }

            if let Some(err) = state.error.as_ref() {
                div {
                    class: "error-message",
                    p { "{err}" }
                }
            }

            div {
                class: "btns",
                if let Some(cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "btn-cancel",
                        disabled: is_submitting,
                        onclick: move |_| cancel.call(()),
                        "Cancel"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: is_submitting,
                    if is_submitting { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
