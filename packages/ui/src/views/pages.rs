use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        section {
            class: "page",
            div {
                class: "container",
                h1 { "About" }
                p {
                    "Postboard is a small board of captioned images. Posts live in a hosted JSON database; "
                    "this app lists, creates, edits and deletes them."
                }
            }
        }
    }
}

#[component]
pub fn ContactView() -> Element {
    rsx! {
        section {
            class: "page",
            div {
                class: "container",
                h1 { "Contact" }
                p { "Questions or feedback? Open an issue on the project's repository." }
            }
        }
    }
}
