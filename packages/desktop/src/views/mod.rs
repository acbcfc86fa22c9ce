use dioxus::prelude::*;
use store::Destination;

use crate::Route;

/// Navbar, page outlet and the activity drawer around every page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        ui::Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Create {}, "New post" }
            Link { to: Route::About {}, "About" }
            Link { to: Route::Contact {}, "Contact" }
            ui::ActivityLogToggle {}
        }
        main {
            Outlet::<Route> {}
        }
        ui::ActivityLogPanel {}
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::HomeView {
            on_navigate: move |dest: Destination| {
                nav.push(Route::from(dest));
            },
        }
    }
}

#[component]
pub fn Create() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::CreatePostView {
            on_navigate: move |dest: Destination| {
                nav.push(Route::from(dest));
            },
        }
    }
}

#[component]
pub fn PostDetail(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::PostDetailView {
            id: id,
            on_navigate: move |dest: Destination| {
                nav.push(Route::from(dest));
            },
        }
    }
}

#[component]
pub fn UpdatePost(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::UpdatePostView {
            id: id,
            on_navigate: move |dest: Destination| {
                nav.push(Route::from(dest));
            },
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! { ui::views::AboutView {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::views::ContactView {} }
}
