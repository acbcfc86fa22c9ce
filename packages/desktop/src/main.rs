use dioxus::prelude::*;

use store::Destination;
use views::{About, AppLayout, Contact, Create, Home, PostDetail, UpdatePost};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/create")]
        Create {},
        #[route("/posts/:id")]
        PostDetail { id: String },
        #[redirect("/:..segments", |segments: Vec<String>| {
            tracing::debug!(?segments, "unknown path, redirecting home");
            Route::Home {}
        })]
        #[route("/posts/:id/update")]
        UpdatePost { id: String },
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Collection => Route::Home {},
            Destination::Detail(id) => Route::PostDetail { id },
            Destination::Edit(id) => Route::UpdatePost { id },
        }
    }
}

fn log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(log_level()) {
        eprintln!("logger already initialised: {e}");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("Postboard")))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    // Reads POSTBOARD_DATABASE_URL / .env / postboard.toml from the working directory
    use_context_provider(ui::make_store);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse::<Route>().unwrap_or_else(|e| panic!("{path}: {e}"))
    }

    #[test]
    fn test_every_page_has_a_route() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/about"), Route::About {});
        assert_eq!(parse("/contact"), Route::Contact {});
        assert_eq!(parse("/create"), Route::Create {});
        assert_eq!(parse("/posts/abc"), Route::PostDetail { id: "abc".into() });
        assert_eq!(parse("/posts/abc/update"), Route::UpdatePost { id: "abc".into() });
    }

    #[test]
    fn test_unknown_paths_redirect_home() {
        assert_eq!(parse("/nope"), Route::Home {});
        assert_eq!(parse("/posts/abc/update/extra"), Route::Home {});
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_builds_log_at_debug() {
        assert_eq!(log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_flow_destinations_map_to_routes() {
        assert_eq!(Route::from(Destination::Collection), Route::Home {});
        assert_eq!(
            Route::from(Destination::Detail("abc".into())),
            Route::PostDetail { id: "abc".into() }
        );
        assert_eq!(
            Route::from(Destination::Edit("abc".into())).to_string(),
            "/posts/abc/update"
        );
    }
}
