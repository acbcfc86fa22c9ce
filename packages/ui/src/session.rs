//! Session context and hooks for the UI.
//!
//! There is no sign-in yet: every session is a [`FixedSession`] with the
//! placeholder author id. Views only see the [`Session`] trait, so swapping in a
//! real identity later touches this file alone.

use dioxus::prelude::*;
use store::{FixedSession, Session};

/// Session state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: FixedSession,
}

impl Session for SessionState {
    fn author_id(&self) -> &str {
        self.session.author_id()
    }
}

/// Get the current session.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that makes the session available to every view.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
