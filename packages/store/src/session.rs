/// Author id used until sign-in exists.
pub const PLACEHOLDER_AUTHOR_ID: &str = "fTs84KRoYw5pRZEWCq2Z";

/// Accessor for whoever is using the app right now.
pub trait Session {
    fn author_id(&self) -> &str;
}

/// A session pinned to one author id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSession {
    author_id: String,
}

impl FixedSession {
    pub fn new(author_id: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
        }
    }
}

impl Default for FixedSession {
    fn default() -> Self {
        Self::new(PLACEHOLDER_AUTHOR_ID)
    }
}

impl Session for FixedSession {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}
