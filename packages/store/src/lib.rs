pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod flows;
pub mod form;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

pub use client::{HttpStore, PostStore};
pub use config::PostboardConfig;
pub use error::StoreError;
pub use feed::SortMode;
pub use flows::{Destination, FlowOutcome};
pub use form::{PostForm, ValidationError};
pub use models::{NewPost, Post, PostInput, PostPatch, PostRecord};
pub use session::{FixedSession, Session};
