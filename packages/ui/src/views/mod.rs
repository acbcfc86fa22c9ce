use dioxus::prelude::*;
use store::{Destination, FlowOutcome};

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::dialogs;

mod home;
pub use home::HomeView;

mod post_detail;
pub use post_detail::PostDetailView;

mod create;
pub use create::CreatePostView;

mod update;
pub use update::UpdatePostView;

mod pages;
pub use pages::{AboutView, ContactView};

/// Act on the result of a mutating flow: navigate on success, alert on failure.
pub(crate) async fn settle(
    outcome: FlowOutcome,
    on_navigate: EventHandler<Destination>,
    log: &mut Signal<ActivityLog>,
    done: &str,
) {
    match outcome {
        FlowOutcome::Navigate(dest) => {
            log_activity(log, LogLevel::Success, done);
            on_navigate.call(dest);
        }
        FlowOutcome::Alert(message) => {
            log_activity(log, LogLevel::Error, &message);
            dialogs::alert(&message).await;
        }
        FlowOutcome::Cancelled => {}
    }
}
