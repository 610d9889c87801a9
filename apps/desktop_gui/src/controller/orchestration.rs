//! Applies actions queued while rendering a frame to the view controller.

use menu_core::ViewController;
use shared::protocol::UserAction;

use crate::controller::events::{StatusBanner, UiErrorContext};

fn context_for(action: &UserAction) -> UiErrorContext {
    match action {
        UserAction::SubmitAddForm => UiErrorContext::AddItem,
        UserAction::DeleteItem { .. } => UiErrorContext::DeleteItem,
        _ => UiErrorContext::General,
    }
}

/// Drains `pending` in order. Returns the banner for the last action that
/// produced a notice, if any.
pub fn dispatch_user_actions(
    controller: &mut ViewController,
    pending: &mut Vec<UserAction>,
    status: &mut String,
) -> Option<StatusBanner> {
    let mut banner = None;
    for action in pending.drain(..) {
        let action_name = action.name();
        let context = context_for(&action);
        let reports_outcome = matches!(
            action,
            UserAction::SubmitAddForm | UserAction::DeleteItem { .. }
        );

        controller.apply(action);
        tracing::debug!(action = action_name, "applied ui action");

        if reports_outcome {
            if let Some(notice) = controller.notice() {
                *status = format!("{}: {}", notice.title, notice.message);
                banner = Some(StatusBanner::from_notice(context, notice));
            }
        }
    }
    banner
}
