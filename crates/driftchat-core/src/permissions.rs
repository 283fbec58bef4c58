use crate::models::{Message, PermissionSettings};

/// User actions gated by server-side permission settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Star,
    Pin,
}

/// Outcome of a permission check. Terminal and computed synchronously;
/// there is no pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResult {
    Allowed,
    NotAllowed,
    /// The message kind does not support user actions at all.
    NotActionable,
    /// The session has no permission settings (not logged in yet, or the
    /// server has not delivered them).
    Unknown,
}

/// Decide whether `action` is permitted on `message`.
///
/// The check order is fixed: missing settings win over actionability, which
/// wins over the per-action flag. A system message that would also be
/// disallowed by settings reports `NotActionable`, not `NotAllowed`.
pub fn evaluate(
    settings: Option<&PermissionSettings>,
    message: &Message,
    action: MessageAction,
) -> PermissionResult {
    let Some(settings) = settings else {
        return PermissionResult::Unknown;
    };

    if !message.is_actionable() {
        return PermissionResult::NotActionable;
    }

    let allowed = match action {
        MessageAction::Star => settings.allow_starring,
        MessageAction::Pin => settings.allow_pinning,
    };

    if allowed {
        PermissionResult::Allowed
    } else {
        PermissionResult::NotAllowed
    }
}
