use serde::{Deserialize, Serialize};

use crate::models::Message;
use crate::permissions::{evaluate, MessageAction, PermissionResult};

/// Server-provided message permission settings.
///
/// Arrives with the login response; a session may not have received them
/// yet, in which case permission checks report [`PermissionResult::Unknown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PermissionSettings {
    pub allow_starring: bool,
    pub allow_pinning: bool,
}

/// Authenticated session context. Created at login, dropped at logout;
/// settings are cleared if the server revokes them mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub settings: Option<PermissionSettings>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, settings: Option<PermissionSettings>) -> Self {
        Self {
            user_id: user_id.into(),
            settings,
        }
    }

    pub fn can_star_message(&self, message: &Message) -> PermissionResult {
        evaluate(self.settings.as_ref(), message, MessageAction::Star)
    }

    pub fn can_pin_message(&self, message: &Message) -> PermissionResult {
        evaluate(self.settings.as_ref(), message, MessageAction::Pin)
    }
}
