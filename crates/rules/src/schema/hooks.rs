//! Notification hook settings.

use serde::{Deserialize, Serialize};

/// Target of the gRPC alarm hook. Either field may be unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrpcHookSetting {
    pub target_host: Option<String>,
    pub target_port: Option<u16>,
}

impl GrpcHookSetting {
    /// `host:port` when both parts are set.
    pub fn target(&self) -> Option<String> {
        match (&self.target_host, self.target_port) {
            (Some(host), Some(port)) => Some(format!("{host}:{port}")),
            _ => None,
        }
    }
}

/// Chat (Slack-style) webhook settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatHookSetting {
    /// Message template. Empty selects the built-in template.
    pub text_template: String,
    pub webhooks: Vec<String>,
}

impl ChatHookSetting {
    pub fn uses_default_template(&self) -> bool {
        self.text_template.is_empty()
    }
}
