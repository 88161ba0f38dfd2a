use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT_URL: &str =
    "https://us-central1-codebot-project.cloudfunctions.net/appChatBot";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub backend: BackendConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint_url: String,
    /// Total time allowed for one request, including reading the reply.
    pub request_timeout_ms: Option<u64>,
    /// Role tag sent for assistant turns.
    pub assistant_role_label: String,
    /// Whether replies are appended to the transcript as assistant turns.
    pub record_assistant_replies: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            request_timeout_ms: Some(DEFAULT_REQUEST_TIMEOUT_MS),
            assistant_role_label: "assistant".to_owned(),
            record_assistant_replies: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    pub phone_uri: String,
    pub mail_uri: String,
    pub website_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone_uri: "tel://13463010008".to_owned(),
            mail_uri: "mailto:vincent.higgins@ruggededge.ai".to_owned(),
            website_url: "https://ruggededge.ai".to_owned(),
        }
    }
}
