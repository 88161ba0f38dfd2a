use serde::Deserialize;

use crate::infra::config::{AppConfig, BackendConfig, ContactConfig, LogConfig};

/// On-disk shape of `config.toml`; every field is optional.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub backend: Option<FileBackendConfig>,
    pub contact: Option<FileContactConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(backend) = self.backend {
            backend.merge_into(&mut config.backend);
        }

        if let Some(contact) = self.contact {
            contact.merge_into(&mut config.contact);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileBackendConfig {
    pub endpoint_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub assistant_role_label: Option<String>,
    pub record_assistant_replies: Option<bool>,
}

impl FileBackendConfig {
    fn merge_into(self, config: &mut BackendConfig) {
        if let Some(endpoint_url) = self.endpoint_url {
            config.endpoint_url = endpoint_url;
        }

        if self.request_timeout_ms.is_some() {
            config.request_timeout_ms = self.request_timeout_ms;
        }

        if let Some(label) = self.assistant_role_label {
            config.assistant_role_label = label;
        }

        if let Some(record) = self.record_assistant_replies {
            config.record_assistant_replies = record;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileContactConfig {
    pub phone_uri: Option<String>,
    pub mail_uri: Option<String>,
    pub website_url: Option<String>,
}

impl FileContactConfig {
    fn merge_into(self, config: &mut ContactConfig) {
        if let Some(phone_uri) = self.phone_uri {
            config.phone_uri = phone_uri;
        }

        if let Some(mail_uri) = self.mail_uri {
            config.mail_uri = mail_uri;
        }

        if let Some(website_url) = self.website_url {
            config.website_url = website_url;
        }
    }
}
