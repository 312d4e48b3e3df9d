//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use std::path::PathBuf;

use brief_domain::OutputFormat;
use serde::{Deserialize, Serialize};

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Webhook delivery settings
    pub webhook: FileWebhookConfig,
    /// JSONL submission archive settings
    pub archive: FileArchiveConfig,
    /// Intake defaults
    pub intake: FileIntakeConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// Webhook delivery configuration from TOML (`[webhook]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// Master switch for delivery; `--dry-run` overrides it per run
    pub enabled: bool,
    /// Destination for the completed brief
    pub url: Option<String>,
    /// HMAC-SHA256 signing secret for the signature header
    pub secret: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileWebhookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: None,
            secret: None,
            timeout_secs: 10,
        }
    }
}

/// Submission archive configuration from TOML (`[archive]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileArchiveConfig {
    /// Append each completed brief to the JSONL archive
    pub enabled: bool,
    /// Archive file location
    pub path: PathBuf,
}

impl Default for FileArchiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("briefs.jsonl"),
        }
    }
}

/// Intake defaults from TOML (`[intake]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIntakeConfig {
    /// Attribution recorded on submitted briefs; falls back to `$USER`
    pub submitted_by: Option<String>,
    /// Agency name shown in the wizard banner
    pub organization: Option<String>,
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. Nothing here
    /// is fatal to the intake itself, so every issue is a warning; the
    /// binary prints them and carries on.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match (self.webhook.enabled, &self.webhook.url) {
            (true, None) => issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::WebhookWithoutUrl,
                message: "webhook.url is not set; completed briefs will not be delivered"
                    .to_string(),
            }),
            (true, Some(url)) if !url.starts_with("http://") && !url.starts_with("https://") => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::WebhookUrlNotHttp,
                    message: format!("webhook.url '{url}' is not an http(s) endpoint"),
                })
            }
            _ => {}
        }

        if !self.webhook.enabled && self.webhook.secret.is_some() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::SecretWithoutDelivery,
                message: "webhook.secret is set but webhook delivery is disabled".to_string(),
            });
        }

        if self.webhook.enabled && self.webhook.url.is_some() && self.webhook.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroTimeout,
                message: "webhook.timeout_secs is 0; every delivery would time out immediately"
                    .to_string(),
            });
        }

        if self.archive.enabled && self.archive.path.as_os_str().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ArchiveWithoutPath,
                message: "archive.enabled is true but archive.path is empty".to_string(),
            });
        }

        issues
    }
}
