//! Configuration validation issues.
//!
//! Loading never fails on a questionable value; problems are collected as
//! structured issues and surfaced to the user before the intake starts.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the intake runs, but part of it will not behave as
    /// configured.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Webhook delivery enabled without a destination URL.
    WebhookWithoutUrl,
    /// Webhook URL is not an http(s) endpoint.
    WebhookUrlNotHttp,
    /// A signing secret is configured but delivery is disabled.
    SecretWithoutDelivery,
    /// A zero timeout would fail every delivery immediately.
    ZeroTimeout,
    /// Archiving enabled with an empty path.
    ArchiveWithoutPath,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}
