use std::time::Duration;

use serde_json::json;

/// Embed accent color.
pub const EMBED_COLOR: u32 = 0x00d4ff;

/// Hard bound for one notification.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding the webhook endpoint (read by the binary only).
pub const WEBHOOK_ENV: &str = "AURAFX_WEBHOOK_URL";

/// Where generated-effect notifications are posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Webhook URL; `None` disables notifications.
    pub endpoint: Option<String>,
    /// Upper bound for one post.
    pub timeout: Duration,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: WEBHOOK_TIMEOUT,
        }
    }
}

impl NotifyConfig {
    /// Post to `url`.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Read the endpoint from [`WEBHOOK_ENV`].
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(WEBHOOK_ENV).ok())
    }

    /// Same as [`NotifyConfig::from_env`] over an already read value.
    pub fn from_env_value(value: Option<String>) -> Self {
        Self {
            endpoint: value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }
}

/// Short description of one generated script.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSummary {
    /// Skill name.
    pub skill_name: String,
    /// Caller context label.
    pub source: String,
    /// Number of layers in the request.
    pub layer_count: usize,
    /// Number of elements in the request.
    pub element_count: usize,
    /// Delay and primitive lines in the script.
    pub line_count: usize,
    /// Display names of the active modes.
    pub active_modes: Vec<String>,
    /// Whether the ring optimizer ran.
    pub optimized: bool,
    /// Generation timestamp.
    pub generated_at: String,
}

/// Embed-style webhook body for `summary`.
pub fn payload(summary: &EffectSummary) -> serde_json::Value {
    let modes = if summary.active_modes.is_empty() {
        "none".to_owned()
    } else {
        summary.active_modes.join(", ")
    };
    json!({
        "embeds": [{
            "description": "✨ **Effect created** using AuraFX",
            "color": EMBED_COLOR,
            "fields": [
                { "name": "Skill", "value": summary.skill_name, "inline": true },
                { "name": "Elements", "value": summary.element_count.to_string(), "inline": true },
                { "name": "Lines", "value": summary.line_count.to_string(), "inline": true },
                { "name": "Modes", "value": modes, "inline": false },
            ],
            "footer": { "text": format!("AuraFX · {}", summary.source) },
            "timestamp": summary.generated_at,
        }]
    })
}

/// Post `summary` once. Fails on transport errors and non-success statuses.
#[cfg(feature = "network")]
pub async fn send(endpoint: &str, summary: &EffectSummary) -> crate::AuraResult<()> {
    use crate::AuraError;

    let response = reqwest::Client::new()
        .post(endpoint)
        .json(&payload(summary))
        .send()
        .await
        .map_err(|e| AuraError::network(e.to_string()))?;
    if !response.status().is_success() {
        return Err(AuraError::network(format!(
            "webhook answered {}",
            response.status()
        )));
    }
    Ok(())
}

/// Fire-and-forget notification.
///
/// Returns `None` without doing anything when no endpoint is configured or when called
/// outside a Tokio runtime. The spawned task is bounded by the configured timeout and only
/// logs its failures.
#[cfg(feature = "network")]
pub fn dispatch(
    config: &NotifyConfig,
    summary: EffectSummary,
) -> Option<tokio::task::JoinHandle<()>> {
    let endpoint = config.endpoint.clone()?;
    let handle = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle,
        Err(err) => {
            tracing::warn!(error = %err, "no async runtime, notification skipped");
            return None;
        }
    };
    let timeout = config.timeout;
    Some(handle.spawn(async move {
        match tokio::time::timeout(timeout, send(&endpoint, &summary)).await {
            Ok(Ok(())) => tracing::debug!(skill = %summary.skill_name, "notification sent"),
            Ok(Err(err)) => tracing::warn!(error = %err, "notification failed"),
            Err(_) => tracing::warn!(?timeout, "notification timed out"),
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/notify/webhook.rs"]
mod tests;
