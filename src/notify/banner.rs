use std::time::Duration;

/// Community link used whenever the live banner cannot be fetched.
pub const FALLBACK_BANNER: &str = "https://discord.gg/YqXdY4GD";

/// Environment variable naming a plain-text banner source.
pub const BANNER_SOURCE_ENV: &str = "AURAFX_BANNER_URL";

/// Where the header/footer community link comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerConfig {
    /// Plain-text URL to fetch; `None` always uses `fallback`.
    pub source: Option<String>,
    /// Text used when `source` is unset or fails.
    pub fallback: String,
    /// Upper bound for the fetch.
    pub timeout: Duration,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            source: None,
            fallback: FALLBACK_BANNER.to_owned(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl BannerConfig {
    /// Fetch from `url`.
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source = Some(url.into());
        self
    }

    /// Read the source from [`BANNER_SOURCE_ENV`]; unset or blank means offline.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BANNER_SOURCE_ENV).ok())
    }

    /// Same as [`BannerConfig::from_env`] over an already read value.
    pub fn from_env_value(value: Option<String>) -> Self {
        Self {
            source: value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }

    /// Banner text without touching the network.
    pub fn offline_text(&self) -> String {
        self.fallback.clone()
    }
}

/// Resolve the banner text. Never fails: any error yields the fallback and a warning.
#[cfg(feature = "network")]
#[tracing::instrument(skip(config), fields(source = config.source.as_deref().unwrap_or("-")))]
pub async fn fetch_banner(config: &BannerConfig) -> String {
    let Some(url) = config.source.as_deref() else {
        return config.offline_text();
    };

    match tokio::time::timeout(config.timeout, fetch_text(url)).await {
        Ok(Ok(text)) if !text.trim().is_empty() => text.trim().to_owned(),
        Ok(Ok(_)) => {
            tracing::warn!("banner source returned empty text, using fallback");
            config.offline_text()
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "banner fetch failed, using fallback");
            config.offline_text()
        }
        Err(_) => {
            tracing::warn!(timeout = ?config.timeout, "banner fetch timed out, using fallback");
            config.offline_text()
        }
    }
}

#[cfg(feature = "network")]
async fn fetch_text(url: &str) -> crate::AuraResult<String> {
    use crate::AuraError;

    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| AuraError::network(e.to_string()))?;
    if !response.status().is_success() {
        return Err(AuraError::network(format!(
            "banner source answered {}",
            response.status()
        )));
    }
    response
        .text()
        .await
        .map_err(|e| AuraError::network(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/notify/banner.rs"]
mod tests;
