use std::env;

use chrono_tz::Tz;

use crate::core::models::Source;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LOOKBACK_HOURS: i64 = 24;
/// One hundred years.
pub const MAX_LOOKBACK_HOURS: i64 = 24 * 365 * 100;

/// Secrets needed for a run. Blank values count as missing.
#[derive(Clone, Default)]
pub struct Credentials {
    pub youtube_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

/// Borrowed view of a complete credential set.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedCredentials<'a> {
    pub youtube_api_key: &'a str,
    pub gemini_api_key: &'a str,
    pub telegram_bot_token: &'a str,
    pub telegram_chat_id: &'a str,
}

impl Credentials {
    /// Names of the environment variables whose values are absent or blank.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("YOUTUBE_API_KEY", &self.youtube_api_key),
            ("GEMINI_API_KEY", &self.gemini_api_key),
            ("TELEGRAM_BOT_TOKEN", &self.telegram_bot_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Returns the borrowed credential set, or the names of the missing ones.
    ///
    /// # Errors
    ///
    /// Returns the list of missing variable names if any credential is absent.
    pub fn validated(&self) -> Result<ValidatedCredentials<'_>, Vec<&'static str>> {
        match (
            present(&self.youtube_api_key),
            present(&self.gemini_api_key),
            present(&self.telegram_bot_token),
            present(&self.telegram_chat_id),
        ) {
            (
                Some(youtube_api_key),
                Some(gemini_api_key),
                Some(telegram_bot_token),
                Some(telegram_chat_id),
            ) => Ok(ValidatedCredentials {
                youtube_api_key,
                gemini_api_key,
                telegram_bot_token,
                telegram_chat_id,
            }),
            _ => Err(self.missing()),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if present(value).is_some() { "<set>" } else { "<missing>" }
        }
        f.debug_struct("Credentials")
            .field("youtube_api_key", &redact(&self.youtube_api_key))
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("telegram_bot_token", &redact(&self.telegram_bot_token))
            // The chat id is an address, not a secret.
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// What a start request carries: the credentials and the ordered source list.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub credentials: Credentials,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub sources: Vec<Source>,
    pub gemini_model: String,
    pub lookback_hours: i64,
    pub timezone: Tz,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Missing credentials are not an error here; the orchestrator reports
    /// them when a run is requested.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable when an optional setting is malformed.
    pub fn from_env() -> Result<Self, String> {
        let lookback_hours = match env::var("TLDW_LOOKBACK_HOURS") {
            Ok(raw) => parse_lookback(&raw)?,
            Err(_) => DEFAULT_LOOKBACK_HOURS,
        };
        let timezone = match env::var("TLDW_TIMEZONE") {
            Ok(raw) => parse_timezone(&raw)?,
            Err(_) => Tz::UTC,
        };

        Ok(Self {
            credentials: Credentials {
                youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
                gemini_api_key: env::var("GEMINI_API_KEY").ok(),
                telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
                telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            },
            sources: parse_sources(&env::var("TLDW_CHANNEL_IDS").unwrap_or_default()),
            gemini_model: env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            lookback_hours,
            timezone,
        })
    }

    #[must_use]
    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            credentials: self.credentials.clone(),
            sources: self.sources.clone(),
        }
    }
}

fn parse_lookback(raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_LOOKBACK_HOURS).contains(&hours) => Ok(hours),
        Ok(hours) => Err(format!(
            "TLDW_LOOKBACK_HOURS: must be between 1 and {}, got {}",
            MAX_LOOKBACK_HOURS, hours
        )),
        Err(e) => Err(format!("TLDW_LOOKBACK_HOURS: {}", e)),
    }
}

fn parse_timezone(raw: &str) -> Result<Tz, String> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|e| format!("TLDW_TIMEZONE: {}", e))
}

/// Splits a free-form list of channel ids. Order and duplicates are kept.
#[must_use]
pub fn parse_sources(raw: &str) -> Vec<Source> {
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(Source::new)
        .collect()
}
