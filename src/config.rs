use anyhow::{anyhow, Result};
use std::env;
use url::Url;

/// Default mini-app page shown behind the inline keyboard button.
const DEFAULT_MINI_APP_URL: &str = "https://username.github.io/valentine-site";

/// Default relationship start used when the variable is absent.
const DEFAULT_RELATIONSHIP_START: &str = "2024-02-14 00:00:00";

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token.
    pub telegram_bot_token: String,
    /// Mini-app page opened by the keyboard's web-app button.
    pub mini_app_url: Url,
    /// API key for the text-generation provider.
    pub openai_api_key: String,
    /// Relationship start timestamp, `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Kept as the raw string: a malformed value is a runtime concern of
    /// time accounting (which falls back to a zero sentinel), not a reason
    /// to refuse startup.
    pub relationship_start: String,
    /// Chat id of the designated recipient of proactive messages.
    pub recipient_chat_id: i64,
    /// Chat id receiving mirrored copies of proactive messages.
    pub admin_chat_id: i64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let mini_app_url = env::var("MINI_APP_URL")
            .unwrap_or_else(|_| DEFAULT_MINI_APP_URL.to_string());
        let mini_app_url = if mini_app_url.trim().is_empty() {
            DEFAULT_MINI_APP_URL.to_string()
        } else {
            mini_app_url
        };
        let mini_app_url = Url::parse(&mini_app_url)
            .map_err(|e| anyhow!("Invalid MINI_APP_URL: {}", e))?;

        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY must be set"))?;

        if openai_api_key.trim().is_empty() {
            return Err(anyhow!("OPENAI_API_KEY must be set"));
        }

        let relationship_start = env::var("RELATIONSHIP_START")
            .unwrap_or_else(|_| DEFAULT_RELATIONSHIP_START.to_string());

        let recipient_chat_id = env::var("RECIPIENT_CHAT_ID")
            .map_err(|_| anyhow!("RECIPIENT_CHAT_ID must be set"))?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid RECIPIENT_CHAT_ID"))?;

        let admin_chat_id = env::var("ADMIN_CHAT_ID")
            .map_err(|_| anyhow!("ADMIN_CHAT_ID must be set"))?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid ADMIN_CHAT_ID"))?;

        Ok(Config {
            telegram_bot_token: token,
            mini_app_url,
            openai_api_key,
            relationship_start,
            recipient_chat_id,
            admin_chat_id,
        })
    }
}
