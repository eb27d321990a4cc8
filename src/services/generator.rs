use crate::services::scheduler::ReminderKind;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

/// Bounded wait for one generation call. A hung provider resolves into the
/// fallback string instead of stalling the calling task forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The fixed prompt templates the bot can generate from.
///
/// Every kind carries its own system prompt, sampling parameters, and a
/// hardcoded fallback returned whenever the provider call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Short declarative love confession, no caller input.
    Confession,
    /// Reply to a free-text message from the recipient.
    Chat,
    /// Proactive good-morning message.
    ReminderMorning,
    /// Proactive good-night message.
    ReminderEvening,
}

impl PromptKind {
    fn system_prompt(&self) -> &'static str {
        match self {
            PromptKind::Confession => {
                "Ты — влюблённый романтик. Напиши короткое, тёплое признание \
                 в любви для любимой девушки. 2-3 предложения, без хэштегов."
            }
            PromptKind::Chat => {
                "Ты — заботливый и влюблённый парень, переписываешься со своей \
                 девушкой. Отвечай тепло, нежно и коротко, 1-3 предложения."
            }
            PromptKind::ReminderMorning => {
                "Напиши короткое нежное пожелание доброго утра для любимой \
                 девушки. 1-2 предложения, тепло и искренне."
            }
            PromptKind::ReminderEvening => {
                "Напиши короткое нежное пожелание спокойной ночи для любимой \
                 девушки. 1-2 предложения, тепло и искренне."
            }
        }
    }

    fn temperature(&self) -> f32 {
        match self {
            PromptKind::Confession => 0.9,
            PromptKind::Chat => 0.8,
            PromptKind::ReminderMorning | PromptKind::ReminderEvening => 0.9,
        }
    }

    fn max_tokens(&self) -> u32 {
        match self {
            PromptKind::Confession => 150,
            PromptKind::Chat => 120,
            PromptKind::ReminderMorning | PromptKind::ReminderEvening => 100,
        }
    }

    /// Fixed message substituted when generation fails. Always non-empty.
    pub fn fallback(&self) -> &'static str {
        match self {
            PromptKind::Confession => {
                "Я тебя люблю! Больше всех на свете 💕"
            }
            PromptKind::Chat => {
                "И я тебя люблю! 💕 Нажми кнопку ниже, чтобы увидеть сюрприз"
            }
            PromptKind::ReminderMorning => {
                "Доброе утро, солнышко! Пусть день будет таким же красивым, как ты ☀️💕"
            }
            PromptKind::ReminderEvening => {
                "Спокойной ночи, любимая! Сладких снов 🌙💕"
            }
        }
    }
}

/// Text-generation client with a guaranteed-fallback contract.
///
/// All prompt kinds share one generation path: fill the template, make a
/// single provider call, and on any failure return the kind's fallback.
/// Calls are stateless; no conversation memory is kept between them.
#[derive(Clone)]
pub struct MessageGenerator {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl MessageGenerator {
    /// Creates a generator against the default provider endpoint
    /// (overridable via `OPENAI_BASE_URL`).
    pub fn new(api_key: String) -> Self {
        let api_base =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_api_base(api_key, api_base)
    }

    /// Creates a generator against an explicit endpoint.
    pub fn with_api_base(api_key: String, api_base: String) -> Self {
        // Client construction only fails on TLS backend misconfiguration;
        // fall back to the default client rather than propagating.
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_base,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Generates a message for `kind`, substituting the kind's fallback on
    /// any provider failure. Never returns an error to the caller.
    pub async fn generate(&self, kind: PromptKind, user_text: Option<&str>) -> String {
        match self.complete(kind, user_text).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Generation failed for {:?}, using fallback: {:#}", kind, e);
                kind.fallback().to_string()
            }
        }
    }

    /// AI love confession, no caller input.
    pub async fn generate_confession(&self) -> String {
        self.generate(PromptKind::Confession, None).await
    }

    /// AI reply conditioned on the recipient's message text.
    pub async fn generate_chat_response(&self, user_text: &str) -> String {
        self.generate(PromptKind::Chat, Some(user_text)).await
    }

    /// AI proactive reminder for the given time of day.
    pub async fn generate_reminder(&self, kind: ReminderKind) -> String {
        self.generate(kind.prompt_kind(), None).await
    }

    /// One chat-completion call. Errors here never escape `generate`.
    async fn complete(&self, kind: PromptKind, user_text: Option<&str>) -> Result<String> {
        let mut messages = vec![json!({
            "role": "system",
            "content": kind.system_prompt(),
        })];
        if let Some(text) = user_text {
            messages.push(json!({
                "role": "user",
                "content": text,
            }));
        } else {
            // The completions endpoint requires at least one user turn.
            messages.push(json!({
                "role": "user",
                "content": "Напиши сообщение.",
            }));
        }

        let payload = json!({
            "model": self.model,
            "messages": messages,
            "temperature": kind.temperature(),
            "max_tokens": kind.max_tokens(),
        });

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.api_base.trim_end_matches('/')
            ))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .context("Failed to send generation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Provider error {}: {}", status, error_text));
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse generation response")?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Unexpected response shape: {}", body))?
            .trim();

        if content.is_empty() {
            return Err(anyhow!("Provider returned an empty message"));
        }

        Ok(content.to_string())
    }
}
