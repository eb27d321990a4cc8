#![allow(clippy::unwrap_used)]

use url::Url;
use valentine_bot::config::Config;
use valentine_bot::context::AppContext;
use valentine_bot::services::eligibility::EligibilityRegistry;
use valentine_bot::services::generator::{MessageGenerator, PromptKind};
use valentine_bot::services::scheduler::{reminder_message, FireTime, ReminderKind};

const RECIPIENT: i64 = 111222333;

fn test_context() -> AppContext {
    let config = Config {
        telegram_bot_token: "test_token".to_string(),
        mini_app_url: Url::parse("https://example.com/valentine").unwrap(),
        openai_api_key: "sk-test".to_string(),
        relationship_start: "2025-01-01 00:00:00".to_string(),
        recipient_chat_id: RECIPIENT,
        admin_chat_id: 444555666,
    };

    AppContext {
        config,
        registry: EligibilityRegistry::new(),
        // Unreachable endpoint: any generation resolves to the fallback
        generator: MessageGenerator::with_api_base(
            "sk-test".to_string(),
            "http://127.0.0.1:9/v1".to_string(),
        ),
    }
}

#[test]
fn test_fire_times_stay_within_windows() {
    for _ in 0..200 {
        let morning = FireTime::draw(ReminderKind::Morning);
        assert!((9..=11).contains(&morning.hour), "bad hour {}", morning.hour);
        assert!(morning.minute <= 59);

        let evening = FireTime::draw(ReminderKind::Evening);
        assert!((21..=22).contains(&evening.hour), "bad hour {}", evening.hour);
        assert!(evening.minute <= 59);
    }
}

#[test]
fn test_cron_expression_format() {
    let fire_time = FireTime { hour: 9, minute: 5 };
    assert_eq!(fire_time.cron_expression(), "0 5 9 * * *");

    let fire_time = FireTime {
        hour: 22,
        minute: 45,
    };
    assert_eq!(fire_time.cron_expression(), "0 45 22 * * *");
}

#[test]
fn test_repeated_draws_are_independent() {
    // Simulated restarts: draws vary rather than repeating one value
    let draws: Vec<FireTime> = (0..50).map(|_| FireTime::draw(ReminderKind::Morning)).collect();
    let first = draws[0];
    assert!(
        draws.iter().any(|d| *d != first),
        "50 independent draws all identical"
    );
}

#[test]
fn test_reminder_kinds_map_to_distinct_prompts() {
    assert_eq!(
        ReminderKind::Morning.prompt_kind(),
        PromptKind::ReminderMorning
    );
    assert_eq!(
        ReminderKind::Evening.prompt_kind(),
        PromptKind::ReminderEvening
    );
}

#[tokio::test]
async fn test_reminder_skipped_when_recipient_not_eligible() {
    let ctx = test_context();

    let message = reminder_message(&ctx, ReminderKind::Morning).await;

    assert!(message.is_none());
}

#[tokio::test]
async fn test_reminder_uses_fallback_when_provider_fails() {
    let ctx = test_context();
    ctx.registry.mark_eligible(RECIPIENT);

    let message = reminder_message(&ctx, ReminderKind::Morning).await;

    assert_eq!(
        message.as_deref(),
        Some(PromptKind::ReminderMorning.fallback())
    );
}

#[tokio::test]
async fn test_evening_reminder_uses_evening_fallback() {
    let ctx = test_context();
    ctx.registry.mark_eligible(RECIPIENT);

    let message = reminder_message(&ctx, ReminderKind::Evening).await;

    assert_eq!(
        message.as_deref(),
        Some(PromptKind::ReminderEvening.fallback())
    );
}

#[tokio::test]
async fn test_other_eligible_ids_do_not_trigger_reminders() {
    let ctx = test_context();
    // Someone other than the designated recipient opted in
    ctx.registry.mark_eligible(999);

    let message = reminder_message(&ctx, ReminderKind::Morning).await;

    assert!(message.is_none());
}
