#![allow(clippy::unwrap_used)]

use valentine_bot::services::generator::{MessageGenerator, PromptKind};
use valentine_bot::services::scheduler::ReminderKind;

// Nothing listens here, so every call fails fast with connection refused
// and exercises the fallback path.
fn unreachable_generator() -> MessageGenerator {
    MessageGenerator::with_api_base("sk-test".to_string(), "http://127.0.0.1:9/v1".to_string())
}

#[tokio::test]
async fn test_confession_falls_back_on_provider_failure() {
    let generator = unreachable_generator();

    let text = generator.generate_confession().await;

    assert!(!text.is_empty());
    assert_eq!(text, PromptKind::Confession.fallback());
}

#[tokio::test]
async fn test_chat_response_falls_back_on_provider_failure() {
    let generator = unreachable_generator();

    let text = generator.generate_chat_response("я скучаю").await;

    assert!(!text.is_empty());
    assert_eq!(text, PromptKind::Chat.fallback());
}

#[tokio::test]
async fn test_reminder_falls_back_per_kind() {
    let generator = unreachable_generator();

    let morning = generator.generate_reminder(ReminderKind::Morning).await;
    let evening = generator.generate_reminder(ReminderKind::Evening).await;

    assert_eq!(morning, PromptKind::ReminderMorning.fallback());
    assert_eq!(evening, PromptKind::ReminderEvening.fallback());
    assert_ne!(morning, evening);
}

#[test]
fn test_all_fallbacks_are_non_empty() {
    for kind in [
        PromptKind::Confession,
        PromptKind::Chat,
        PromptKind::ReminderMorning,
        PromptKind::ReminderEvening,
    ] {
        assert!(!kind.fallback().is_empty());
    }
}
