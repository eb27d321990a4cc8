#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use valentine_bot::services::eligibility::EligibilityRegistry;

#[test]
fn test_mark_eligible_is_idempotent() {
    let registry = EligibilityRegistry::new();

    assert!(registry.mark_eligible(42));
    // Second opt-in is a no-op
    assert!(!registry.mark_eligible(42));
    assert!(registry.is_eligible(42));
}

#[test]
fn test_never_marked_id_is_not_eligible() {
    let registry = EligibilityRegistry::new();

    registry.mark_eligible(42);

    assert!(!registry.is_eligible(43));
    assert!(!registry.is_eligible(0));
    assert!(!registry.is_eligible(-42));
}

#[test]
fn test_fresh_registry_is_empty() {
    let registry = EligibilityRegistry::new();
    assert!(!registry.is_eligible(1));
}

#[test]
fn test_concurrent_reads_and_inserts() {
    let registry = Arc::new(EligibilityRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                for n in 0..100 {
                    registry.mark_eligible(i * 100 + n);
                    registry.is_eligible(42);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every inserted id is visible, no torn state
    for i in 0..8 {
        for n in 0..100 {
            assert!(registry.is_eligible(i * 100 + n));
        }
    }
}
