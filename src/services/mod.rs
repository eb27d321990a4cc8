/// Opt-in set for proactive messages
pub mod eligibility;
/// Templated text generation with guaranteed fallbacks
pub mod generator;
/// Daily reminder jobs at randomized fire times
pub mod scheduler;
