//! # Valentine Companion Bot
//!
//! A personal Telegram bot for a single recipient, with scripted and
//! AI-generated romantic messages.
//!
//! ## Features
//! - Relationship day counter with derived hour/minute/second totals
//! - AI-generated confessions and chat replies with guaranteed fallbacks
//! - Two daily reminder messages fired at randomized times
//! - Mini-app surprise page offered through an inline keyboard
//! - Mirrored copies of proactive messages to an admin chat

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Shared application state passed into handlers and services
pub mod context;
/// Content generation, eligibility tracking, and scheduled reminders
pub mod services;
/// Utility functions for datetime, keyboards, and logging
pub mod utils;
