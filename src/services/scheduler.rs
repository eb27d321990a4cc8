use crate::context::AppContext;
use crate::services::generator::PromptKind;
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

/// The two proactive messages sent every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    /// Good-morning message, fired between 09:00 and 11:59.
    Morning,
    /// Good-night message, fired between 21:00 and 22:59.
    Evening,
}

impl ReminderKind {
    /// Inclusive hour window the fire time is drawn from.
    pub fn hour_window(&self) -> RangeInclusive<u32> {
        match self {
            ReminderKind::Morning => 9..=11,
            ReminderKind::Evening => 21..=22,
        }
    }

    /// Prompt template backing this reminder.
    pub fn prompt_kind(&self) -> PromptKind {
        match self {
            ReminderKind::Morning => PromptKind::ReminderMorning,
            ReminderKind::Evening => PromptKind::ReminderEvening,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReminderKind::Morning => "morning",
            ReminderKind::Evening => "evening",
        }
    }
}

/// A daily fire time, fixed for the process lifetime once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireTime {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute of hour, 0-59.
    pub minute: u32,
}

impl FireTime {
    /// Draws a fire time uniformly within the kind's hour window.
    pub fn draw(kind: ReminderKind) -> Self {
        let mut rng = rand::rng();
        Self {
            hour: rng.random_range(kind.hour_window()),
            minute: rng.random_range(0..=59),
        }
    }

    /// Six-field cron expression firing once a day at this time.
    pub fn cron_expression(&self) -> String {
        format!("0 {} {} * * *", self.minute, self.hour)
    }
}

/// Builds the text for one reminder firing, or `None` when the designated
/// recipient has not opted in (in which case nothing must be delivered).
pub async fn reminder_message(ctx: &AppContext, kind: ReminderKind) -> Option<String> {
    let recipient = ctx.config.recipient_chat_id;
    if !ctx.registry.is_eligible(recipient) {
        tracing::info!(
            "Skipping {} reminder: recipient {} has not started the bot",
            kind.label(),
            recipient
        );
        return None;
    }

    Some(ctx.generator.generate_reminder(kind).await)
}

/// Sends one message, logging a failure instead of propagating it so a
/// blocked chat never takes down the sibling delivery or the scheduler.
async fn deliver(bot: &Bot, chat_id: i64, text: &str) {
    if let Err(e) = bot.send_message(teloxide::types::ChatId(chat_id), text).await {
        tracing::error!("Failed to deliver reminder to chat {}: {}", chat_id, e);
    }
}

async fn fire_reminder(bot: Bot, ctx: Arc<AppContext>, kind: ReminderKind) {
    tracing::info!("Firing {} reminder", kind.label());

    let Some(text) = reminder_message(&ctx, kind).await else {
        return;
    };

    deliver(&bot, ctx.config.recipient_chat_id, &text).await;
    deliver(&bot, ctx.config.admin_chat_id, &text).await;
}

/// Owns the cron scheduler and the two daily reminder jobs.
pub struct ReminderService {
    bot: Bot,
    ctx: Arc<AppContext>,
    scheduler: JobScheduler,
    fire_times: [(ReminderKind, FireTime); 2],
}

impl ReminderService {
    /// Creates the service and draws both fire times. The times stay fixed
    /// until the process restarts.
    pub async fn new(
        bot: Bot,
        ctx: Arc<AppContext>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        let fire_times = [
            (ReminderKind::Morning, FireTime::draw(ReminderKind::Morning)),
            (ReminderKind::Evening, FireTime::draw(ReminderKind::Evening)),
        ];

        Ok(Self {
            bot,
            ctx,
            scheduler,
            fire_times,
        })
    }

    /// Registers both daily jobs and starts the scheduler.
    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for (kind, fire_time) in self.fire_times {
            let bot = self.bot.clone();
            let ctx = self.ctx.clone();

            let job = Job::new_async(fire_time.cron_expression().as_str(), move |_uuid, _l| {
                let bot = bot.clone();
                let ctx = ctx.clone();
                Box::pin(async move {
                    fire_reminder(bot, ctx, kind).await;
                })
            })?;

            self.scheduler.add(job).await?;

            tracing::info!(
                "Scheduled daily {} reminder at {:02}:{:02}",
                kind.label(),
                fire_time.hour,
                fire_time.minute
            );
        }

        self.scheduler.start().await?;
        Ok(())
    }

    /// Stops accepting trigger events; in-flight firings finish best-effort.
    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Manual trigger for testing.
    pub async fn fire_now(&self, kind: ReminderKind) {
        fire_reminder(self.bot.clone(), self.ctx.clone(), kind).await;
    }
}
