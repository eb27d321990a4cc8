use crate::context::AppContext;
use crate::utils::datetime::{elapsed_since, Elapsed};
use crate::utils::keyboard::main_keyboard;
use teloxide::prelude::*;

/// Renders the elapsed-time breakdown sent for /days.
pub fn render_days(elapsed: &Elapsed) -> String {
    format!(
        "💕 Мы вместе уже:\n\n\
         📅 {} дней, {} часов, {} минут, {} секунд\n\n\
         ⏰ Всего часов: {}\n\
         ⏱ Всего минут: {}\n\
         ⌛ Всего секунд: {}",
        elapsed.days,
        elapsed.hours,
        elapsed.minutes,
        elapsed.seconds,
        elapsed.total_hours(),
        elapsed.total_minutes(),
        elapsed.total_seconds()
    )
}

/// Handles /days: elapsed time since the relationship start.
pub async fn handle_days(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let elapsed = elapsed_since(&ctx.config.relationship_start);

    bot.send_message(msg.chat.id, render_days(&elapsed))
        .reply_markup(main_keyboard(&ctx.config.mini_app_url))
        .await?;

    Ok(())
}
