use crate::context::AppContext;
use crate::utils::keyboard::main_keyboard;
use std::sync::Arc;
use teloxide::prelude::*;

/// Handles any non-command text: an AI chat reply conditioned on the text.
///
/// Non-text updates (stickers, photos) are ignored to avoid spam.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    ctx: Arc<AppContext>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text.starts_with('/') {
        bot.send_message(
            msg.chat.id,
            "Не знаю такую команду 😅 Напиши /help для справки",
        )
        .await?;
        return Ok(());
    }

    let reply = ctx.generator.generate_chat_response(text).await;

    bot.send_message(msg.chat.id, reply)
        .reply_markup(main_keyboard(&ctx.config.mini_app_url))
        .await?;

    Ok(())
}
