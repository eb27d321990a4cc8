use crate::context::AppContext;
use crate::utils::keyboard::main_keyboard;
use teloxide::prelude::*;

/// Handles /confession: one AI-generated confession, falling back to the
/// fixed text inside the generator when the provider call fails.
pub async fn handle_confession(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let text = ctx.generator.generate_confession().await;

    bot.send_message(msg.chat.id, text)
        .reply_markup(main_keyboard(&ctx.config.mini_app_url))
        .await?;

    Ok(())
}
