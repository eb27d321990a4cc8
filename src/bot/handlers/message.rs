use crate::bot::commands::Command;
use crate::context::AppContext;
use crate::utils::keyboard::main_keyboard;
use crate::utils::logging::{log_command_error, log_command_start};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

const APOLOGY_TEXT: &str = "Произошла ошибка 😔\nПопробуй еще раз или используй /start";

/// Dispatches one parsed command.
///
/// Any error from a command arm is logged server-side and turned into a
/// generic apology; nothing below this boundary terminates the process.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<AppContext>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg
        .from()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown")
        .to_string();

    let command_name = cmd.name();
    log_command_start(command_name, &username, user_id, chat_id);

    let result = match cmd {
        Command::Start => handle_start(&bot, &msg, &ctx).await,
        Command::Help => handle_help(&bot, &msg).await,
        Command::Status => handle_status(&bot, &msg, &ctx).await,
        Command::Days => crate::bot::commands::days::handle_days(bot.clone(), msg, &ctx).await,
        Command::Confession => {
            crate::bot::commands::confession::handle_confession(bot.clone(), msg, &ctx).await
        }
    };

    if let Err(e) = result {
        log_command_error(command_name, &username, user_id, chat_id, &e.to_string());
        if let Err(send_err) = bot
            .send_message(teloxide::types::ChatId(chat_id), APOLOGY_TEXT)
            .await
        {
            tracing::error!("Failed to send error message: {}", send_err);
        }
    }

    Ok(())
}

async fn handle_start(bot: &Bot, msg: &Message, ctx: &AppContext) -> ResponseResult<()> {
    let first_name = msg
        .from()
        .map(|u| u.first_name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Малышка");

    // Only the designated recipient opts in to proactive reminders.
    if msg.chat.id.0 == ctx.config.recipient_chat_id && ctx.registry.mark_eligible(msg.chat.id.0) {
        tracing::info!(
            "Recipient {} opted in to daily reminders",
            ctx.config.recipient_chat_id
        );
    }

    let welcome_text = format!(
        "💕 Привет, {}!\n\n\
         Я приготовил для тебя что-то очень милое... 💘\n\
         Теперь я буду писать тебе каждое утро и каждый вечер!",
        first_name
    );

    bot.send_message(msg.chat.id, welcome_text)
        .reply_markup(main_keyboard(&ctx.config.mini_app_url))
        .await?;

    tracing::info!(
        "User {} ({}) started the bot",
        msg.chat.id.0,
        first_name
    );

    Ok(())
}

async fn handle_help(bot: &Bot, msg: &Message) -> ResponseResult<()> {
    let help_text = format!(
        "{}\n\nПросто нажми на кнопку '💌 Открыть сюрприз' или напиши мне что-нибудь 💕",
        Command::descriptions()
    );

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}

async fn handle_status(bot: &Bot, msg: &Message, ctx: &AppContext) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg
        .from()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("No username");

    let status_text = format!(
        "✅ Бот работает!\n\n\
         👤 Твой ID: {}\n\
         📝 Ник: @{}\n\
         💕 Статус: Готов к признаниям!\n\n\
         Нажми кнопку ниже, чтобы открыть сюрприз 💌",
        user_id, username
    );

    bot.send_message(msg.chat.id, status_text)
        .reply_markup(main_keyboard(&ctx.config.mini_app_url))
        .await?;

    Ok(())
}
