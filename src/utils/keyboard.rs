use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

/// Builds the main keyboard with the mini-app surprise button.
pub fn main_keyboard(mini_app_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        "💌 Открыть сюрприз",
        WebAppInfo {
            url: mini_app_url.clone(),
        },
    )]])
}
