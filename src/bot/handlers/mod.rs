/// Free-text message handler
pub mod general_message;
/// Command dispatch
pub mod message;

use crate::bot::commands::Command;
use crate::context::AppContext;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

/// Builds the dispatch schema over the shared application context.
pub struct BotHandler {
    ctx: Arc<AppContext>,
}

impl BotHandler {
    /// Wraps the context for schema construction.
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Dispatch tree: commands first, then the free-text chat branch.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx = self.ctx.clone();
        let ctx_text = self.ctx.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let ctx = ctx.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(dptree::endpoint(move |bot: Bot, msg: Message| {
                let ctx = ctx_text.clone();
                async move { general_message::handle_general_message(bot, msg, ctx).await }
            }))
    }
}
