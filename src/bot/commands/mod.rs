/// AI confession command
pub mod confession;
/// Relationship day counter command
pub mod days;

use teloxide::utils::command::BotCommands;

/// Commands understood by the bot.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Вот что я умею:")]
pub enum Command {
    /// Greets the recipient and opts them in to daily reminders.
    #[command(description = "Начать сначала")]
    Start,
    /// Shows this command list.
    #[command(description = "Справка")]
    Help,
    /// Reports bot readiness and the sender's identity.
    #[command(description = "Статус бота")]
    Status,
    /// Shows how long the relationship has lasted.
    #[command(description = "Сколько мы уже вместе")]
    Days,
    /// Sends an AI-generated love confession.
    #[command(description = "Признание в любви")]
    Confession,
}

impl Command {
    /// Command name used in structured CMD_START / CMD_ERROR log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Status => "status",
            Command::Days => "days",
            Command::Confession => "confession",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_match_dispatch_syntax() {
        assert_eq!(Command::Start.name(), "start");
        assert_eq!(Command::Help.name(), "help");
        assert_eq!(Command::Status.name(), "status");
        assert_eq!(Command::Days.name(), "days");
        assert_eq!(Command::Confession.name(), "confession");
    }

    #[test]
    fn descriptions_cover_every_command() {
        use teloxide::utils::command::BotCommands;

        let descriptions = Command::descriptions().to_string();
        for name in ["start", "help", "status", "days", "confession"] {
            assert!(
                descriptions.contains(&format!("/{}", name)),
                "missing /{} in descriptions",
                name
            );
        }
    }
}

