//! Message routing: `/start` gets the static welcome, any other text is
//! treated as a city name and answered with the lookup result.

use std::sync::Arc;

use teloxide::{prelude::*, types::ReplyParameters, utils::command::BotCommands};
use tracing::info;
use weather_core::{WeatherProvider, lookup};

/// Static greeting; the bot's single function explained in one line.
pub const WELCOME: &str = "Привет! 👋\nЯ бот для погоды. Просто отправь мне название города.";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    // The payload (deep-link start parameter or trailing text) is ignored;
    // /start always greets.
    #[command(description = "приветствие")]
    Start(String),
}

/// Run the dispatcher until the process is terminated. The provider is the
/// only shared dependency; it is injected here once, at the composition root.
pub async fn run(bot: Bot, provider: Arc<dyn WeatherProvider>) {
    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(
            // Plain text only; stickers, photos and the like fall through
            // and are ignored.
            dptree::filter_map(|msg: Message| msg.text().map(ToOwned::to_owned))
                .endpoint(on_text),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![provider])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn on_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start(_) => {
            info!(chat_id = %msg.chat.id, "greeting new chat");
            bot.send_message(msg.chat.id, WELCOME)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
        }
    }
    Ok(())
}

async fn on_text(
    bot: Bot,
    msg: Message,
    city: String,
    provider: Arc<dyn WeatherProvider>,
) -> ResponseResult<()> {
    info!(chat_id = %msg.chat.id, city = %city, "weather requested");

    let reply = lookup(provider.as_ref(), &city).await;
    // A fresh message, not a threaded reply.
    bot.send_message(msg.chat.id, reply).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_parses_with_and_without_payload() {
        let cmd = Command::parse("/start", "weatherbot").expect("bare /start must parse");
        assert_eq!(cmd, Command::Start(String::new()));

        let cmd = Command::parse("/start москва", "weatherbot")
            .expect("/start with trailing text must still parse");
        assert_eq!(cmd, Command::Start("москва".to_string()));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(Command::parse("paris", "weatherbot").is_err());
        assert!(Command::parse("/weather paris", "weatherbot").is_err());
    }

    #[test]
    fn welcome_mentions_how_to_use_the_bot() {
        assert!(WELCOME.contains("название города"));
    }
}
