use crate::{ChannelBot, Command, Error, Result};
use chrono::Local;
use tagfeed_core::{Category, DayEntries, RouteOutcome};
use teloxide::payloads::SendMessageSetters;
use teloxide::requests::Requester;
use teloxide::types::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message};
use tracing::{info, warn};

/// Inbound update normalized to what routing cares about. Channel posts
/// and direct messages both reduce to this shape.
pub struct Inbound<'a> {
    /// Username of the originating chat, if it has one.
    pub sender: Option<&'a str>,
    /// Body text, or the caption when the post is a media item.
    pub text: Option<&'a str>,
    /// Whether a photo payload is attached. The payload itself never
    /// participates in classification.
    pub has_media: bool,
}

impl<'a> Inbound<'a> {
    #[must_use]
    pub fn from_message(msg: &'a Message) -> Self {
        Self {
            sender: msg.chat.username(),
            text: msg.text().or_else(|| msg.caption()),
            has_media: msg.photo().is_some(),
        }
    }
}

/// Handle a broadcast-style channel post: only posts from the
/// configured channel are routed, everything else is logged and
/// dropped.
pub async fn handle_channel_post(bot: ChannelBot, msg: Message) -> Result<()> {
    let inbound = Inbound::from_message(&msg);

    let Some(sender) = inbound.sender else {
        info!("channel post without a chat username, skipping");
        return Ok(());
    };
    if sender != bot.channel() {
        info!("post from foreign channel @{sender}, skipping");
        return Ok(());
    }

    let Some(text) = inbound.text else {
        info!("post from @{sender} has no text or caption, skipping");
        return Ok(());
    };
    if inbound.has_media {
        info!("media post with caption from @{sender}");
    } else {
        info!("text post from @{sender}");
    }

    route(&bot, text).await
}

/// Handle a direct message: commands open menus, anything else goes
/// through the same classify-and-store path as channel posts.
pub async fn handle_message(bot: ChannelBot, msg: Message) -> Result<()> {
    if let Some(cmd) = msg.text().and_then(|t| Command::parse_from_text(t, "")) {
        return handle_command(bot, &msg, cmd).await;
    }

    let inbound = Inbound::from_message(&msg);
    let Some(text) = inbound.text else {
        info!("message has no text or caption, skipping");
        return Ok(());
    };

    route(&bot, text).await
}

async fn route(bot: &ChannelBot, text: &str) -> Result<()> {
    let now = Local::now().naive_local();
    let outcome = bot
        .router()
        .categorize_and_store(text, now)
        .await
        .map_err(Error::Store)?;

    if outcome == RouteOutcome::Unclassified {
        info!("post matched no category, dropped");
    }
    Ok(())
}

/// Handle bot commands.
pub async fn handle_command(bot: ChannelBot, msg: &Message, cmd: Command) -> Result<()> {
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    match cmd {
        Command::Start => {
            info!("[@{username}] Command: /start");
            bot.bot
                .send_message(msg.chat.id, Command::welcome_text())
                .await?;
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.bot
                .send_message(msg.chat.id, Command::help_text())
                .await?;
        }
        Command::DailyNews | Command::Events | Command::Opportunities | Command::Humor => {
            let Some(menu) = cmd.menu() else {
                return Ok(());
            };
            info!("[@{username}] Menu command: {cmd:?}");
            bot.bot
                .send_message(msg.chat.id, "Choose a category:")
                .reply_markup(category_keyboard(menu))
                .await?;
        }
    }

    Ok(())
}

/// One button per row, labeled for humans, carrying the category wire
/// name as callback data.
fn category_keyboard(menu: &[(&'static str, Category)]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = menu
        .iter()
        .map(|(label, category)| {
            vec![InlineKeyboardButton::callback(*label, category.wire_name())]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Handle a category button press: acknowledge it, then reply with each
/// of today's entries, or a distinct nothing-available message.
pub async fn handle_callback(bot: ChannelBot, q: CallbackQuery) -> Result<()> {
    bot.bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        warn!("callback query without data, ignoring");
        return Ok(());
    };
    let Some(category) = Category::from_wire(data) else {
        warn!("unknown category in callback data: {data}");
        return Ok(());
    };
    let Some(message) = q.message else {
        info!("callback without an originating message, nothing to reply to");
        return Ok(());
    };
    let chat_id = message.chat().id;

    let now = Local::now().naive_local();
    let entries = bot
        .retrieval()
        .today(category, now)
        .await
        .map_err(Error::Store)?;

    match entries {
        DayEntries::Entries(entries) => {
            info!("replying with {} {} entries", entries.len(), category.wire_name());
            for entry in entries {
                bot.bot.send_message(chat_id, entry).await?;
            }
        }
        DayEntries::NothingToday => {
            bot.bot
                .send_message(
                    chat_id,
                    format!("No {} available for today.", category.display_name()),
                )
                .await?;
        }
    }

    Ok(())
}
