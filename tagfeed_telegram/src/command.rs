use tagfeed_core::Category;
use teloxide::types::BotCommand;

/// Bot commands: two text commands plus four menu triggers, each of
/// which opens an inline keyboard of category buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    DailyNews,
    Events,
    Opportunities,
    Humor,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "Start the bot".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Show help".to_string(),
            },
            BotCommand {
                command: "dailynews".to_string(),
                description: "Today's news digests".to_string(),
            },
            BotCommand {
                command: "events".to_string(),
                description: "Today's events".to_string(),
            },
            BotCommand {
                command: "opportunities".to_string(),
                description: "Internships and jobs".to_string(),
            },
            BotCommand {
                command: "humor".to_string(),
                description: "Today's humor".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    #[must_use]
    pub fn parse_from_text(text: &str, _bot_name: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        // Remove bot mention if present (e.g., "/events@my_bot")
        let text = text.split('@').next().unwrap_or(&text).to_string();

        match text.as_str() {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/dailynews" => Some(Self::DailyNews),
            "/events" => Some(Self::Events),
            "/opportunities" => Some(Self::Opportunities),
            "/humor" => Some(Self::Humor),
            _ => None,
        }
    }

    /// Category buttons this command renders, as (label, category)
    /// pairs. `None` for the plain text commands.
    #[must_use]
    pub const fn menu(self) -> Option<&'static [(&'static str, Category)]> {
        match self {
            Self::DailyNews => Some(&[
                ("Local News", Category::LocalNews),
                ("International News", Category::InternationalNews),
            ]),
            Self::Events => Some(&[("Events", Category::Events)]),
            Self::Opportunities => Some(&[
                ("Internships", Category::Internships),
                ("Jobs", Category::Jobs),
            ]),
            Self::Humor => Some(&[("Humor", Category::Humor)]),
            Self::Start | Self::Help => None,
        }
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r"
Tagfeed channel digest bot

Commands:
/dailynews     - Today's local and international news
/events        - Today's events
/opportunities - Internships and jobs
/humor         - Today's humor
/help          - Show this help

Pick a category button and the bot replies with every post
stored for it today.
"
    }

    #[must_use]
    pub const fn welcome_text() -> &'static str {
        r"
Welcome to the Tagfeed digest bot!

Channel posts are sorted by hashtag into daily category feeds.
Use /dailynews, /events, /opportunities or /humor to browse
today's posts.

Send /help for the command list.
"
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse_from_text("/start", ""), Some(Command::Start));
        assert_eq!(
            Command::parse_from_text("/dailynews", ""),
            Some(Command::DailyNews)
        );
        assert_eq!(
            Command::parse_from_text("/opportunities", ""),
            Some(Command::Opportunities)
        );
        assert_eq!(Command::parse_from_text("/humor", ""), Some(Command::Humor));
    }

    #[test]
    fn strips_bot_mention_and_whitespace() {
        assert_eq!(
            Command::parse_from_text("/events@digest_bot", ""),
            Some(Command::Events)
        );
        assert_eq!(
            Command::parse_from_text("  /HELP  ", ""),
            Some(Command::Help)
        );
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(Command::parse_from_text("hello there", ""), None);
        assert_eq!(Command::parse_from_text("/unknown", ""), None);
    }

    #[test]
    fn menu_commands_carry_their_buttons() {
        let daily = Command::DailyNews.menu().expect("dailynews has a menu");
        assert_eq!(
            daily
                .iter()
                .map(|(_, c)| *c)
                .collect::<Vec<_>>(),
            vec![Category::LocalNews, Category::InternationalNews]
        );

        let opportunities = Command::Opportunities.menu().expect("opportunities has a menu");
        assert_eq!(opportunities.len(), 2);

        assert!(Command::Start.menu().is_none());
        assert!(Command::Help.menu().is_none());
    }

    #[test]
    fn button_payloads_round_trip_through_wire_names() {
        for cmd in [
            Command::DailyNews,
            Command::Events,
            Command::Opportunities,
            Command::Humor,
        ] {
            for (_, category) in cmd.menu().expect("menu command") {
                assert_eq!(Category::from_wire(category.wire_name()), Some(*category));
            }
        }
    }
}
