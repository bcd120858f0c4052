use crate::{Command, Result};
use std::sync::Arc;
use std::time::Duration;
use tagfeed_core::{PostStore, Retrieval, Router};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Telegram bot routing one channel's posts into daily category feeds.
pub struct ChannelBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Categorize-and-store orchestrator
    router: Arc<Router>,
    /// Day-list read side
    retrieval: Arc<Retrieval>,
    /// Username of the trusted channel, without the leading @
    channel: String,
}

impl ChannelBot {
    /// Create a new bot around an injected store handle.
    pub fn new(token: String, channel: &str, store: Arc<dyn PostStore>) -> Result<Self> {
        let bot = Bot::new(token);
        // Chat usernames come from the API without the @ prefix.
        let channel = channel.trim_start_matches('@').to_string();

        Ok(Self {
            bot,
            router: Arc::new(Router::new(Arc::clone(&store))),
            retrieval: Arc::new(Retrieval::new(store)),
            channel,
        })
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn retrieval(&self) -> &Retrieval {
        &self.retrieval
    }

    /// Test connection to the Telegram API with exponential backoff.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until the connection succeeds.
    async fn test_connection(&self) -> Result<()> {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(me) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        me.user
                            .username
                            .as_deref()
                            .unwrap_or("no username"),
                        me.user.id
                    );
                    return Ok(());
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);
                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Run the bot: verify connectivity, publish the command list, then
    /// dispatch channel posts, direct messages and button presses.
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await?;
        self.bot.set_my_commands(Command::bot_commands()).await?;

        info!("Routing posts from @{}", self.channel);

        let bot = self.bot.clone();

        let schema = dptree::entry()
            .branch(Update::filter_channel_post().endpoint({
                let bot_clone = self.clone();
                move |_bot: Bot, msg: teloxide::types::Message| {
                    let bot_clone = bot_clone.clone();
                    async move { crate::handler::handle_channel_post(bot_clone, msg).await }
                }
            }))
            .branch(Update::filter_message().endpoint({
                let bot_clone = self.clone();
                move |_bot: Bot, msg: teloxide::types::Message| {
                    let bot_clone = bot_clone.clone();
                    async move { crate::handler::handle_message(bot_clone, msg).await }
                }
            }))
            .branch(Update::filter_callback_query().endpoint({
                let bot_clone = self.clone();
                move |_bot: Bot, q: teloxide::types::CallbackQuery| {
                    let bot_clone = bot_clone.clone();
                    async move { crate::handler::handle_callback(bot_clone, q).await }
                }
            }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

impl Clone for ChannelBot {
    fn clone(&self) -> Self {
        Self {
            bot: self.bot.clone(),
            router: Arc::clone(&self.router),
            retrieval: Arc::clone(&self.retrieval),
            channel: self.channel.clone(),
        }
    }
}
