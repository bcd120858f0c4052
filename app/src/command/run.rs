use crate::command::CommandStrategy;
use std::sync::Arc;
use std::time::Duration;
use tagfeed_config::Config;
use tagfeed_core::PostStore;
use tagfeed_store::RedisPostStore;
use tagfeed_telegram::ChannelBot;
use tokio::time::sleep;
use tracing::{info, warn};

/// Connect to Redis with exponential backoff retry.
///
/// # Retry Behavior
/// - First retry: 1s
/// - Second retry: 2s
/// - Third and beyond: 3s (capped)
/// - Retries indefinitely until connection succeeds
async fn connect_store_with_retry(url: &str) -> anyhow::Result<RedisPostStore> {
    const MAX_DELAY: Duration = Duration::from_secs(3);
    const INITIAL_DELAY: Duration = Duration::from_secs(1);

    let mut attempt = 0u32;
    let mut delay = INITIAL_DELAY;

    loop {
        attempt += 1;
        match RedisPostStore::connect(url).await {
            Ok(store) => {
                info!("Store connected successfully on attempt {attempt}");
                return Ok(store);
            }
            Err(e) => {
                warn!(
                    "Failed to connect to Redis (attempt {attempt}): {e}. Retrying in {}s...",
                    delay.as_secs()
                );
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }
}

/// Strategy for running the digest bot.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl CommandStrategy for RunStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        info!("Loaded config from ~/tagfeed/config.json");

        info!("Starting bot for channel {}", config.telegram.channel);

        let store: Arc<dyn PostStore> =
            Arc::new(connect_store_with_retry(&config.redis.url).await?);

        let bot = ChannelBot::new(config.telegram.token.clone(), &config.telegram.channel, store)?;

        info!("Bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
