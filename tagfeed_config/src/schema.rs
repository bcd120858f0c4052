use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub redis: RedisConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather.
    pub token: String,
    /// Username of the channel whose posts are routed, e.g. "@campus_feed".
    pub channel: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RedisConfig {
    #[serde(default = "RedisConfig::default_url")]
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

impl RedisConfig {
    fn default_url() -> String {
        "redis://127.0.0.1:6379".to_string()
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "telegram": {
    "token": "your-bot-token-here",
    "channel": "@your_channel"
  },
  "redis": {
    "url": "redis://127.0.0.1:6379"
  }
}"#;

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("tagfeed");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'tagfeed init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Both Telegram values are mandatory; refusing to start beats
    /// running a bot that can neither poll nor recognize its channel.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.telegram.token.is_empty() {
            anyhow::bail!("\"telegram.token\" is missing or empty in config");
        }
        if self.telegram.channel.is_empty() {
            anyhow::bail!("\"telegram.channel\" is missing or empty in config");
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("tagfeed");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the config file and add your bot token");
        println!("   2. Set \"telegram.channel\" to the channel the bot listens to");
        println!("   3. Ensure Redis is running at the configured URL");
        println!("   4. Run 'tagfeed run' to start the bot");
        println!();
        Ok(())
    }
}
