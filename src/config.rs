// Configuration loading via the 'config' crate, with dotenv support.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use tokio::time::Duration;

use crate::carousel;
use crate::chat;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_address: String,
    /// Base directory for static assets served under /static.
    pub static_dir: String,
    pub carousel_interval_ms: u64,
    pub carousel_cooldown_ms: u64,
    pub chat_reply_delay_ms: u64,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("server_address", "127.0.0.1:3000")?
            .set_default("static_dir", "static")?
            .set_default(
                "carousel_interval_ms",
                carousel::DEFAULT_INTERVAL.as_millis() as i64,
            )?
            .set_default(
                "carousel_cooldown_ms",
                carousel::DEFAULT_COOLDOWN.as_millis() as i64,
            )?
            .set_default(
                "chat_reply_delay_ms",
                chat::DEFAULT_REPLY_DELAY.as_millis() as i64,
            )?
            // Optional config.toml next to the binary
            .add_source(File::with_name("config").required(false))
            // Environment overrides, e.g. APP_SERVER_ADDRESS
            .add_source(Environment::with_prefix("APP"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn carousel_cooldown(&self) -> Duration {
        Duration::from_millis(self.carousel_cooldown_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }
}
