//! Channel credentials
//!
//! Secrets never live in config files. They come from the process
//! environment (optionally seeded from `.env` by the binary) and are only
//! ever logged in masked form.

use std::fmt;

use rewatch_common::privacy::{mask_secret, DEFAULT_VISIBLE_TAIL};

pub const TELEGRAM_BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHANNEL_ID_ENV: &str = "TELEGRAM_CHANNEL_ID";
pub const VK_API_TOKEN_ENV: &str = "VK_API_TOKEN";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Credentials for the publishing channel, the video provider and the
/// text model
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChannelSecrets {
    pub telegram_bot_token: Option<String>,
    pub telegram_channel_id: Option<String>,
    pub vk_api_token: Option<String>,
    pub openai_api_key: Option<String>,
}

impl ChannelSecrets {
    /// Read all secrets from the environment. Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: secret_var(TELEGRAM_BOT_TOKEN_ENV),
            telegram_channel_id: secret_var(TELEGRAM_CHANNEL_ID_ENV),
            vk_api_token: secret_var(VK_API_TOKEN_ENV),
            openai_api_key: secret_var(OPENAI_API_KEY_ENV),
        }
    }

    /// `(name, masked value)` pairs suitable for logging
    pub fn masked(&self) -> [(&'static str, String); 4] {
        [
            (TELEGRAM_BOT_TOKEN_ENV, mask(self.telegram_bot_token.as_deref())),
            (TELEGRAM_CHANNEL_ID_ENV, mask(self.telegram_channel_id.as_deref())),
            (VK_API_TOKEN_ENV, mask(self.vk_api_token.as_deref())),
            (OPENAI_API_KEY_ENV, mask(self.openai_api_key.as_deref())),
        ]
    }

    pub fn log_masked(&self) {
        for (name, value) in self.masked() {
            tracing::info!(secret = name, value = %value, "Secret");
        }
    }
}

impl fmt::Debug for ChannelSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [bot, channel, vk, openai] = self.masked();
        f.debug_struct("ChannelSecrets")
            .field("telegram_bot_token", &bot.1)
            .field("telegram_channel_id", &channel.1)
            .field("vk_api_token", &vk.1)
            .field("openai_api_key", &openai.1)
            .finish()
    }
}

fn mask(value: Option<&str>) -> String {
    mask_secret(value, DEFAULT_VISIBLE_TAIL)
}

fn secret_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChannelSecrets {
        ChannelSecrets {
            telegram_bot_token: Some("123456:ABCDEFGHIJ".to_string()),
            telegram_channel_id: Some("@rewatch".to_string()),
            vk_api_token: None,
            openai_api_key: Some("sk-test-0123456789".to_string()),
        }
    }

    #[test]
    fn test_debug_output_is_masked() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("123456"));
        assert!(!debug.contains("sk-test"));
        assert!(debug.contains("<masked>...6789"));
        assert!(debug.contains("<masked>...GHIJ"));
        assert!(debug.contains("<empty>"));
    }

    #[test]
    fn test_masked_pairs_name_every_secret() {
        let names: Vec<_> = sample().masked().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                TELEGRAM_BOT_TOKEN_ENV,
                TELEGRAM_CHANNEL_ID_ENV,
                VK_API_TOKEN_ENV,
                OPENAI_API_KEY_ENV
            ]
        );
    }
}
