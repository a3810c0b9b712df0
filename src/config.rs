//! Configuration for the text-generation provider

use log::debug;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_PORT: u16 = 5000;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Provider configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ProviderConfig
{   /// API key; absence means fallback-only mode for the
    /// process lifetime
    pub api_key: Option<String>
  , /// Model identifier
    pub model: String
  , /// Request timeout in seconds
    pub timeout_secs: u64
}

impl ProviderConfig
{   /// Read provider settings from the environment
    pub fn from_env() -> Self
    {   debug!("Reading provider config from environment");
        let api_key = std::env::var("OPENAI_API_KEY")
          .ok()
          .filter(|key| !key.is_empty());
        let model = std::env::var("OPENAI_MODEL")
          .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        ProviderConfig
        {   api_key
          , model
          , timeout_secs: REQUEST_TIMEOUT_SECS
        }
    }
}

/// Port the server binds to, overridable via PORT
pub fn server_port() -> u16
{   std::env::var("PORT")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(DEFAULT_PORT)
}
