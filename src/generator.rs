//! Response generator with provider fallback

use log::{debug, error, info, warn};

/// Substituted when the provider returns empty or
/// whitespace-only text
pub const PLACEHOLDER_REPLY: &str
  = "I understand what you're asking about.";

const BASE_SYSTEM_PROMPT: &str
  = "You are a helpful assistant. Respond naturally and conversationally.";
const CASUAL_CLAUSE: &str
  = " Try to sound more human-like by using casual language, avoiding overly formal responses, and varying your sentence structure.";
const SLANG_CLAUSE: &str
  = " Use mild slang occasionally and don't always be perfectly grammatical.";

const MAX_REPLY_TOKENS: usize = 50;

/// Text generator for the detect-the-AI game mode
///
/// Holds the provider client when one was configured at
/// startup; otherwise every call takes the fallback pathway.
pub struct ResponseGenerator
{   provider: Option<crate::providers::openai::OpenAiClient>
}

impl ResponseGenerator
{   /// Build from provider config
    /// A missing key or failed client construction means
    /// fallback-only mode for the process lifetime
    pub fn new(config: &crate::config::ProviderConfig) -> Self
    {   let provider = match &config.api_key
        {   Some(key) => {
              match crate::providers::openai::OpenAiClient::new(
                key.clone()
              , config.model.clone()
              , config.timeout_secs
              )
              {   Ok(client) => {
                    info!("OpenAI client initialized successfully");
                    Some(client)
                  }
                , Err(e) => {
                    error!(
                      "Failed to initialize OpenAI client: {}",
                      e
                    );
                    None
                  }
              }
            }
          , None => {
              warn!(
                "OPENAI_API_KEY not set, fallback generator only"
              );
              None
            }
        };

        ResponseGenerator
        {   provider
        }
    }

    /// Compose the system instruction for a difficulty level
    pub fn system_prompt(difficulty: i64) -> String
    {   let mut prompt = BASE_SYSTEM_PROMPT.to_string();
        if difficulty > 3
        {   prompt.push_str(CASUAL_CLAUSE);
        }
        if difficulty > 4
        {   prompt.push_str(SLANG_CLAUSE);
        }
        prompt
    }

    /// Generate a reply for a prompt at a difficulty level
    /// Never fails outward: provider errors degrade to the
    /// fallback pathway
    pub async fn generate(
      &self
    , prompt: &str
    , difficulty: i64
    ) -> String
    {   if let Some(client) = &self.provider
        {   let system_prompt = Self::system_prompt(difficulty);
            let temperature = 0.7 + 0.1 * difficulty as f32;

            match client.chat_completion(
              &system_prompt
            , prompt
            , MAX_REPLY_TOKENS
            , temperature
            ).await
            {   Ok(text) => {
                  debug!("Provider reply received");
                  return normalize_reply(&text);
                }
              , Err(e) => {
                  error!("OpenAI API error: {}", e);
                }
            }
        }

        crate::fallback::pseudo_reply(prompt, difficulty)
    }
}

/// Trim a completion, substituting the placeholder for
/// empty output
pub fn normalize_reply(text: &str) -> String
{   let trimmed = text.trim();
    if trimmed.is_empty()
    {   PLACEHOLDER_REPLY.to_string()
    } else
    {   trimmed.to_string()
    }
}
