use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

// ===== OpenAI Client =====

/// Chat-completions client bound to one model
pub struct OpenAiClient
{   api_key: String
  , model: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Build a client with a bounded request timeout
    pub fn new(
      api_key: String
    , model: String
    , timeout_secs: u64
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenAiClient for model: {}", model);
        let http_client = reqwest::Client::builder()
          .timeout(std::time::Duration::from_secs(timeout_secs))
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        Ok(OpenAiClient
        {   api_key
          , model
          , http_client
        })
    }

    /// Issue one chat-completions request and return the
    /// first choice's text
    pub async fn chat_completion(
      &self
    , system_prompt: &str
    , user_prompt: &str
    , max_tokens: usize
    , temperature: f32
    ) -> Result<String, crate::error::Error>
    {   debug!("Requesting completion from: {}", self.model);

        let request = OpenAiChatRequest
        {   model: self.model.clone()
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: system_prompt.to_string()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: user_prompt.to_string()
              }
            ]
          , max_tokens: Some(max_tokens)
          , temperature: Some(temperature)
        };

        trace!("OpenAI request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", OPENAI_API_BASE))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("OpenAI error: {}", error_text)
            ));
        }

        let chat_response: OpenAiChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.choices.first()
          .map(|c| c.message.content.clone())
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }
}
