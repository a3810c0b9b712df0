//! Wire types for the arcade API

use serde::{Deserialize, Serialize};

/// Successful generation reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReply
{   /// Generated text, never empty
    pub text: String
}

/// Error reply for the 400 and 500 paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply
{   /// Fixed error message
    pub error: String
}

/// Liveness reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReply
{   pub status: String
  , /// Configured model identifier
    pub model: String
}
