//! Template-based fallback text generator
//!
//! Used when no provider is configured or the provider call
//! failed. Picks a canned reply by prompt keyword and shapes
//! it by difficulty band.

use log::debug;
use rand::seq::IndexedRandom;

// ===== Category Tables =====

const FUNNY_KEYWORDS: [&str; 4]
  = ["funny", "joke", "laugh", "humor"];
const WEATHER_KEYWORDS: [&str; 5]
  = ["weather", "rain", "sunny", "cold", "hot"];
const FOOD_KEYWORDS: [&str; 5]
  = ["food", "eat", "restaurant", "meal", "cooking"];

const FUNNY_RESPONSES: [&str; 5] = [
  "Haha, that's pretty hilarious! Made me chuckle."
, "Oh wow, that's actually really funny. Good one!"
, "That got a genuine laugh out of me, thanks for sharing."
, "LOL that's amazing. Where did you hear that?"
, "That's comedy gold right there. Love it!"
];

const WEATHER_RESPONSES: [&str; 5] = [
  "It's been pretty nice lately, actually enjoying it."
, "Can't complain about the weather today, perfect for being outside."
, "Weather's been decent, though I wish it was a bit warmer."
, "Pretty typical for this time of year, nothing too crazy."
, "Love this kind of weather - not too hot, not too cold."
];

const FOOD_RESPONSES: [&str; 5] = [
  "I'm always down for some good food, what's your favorite?"
, "Food is definitely one of life's great pleasures."
, "Can't go wrong with a good meal, especially with friends."
, "I love trying new restaurants and cuisines."
, "Good food just makes everything better, doesn't it?"
];

const DEFAULT_RESPONSES: [&str; 5] = [
  "That's an interesting point, I hadn't thought of it that way."
, "Yeah, I can definitely see what you mean there."
, "That makes a lot of sense when you put it like that."
, "Interesting perspective, thanks for sharing that with me."
, "I appreciate you bringing that up, good point."
];

// ===== Categorization =====

/// Keyword-driven bucket a prompt falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory
{   Funny
  , Weather
  , Food
  , Default
}

impl ResponseCategory
{   /// Candidate replies for this category
    pub fn candidates(self) -> &'static [&'static str]
    {   match self
        {   ResponseCategory::Funny => &FUNNY_RESPONSES
          , ResponseCategory::Weather => &WEATHER_RESPONSES
          , ResponseCategory::Food => &FOOD_RESPONSES
          , ResponseCategory::Default => &DEFAULT_RESPONSES
        }
    }
}

/// Categorize a prompt by case-insensitive keyword match,
/// first matching category wins
pub fn categorize(prompt: &str) -> ResponseCategory
{   let prompt_lower = prompt.to_lowercase();

    if FUNNY_KEYWORDS.iter()
      .any(|word| prompt_lower.contains(word))
    {   return ResponseCategory::Funny;
    }

    if WEATHER_KEYWORDS.iter()
      .any(|word| prompt_lower.contains(word))
    {   return ResponseCategory::Weather;
    }

    if FOOD_KEYWORDS.iter()
      .any(|word| prompt_lower.contains(word))
    {   return ResponseCategory::Food;
    }

    ResponseCategory::Default
}

// ===== Difficulty Shaping =====

/// Apply the difficulty band transformation to a reply
///
/// Bands are mutually exclusive: at 2 and below the reply is
/// decontracted, lowercased, and prefixed; at 3 it gets a
/// hedging prefix; everything else passes through unchanged.
pub fn apply_difficulty(
  text: &str
, difficulty: i64
) -> String
{   if difficulty <= 2
    {   let text = text
          .replace("I'm", "I am")
          .replace("can't", "cannot")
          .replace("don't", "do not");
        format!(
          "As an AI, I would say that {}",
          text.to_lowercase()
        )
    } else if difficulty == 3
    {   format!("I think {}", text)
    } else
    {   text.to_string()
    }
}

/// Generate a fallback reply for a prompt
pub fn pseudo_reply(
  prompt: &str
, difficulty: i64
) -> String
{   let category = categorize(prompt);
    debug!("Fallback category: {:?}", category);

    let candidates = category.candidates();
    let candidate = candidates
      .choose(&mut rand::rng())
      .copied()
      .unwrap_or(candidates[0]);

    apply_difficulty(candidate, difficulty)
}
