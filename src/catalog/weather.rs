//! # Weather Tags
//!
//! The closed set of weather conditions items can be themed around, and the
//! lenient tag type callers pass in from whatever weather source they use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weather condition from the fixed set known to the catalog.
///
/// # Examples
///
/// ```
/// use skypet::WeatherCondition;
///
/// assert_eq!(WeatherCondition::from_tag("Rainy"), Some(WeatherCondition::Rainy));
/// assert_eq!(WeatherCondition::from_tag("hail"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Clear,
    Rainy,
    Cloudy,
    Snowy,
    Thunderstorm,
    Windy,
    Night,
}

impl WeatherCondition {
    /// Every known condition, in declaration order.
    pub const ALL: [WeatherCondition; 8] = [
        WeatherCondition::Sunny,
        WeatherCondition::Clear,
        WeatherCondition::Rainy,
        WeatherCondition::Cloudy,
        WeatherCondition::Snowy,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Windy,
        WeatherCondition::Night,
    ];

    /// The lowercase tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Clear => "clear",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Windy => "windy",
            WeatherCondition::Night => "night",
        }
    }

    /// Looks up a condition by tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather as reported by the caller.
///
/// Unknown tags are kept rather than rejected: they never match an item's
/// affinity but still count as "weather is present" when weighting drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherTag {
    /// One of the known conditions
    Known(WeatherCondition),
    /// A tag outside the known set, normalised to lowercase
    Unrecognized(String),
}

impl WeatherTag {
    /// Parses a raw tag. Blank input means no weather was reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::{WeatherCondition, WeatherTag};
    ///
    /// assert_eq!(WeatherTag::parse(" SNOWY "), Some(WeatherTag::Known(WeatherCondition::Snowy)));
    /// assert_eq!(WeatherTag::parse("hail"), Some(WeatherTag::Unrecognized("hail".to_string())));
    /// assert_eq!(WeatherTag::parse("  "), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(match WeatherCondition::from_tag(trimmed) {
            Some(condition) => WeatherTag::Known(condition),
            None => WeatherTag::Unrecognized(trimmed.to_lowercase()),
        })
    }

    /// The known condition, if this tag names one.
    pub fn condition(&self) -> Option<WeatherCondition> {
        match self {
            WeatherTag::Known(condition) => Some(*condition),
            WeatherTag::Unrecognized(_) => None,
        }
    }
}

impl From<WeatherCondition> for WeatherTag {
    fn from(condition: WeatherCondition) -> Self {
        WeatherTag::Known(condition)
    }
}

impl fmt::Display for WeatherTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherTag::Known(condition) => f.write_str(condition.as_str()),
            WeatherTag::Unrecognized(tag) => f.write_str(tag),
        }
    }
}
