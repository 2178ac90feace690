//! # Mood
//!
//! How the pet feels given the weather and the hour.

use crate::{SkypetError, SkypetResult, WeatherCondition, WeatherTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Maps a 24-hour clock hour to a period.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_hour(7).unwrap(), TimeOfDay::Morning);
    /// assert_eq!(TimeOfDay::from_hour(23).unwrap(), TimeOfDay::Night);
    /// assert!(TimeOfDay::from_hour(24).is_err());
    /// ```
    pub fn from_hour(hour: u8) -> SkypetResult<Self> {
        match hour {
            5..=11 => Ok(TimeOfDay::Morning),
            12..=16 => Ok(TimeOfDay::Afternoon),
            17..=20 => Ok(TimeOfDay::Evening),
            0..=4 | 21..=23 => Ok(TimeOfDay::Night),
            _ => Err(SkypetError::InvalidInput(format!(
                "hour {hour} is outside 0-23"
            ))),
        }
    }
}

/// The pet's mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Gloomy,
    Scared,
    Excited,
    Sleepy,
}

impl Mood {
    /// Derives the mood from the reported weather and the time of day.
    ///
    /// Bright weather cheers the pet up unless it is night, when it only
    /// wants to sleep. Unknown or missing weather leaves it calm.
    pub fn from_conditions(weather: Option<&WeatherTag>, time: TimeOfDay) -> Self {
        let night = time == TimeOfDay::Night;

        match weather.and_then(WeatherTag::condition) {
            Some(WeatherCondition::Sunny | WeatherCondition::Clear) if night => Mood::Sleepy,
            Some(WeatherCondition::Sunny | WeatherCondition::Clear) => Mood::Happy,
            Some(WeatherCondition::Rainy) => Mood::Gloomy,
            Some(WeatherCondition::Thunderstorm) => Mood::Scared,
            Some(WeatherCondition::Snowy) => Mood::Excited,
            Some(WeatherCondition::Night) => Mood::Sleepy,
            Some(WeatherCondition::Cloudy | WeatherCondition::Windy) => Mood::Calm,
            None if night => Mood::Sleepy,
            None => Mood::Calm,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Gloomy => "gloomy",
            Mood::Scared => "scared",
            Mood::Excited => "excited",
            Mood::Sleepy => "sleepy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
