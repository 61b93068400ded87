//! # Plant catalog record
//!
//! A plant is stored by the backend as four nested sections, serialized in
//! camelCase:
//!
//! | Section | Content |
//! |---------|---------|
//! | [`GeneralInfo`] | name, taxonomic name, description, category, icon and image URLs |
//! | [`QuickInfo`] | spacing, depth, water, sun, season, frost tolerance, durations, soil pH, frost dates |
//! | [`PlantingTimes`] | six calendar dates: spring/fall × start indoors/transplant/sow outdoors |
//! | [`DetailedInfo`] | free-text care sections |
//!
//! Every field defaults when absent so a partially populated response (the
//! list endpoint used by gardens only returns `generalInfo.plantName`) still
//! renders. Durations are posted from text inputs, so [`TimeSpan`] and
//! [`Height`] accept either JSON numbers or numeric strings.

use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// Full plant record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(rename = "_id", default)]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub general_info: GeneralInfo,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub quick_info: QuickInfo,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub planting_times: PlantingTimes,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub detailed_info: DetailedInfo,
}

impl Plant {
    pub fn name(&self) -> &str {
        &self.general_info.plant_name
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub plant_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub taxonomic_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub slide_bar_option: String,
    #[serde(deserialize_with = "null_as_default")]
    pub planting_depth: String,
    #[serde(deserialize_with = "null_as_default")]
    pub water_per_week: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sun_requirement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub growing_season: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frost_tolerance: String,
    #[serde(deserialize_with = "null_as_default")]
    pub germination_time: TimeSpan,
    #[serde(deserialize_with = "null_as_default")]
    pub max_height: Height,
    #[serde(deserialize_with = "null_as_default")]
    pub maturity_time: TimeSpan,
    #[serde(rename = "soilPH")]
    #[serde(deserialize_with = "null_as_default")]
    pub soil_ph: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transplanting_notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spring_frost: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fall_frost: String,
}

impl Default for QuickInfo {
    fn default() -> Self {
        Self {
            slide_bar_option: "16/square".to_string(),
            planting_depth: String::new(),
            water_per_week: String::new(),
            sun_requirement: String::new(),
            growing_season: String::new(),
            frost_tolerance: String::new(),
            germination_time: TimeSpan::default(),
            max_height: Height::default(),
            maturity_time: TimeSpan::default(),
            soil_ph: String::new(),
            transplanting_notes: String::new(),
            spring_frost: String::new(),
            fall_frost: String::new(),
        }
    }
}

/// A duration with its unit, e.g. `14 days`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeSpan {
    #[serde(deserialize_with = "lenient_number")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self {
            duration: 0.0,
            unit: "days".to_string(),
        }
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_number(self.duration), self.unit)
    }
}

/// A height with its unit, e.g. `24 in`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Height {
    #[serde(deserialize_with = "lenient_number")]
    pub height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
}

impl Default for Height {
    fn default() -> Self {
        Self {
            height: 0.0,
            unit: "in".to_string(),
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_number(self.height), self.unit)
    }
}

/// The six stored planting dates. Values are date strings as the backend
/// returns them (`YYYY-MM-DD` or an ISO timestamp), empty when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantingTimes {
    #[serde(deserialize_with = "null_as_default")]
    pub spring_start_indoors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spring_transplant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spring_sow_outdoors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fall_start_indoors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fall_transplant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fall_sow_outdoors: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub growing_from_seed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub planting_considerations: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feeding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub harvesting: String,
    #[serde(deserialize_with = "null_as_default")]
    pub storage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pruning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub herbal: String,
}

/// Render whole numbers without a trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
        Null(()),
    }

    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(s) => s.trim().parse().unwrap_or(0.0),
        NumberOrText::Null(()) => 0.0,
    })
}
