//! Garden records: a user-owned collection of plant references with care
//! metadata. Field names are snake_case on the wire.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A garden as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Garden {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plants: Vec<PlantRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_watered: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fertilized_schedule: FertilizationSchedule,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_images: Vec<String>,
}

impl Garden {
    /// Ids of every referenced plant, populated or not.
    pub fn plant_ids(&self) -> Vec<String> {
        self.plants.iter().map(|p| p.id().to_string()).collect()
    }
}

/// Create/update responses wrap the garden: `{"garden": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GardenEnvelope {
    pub garden: Garden,
}

/// A plant reference inside a garden.
///
/// The list endpoint returns bare ids; the detail endpoint populates them with
/// `{_id, generalInfo: {plantName}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlantRef {
    Id(String),
    Populated(PlantStub),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantStub {
    #[serde(rename = "_id", default)]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub general_info: StubInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StubInfo {
    #[serde(default)]
    #[serde(deserialize_with = "null_as_default")]
    pub plant_name: String,
}

impl PlantRef {
    pub fn id(&self) -> &str {
        match self {
            PlantRef::Id(id) => id,
            PlantRef::Populated(stub) => &stub.id,
        }
    }

    /// Display name when populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            PlantRef::Id(_) => None,
            PlantRef::Populated(stub) => Some(&stub.general_info.plant_name),
        }
    }

    pub fn populated(id: impl Into<String>, name: impl Into<String>) -> Self {
        PlantRef::Populated(PlantStub {
            id: id.into(),
            general_info: StubInfo {
                plant_name: name.into(),
            },
        })
    }
}

/// How often a garden gets fertilized.
///
/// Unknown strings from the backend are preserved in [`FertilizationSchedule::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FertilizationSchedule {
    #[default]
    Weekly,
    EveryTwoWeeks,
    EveryThreeWeeks,
    EveryFourWeeks,
    Monthly,
    Other(String),
}

impl FertilizationSchedule {
    /// The selectable schedules, in display order.
    pub const OPTIONS: [FertilizationSchedule; 5] = [
        FertilizationSchedule::Weekly,
        FertilizationSchedule::EveryTwoWeeks,
        FertilizationSchedule::EveryThreeWeeks,
        FertilizationSchedule::EveryFourWeeks,
        FertilizationSchedule::Monthly,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FertilizationSchedule::Weekly => "Weekly",
            FertilizationSchedule::EveryTwoWeeks => "Every 2 weeks",
            FertilizationSchedule::EveryThreeWeeks => "Every 3 weeks",
            FertilizationSchedule::EveryFourWeeks => "Every 4 weeks",
            FertilizationSchedule::Monthly => "Monthly",
            FertilizationSchedule::Other(s) => s,
        }
    }
}

impl From<String> for FertilizationSchedule {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Weekly" => FertilizationSchedule::Weekly,
            "Every 2 weeks" => FertilizationSchedule::EveryTwoWeeks,
            "Every 3 weeks" => FertilizationSchedule::EveryThreeWeeks,
            "Every 4 weeks" => FertilizationSchedule::EveryFourWeeks,
            "Monthly" => FertilizationSchedule::Monthly,
            _ => FertilizationSchedule::Other(value),
        }
    }
}

impl From<&str> for FertilizationSchedule {
    fn from(value: &str) -> Self {
        FertilizationSchedule::from(value.to_string())
    }
}

impl From<FertilizationSchedule> for String {
    fn from(value: FertilizationSchedule) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for FertilizationSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
