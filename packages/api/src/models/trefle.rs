use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An entry from the external plant catalog proxied at `/api/trefle/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TreflePlant {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub common_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scientific_name: String,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub light_requirements: Option<String>,
    pub water_requirements: Option<String>,
    pub soil_type: Option<String>,
    pub growth_habit: Option<String>,
    pub height: Option<HeightRange>,
    pub bloom_time: Option<String>,
}

impl TreflePlant {
    /// Common name, falling back to the scientific name.
    pub fn display_name(&self) -> &str {
        self.common_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.scientific_name)
    }
}

/// Height range in centimetres.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeightRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_from_catalog() {
        let plant: TreflePlant = serde_json::from_str(
            r#"{"id": 42, "common_name": null, "scientific_name": "Quercus rotundifolia",
                "family": "Fagaceae", "image_url": null, "height": {"min": null, "max": 1200}}"#,
        )
        .unwrap();
        assert_eq!(plant.display_name(), "Quercus rotundifolia");
        assert_eq!(plant.family.as_deref(), Some("Fagaceae"));
        assert_eq!(plant.height.unwrap().max, Some(1200.0));
    }
}
