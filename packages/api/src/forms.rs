//! # Form assembly for multipart and JSON submissions
//!
//! Pages keep their in-progress input in the form structs defined here and hand
//! them to [`crate::ApiClient`] on submit.
//!
//! | Form | Endpoint | Encoding |
//! |------|----------|----------|
//! | [`PlantForm`] | `POST /api/plants` | multipart, nested sections flattened to `section[field]` / `section[field][nested]` keys, `icon`/`img` file parts |
//! | [`GardenForm`] | `POST /api/garden` | multipart, repeated `plants` ids and `growth_images` file parts |
//! | [`GardenUpdate`] | `PUT /api/garden/:id` | JSON |
//! | [`BlogForm`] | `POST /api/blogs`, `PUT /api/blogs/:id` | multipart, image part named `image` on create and `imageUrl` on update |
//!
//! The plant form is filled in over several steps ([`PlantFormStep`]); each step
//! validates its own required fields before the wizard moves on.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{
    format_number, DetailedInfo, FertilizationSchedule, Garden, GeneralInfo, PlantingTimes, QuickInfo,
};

pub const SLIDE_BAR_OPTIONS: [&str; 13] = [
    "16/square", "9/square", "8/square", "4/square", "2/square", "1/square", "2square", "4square",
    "3*3", "4*4", "5*5", "8*8", "10*10",
];

pub const CATEGORIES: [&str; 7] = [
    "Alliums",
    "Cole crops",
    "Flowers",
    "Fruit",
    "Greens",
    "Herbs",
    "Root",
];

pub const SUN_REQUIREMENTS: [&str; 5] = [
    "Full sun",
    "Part sun to full sun",
    "Part sun",
    "Shade to part sun",
    "Shade",
];

pub const GROWING_SEASONS: [&str; 3] = ["Cool", "Warm", "Perennial"];

pub const FROST_TOLERANCES: [&str; 3] = ["Not", "Semi", "Tolerant"];

pub const TIME_UNITS: [&str; 4] = ["days", "weeks", "months", "years"];

pub const HEIGHT_UNITS: [&str; 2] = ["in", "ft"];

/// A file picked in the browser, read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Text fields and file parts of a multipart body, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartFields {
    pub text: Vec<(String, String)>,
    pub files: Vec<(String, Upload)>,
}

impl MultipartFields {
    pub fn push_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.text.push((key.into(), value.into()));
    }

    pub fn push_file(&mut self, key: impl Into<String>, upload: Upload) {
        self.files.push((key.into(), upload));
    }

    /// First text value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every text value stored under `key`.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.text
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn into_form(self) -> reqwest::multipart::Form {
        use reqwest::multipart::{Form, Part};

        let mut form = Form::new();
        for (key, value) in self.text {
            form = form.text(key, value);
        }
        for (key, upload) in self.files {
            form = form.part(key, Part::bytes(upload.bytes).file_name(upload.file_name));
        }
        form
    }

    /// Flatten a serialized section into `prefix[key]` / `prefix[key][nested]` fields.
    fn push_section(&mut self, prefix: &str, section: &impl Serialize, skip: &[&str]) {
        if let Ok(Value::Object(map)) = serde_json::to_value(section) {
            for (key, value) in map {
                if skip.contains(&key.as_str()) {
                    continue;
                }
                self.push_value(format!("{prefix}[{key}]"), &value);
            }
        }
    }

    fn push_value(&mut self, key: String, value: &Value) {
        match value {
            Value::Object(map) => {
                for (nested, inner) in map {
                    self.push_value(format!("{key}[{nested}]"), inner);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.push_value(key.clone(), item);
                }
            }
            Value::String(s) => self.push_text(key, s.clone()),
            Value::Number(n) => {
                let text = n.as_f64().map(format_number).unwrap_or_else(|| n.to_string());
                self.push_text(key, text);
            }
            Value::Bool(b) => self.push_text(key, b.to_string()),
            Value::Null => {}
        }
    }
}

/// Steps of the plant-creation workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantFormStep {
    General,
    QuickInfo,
    PlantingTimes,
    Details,
}

impl PlantFormStep {
    pub const ALL: [PlantFormStep; 4] = [
        PlantFormStep::General,
        PlantFormStep::QuickInfo,
        PlantFormStep::PlantingTimes,
        PlantFormStep::Details,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PlantFormStep::General => "General Info",
            PlantFormStep::QuickInfo => "Quick Info",
            PlantFormStep::PlantingTimes => "Planting Times",
            PlantFormStep::Details => "Detailed Info",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// In-progress plant record for the admin/catalog creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlantForm {
    pub general_info: GeneralInfo,
    pub quick_info: QuickInfo,
    pub planting_times: PlantingTimes,
    pub detailed_info: DetailedInfo,
    pub icon: Option<Upload>,
    pub img: Option<Upload>,
}

impl PlantForm {
    /// Check the required fields of one step.
    pub fn validate_step(&self, step: PlantFormStep) -> Result<(), ApiError> {
        match step {
            PlantFormStep::General => {
                if self.general_info.plant_name.trim().is_empty() {
                    return Err(ApiError::Validation("Plant name is required".into()));
                }
                if self.general_info.category.is_empty() {
                    return Err(ApiError::Validation("Please select a category".into()));
                }
            }
            PlantFormStep::QuickInfo => {
                if self.quick_info.sun_requirement.is_empty() {
                    return Err(ApiError::Validation(
                        "Please select a sun requirement".into(),
                    ));
                }
            }
            PlantFormStep::PlantingTimes | PlantFormStep::Details => {}
        }
        Ok(())
    }

    /// Check every step, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ApiError> {
        PlantFormStep::ALL
            .into_iter()
            .try_for_each(|step| self.validate_step(step))
    }

    /// Multipart body for `POST /api/plants`.
    pub fn fields(&self) -> MultipartFields {
        let mut fields = MultipartFields::default();
        fields.push_section("generalInfo", &self.general_info, &["icon", "img"]);
        fields.push_section("quickInfo", &self.quick_info, &[]);
        fields.push_section("plantingTimes", &self.planting_times, &[]);
        fields.push_section("detailedInfo", &self.detailed_info, &[]);
        if let Some(icon) = &self.icon {
            fields.push_file("icon", icon.clone());
        }
        if let Some(img) = &self.img {
            fields.push_file("img", img.clone());
        }
        fields
    }
}

/// In-progress garden for the "New Garden" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenForm {
    pub name: String,
    pub plants: Vec<String>,
    pub last_watered: String,
    pub fertilized_schedule: FertilizationSchedule,
    pub growth_notes: String,
    pub growth_images: Vec<Upload>,
}

impl GardenForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() || self.last_watered.trim().is_empty() {
            return Err(ApiError::Validation(
                "Garden Name and Last Watered Date are required!".into(),
            ));
        }
        Ok(())
    }

    /// Multipart body for `POST /api/garden`.
    pub fn fields(&self) -> MultipartFields {
        let mut fields = MultipartFields::default();
        fields.push_text("name", self.name.trim());
        fields.push_text("last_watered", self.last_watered.as_str());
        fields.push_text("fertilized_schedule", self.fertilized_schedule.as_str());
        fields.push_text("growth_notes", self.growth_notes.as_str());
        for plant_id in &self.plants {
            fields.push_text("plants", plant_id.as_str());
        }
        for image in &self.growth_images {
            fields.push_file("growth_images", image.clone());
        }
        fields
    }
}

/// JSON body for `PUT /api/garden/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GardenUpdate {
    pub name: String,
    pub plants: Vec<String>,
    pub last_watered: String,
    pub fertilized_schedule: FertilizationSchedule,
    pub growth_notes: String,
}

impl From<&Garden> for GardenUpdate {
    fn from(garden: &Garden) -> Self {
        Self {
            name: garden.name.clone(),
            plants: garden.plant_ids(),
            last_watered: garden.last_watered.clone(),
            fertilized_schedule: garden.fertilized_schedule.clone(),
            growth_notes: garden.growth_notes.clone(),
        }
    }
}

/// Blog post being written or edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogForm {
    pub title: String,
    pub summary: String,
    pub image: Option<Upload>,
}

impl BlogForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() || self.summary.trim().is_empty() {
            return Err(ApiError::Validation("Title and summary are required".into()));
        }
        Ok(())
    }

    /// Multipart body for `POST /api/blogs`.
    pub fn create_fields(&self) -> MultipartFields {
        self.fields_with_image_key("image")
    }

    /// Multipart body for `PUT /api/blogs/:id`.
    pub fn update_fields(&self) -> MultipartFields {
        self.fields_with_image_key("imageUrl")
    }

    fn fields_with_image_key(&self, image_key: &str) -> MultipartFields {
        let mut fields = MultipartFields::default();
        fields.push_text("title", self.title.as_str());
        fields.push_text("summary", self.summary.as_str());
        if let Some(image) = &self.image {
            fields.push_file(image_key, image.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantRef;

    fn filled_plant_form() -> PlantForm {
        let mut form = PlantForm::default();
        form.general_info.plant_name = "Tomato".into();
        form.general_info.category = "Fruit".into();
        form.general_info.img = "ignored".into();
        form.quick_info.sun_requirement = "Full sun".into();
        form.quick_info.germination_time.duration = 7.0;
        form.quick_info.max_height.height = 4.5;
        form.quick_info.max_height.unit = "ft".into();
        form.quick_info.soil_ph = "6.5".into();
        form.planting_times.spring_transplant = "2024-04-20".into();
        form.detailed_info.herbal = "None".into();
        form
    }

    #[test]
    fn test_plant_fields_are_flattened() {
        let fields = filled_plant_form().fields();

        assert_eq!(fields.get("generalInfo[plantName]"), Some("Tomato"));
        assert_eq!(fields.get("generalInfo[category]"), Some("Fruit"));
        assert_eq!(fields.get("quickInfo[slideBarOption]"), Some("16/square"));
        assert_eq!(fields.get("quickInfo[germinationTime][duration]"), Some("7"));
        assert_eq!(fields.get("quickInfo[germinationTime][unit]"), Some("days"));
        assert_eq!(fields.get("quickInfo[maxHeight][height]"), Some("4.5"));
        assert_eq!(fields.get("quickInfo[maxHeight][unit]"), Some("ft"));
        assert_eq!(fields.get("quickInfo[maturityTime][duration]"), Some("0"));
        assert_eq!(fields.get("quickInfo[soilPH]"), Some("6.5"));
        assert_eq!(fields.get("plantingTimes[springTransplant]"), Some("2024-04-20"));
        assert_eq!(fields.get("plantingTimes[fallSowOutdoors]"), Some(""));
        assert_eq!(fields.get("detailedInfo[herbal]"), Some("None"));
    }

    #[test]
    fn test_plant_image_urls_are_not_sent_as_text() {
        let fields = filled_plant_form().fields();
        assert!(fields.get("generalInfo[img]").is_none());
        assert!(fields.get("generalInfo[icon]").is_none());
        assert!(fields.files.is_empty());
    }

    #[test]
    fn test_plant_field_count() {
        // 4 general + 13 quick (3 of them nested pairs) + 6 times + 7 details
        let fields = filled_plant_form().fields();
        assert_eq!(fields.text.len(), 4 + 16 + 6 + 7);
    }

    #[test]
    fn test_plant_uploads_become_file_parts() {
        let mut form = filled_plant_form();
        form.icon = Some(Upload::new("icon.png", vec![1, 2]));
        form.img = Some(Upload::new("tomato.jpg", vec![3]));

        let fields = form.fields();
        let names: Vec<&str> = fields.files.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["icon", "img"]);
        assert_eq!(fields.files[1].1.file_name, "tomato.jpg");
    }

    #[test]
    fn test_plant_step_validation() {
        let mut form = PlantForm::default();
        assert!(matches!(
            form.validate_step(PlantFormStep::General),
            Err(ApiError::Validation(msg)) if msg == "Plant name is required"
        ));

        form.general_info.plant_name = "Kale".into();
        assert!(form.validate_step(PlantFormStep::General).is_err());

        form.general_info.category = "Greens".into();
        assert!(form.validate_step(PlantFormStep::General).is_ok());
        assert!(form.validate_step(PlantFormStep::QuickInfo).is_err());
        assert!(form.validate_step(PlantFormStep::PlantingTimes).is_ok());
        assert!(form.validate().is_err());

        form.quick_info.sun_requirement = "Part sun".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_plant_steps_navigate_in_order() {
        let step = PlantFormStep::General;
        assert_eq!(step.previous(), None);
        assert_eq!(step.next(), Some(PlantFormStep::QuickInfo));
        assert_eq!(
            PlantFormStep::PlantingTimes.previous(),
            Some(PlantFormStep::QuickInfo)
        );
        assert_eq!(PlantFormStep::Details.next(), None);
        assert!(PlantFormStep::Details.is_last());
        assert_eq!(PlantFormStep::Details.index(), 3);
    }

    #[test]
    fn test_garden_validation_message() {
        let mut form = GardenForm {
            name: "Herbs".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Garden Name and Last Watered Date are required!");

        form.last_watered = "2024-05-01".into();
        assert!(form.validate().is_ok());

        form.name = "   ".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_garden_fields_repeat_plants_and_images() {
        let form = GardenForm {
            name: " Backyard ".into(),
            plants: vec!["p1".into(), "p2".into()],
            last_watered: "2024-05-01".into(),
            fertilized_schedule: FertilizationSchedule::Monthly,
            growth_notes: "Mulched".into(),
            growth_images: vec![Upload::new("a.jpg", vec![0]), Upload::new("b.jpg", vec![1])],
        };
        let fields = form.fields();

        assert_eq!(fields.get("name"), Some("Backyard"));
        assert_eq!(fields.get("fertilized_schedule"), Some("Monthly"));
        assert_eq!(fields.get_all("plants"), vec!["p1", "p2"]);
        assert_eq!(fields.files.len(), 2);
        assert!(fields.files.iter().all(|(k, _)| k == "growth_images"));
    }

    #[test]
    fn test_garden_update_reduces_plants_to_ids() {
        let garden = Garden {
            id: "g1".into(),
            name: "Patio".into(),
            plants: vec![PlantRef::populated("p1", "Basil"), PlantRef::Id("p2".into())],
            fertilized_schedule: FertilizationSchedule::EveryThreeWeeks,
            ..Default::default()
        };
        let body = serde_json::to_value(GardenUpdate::from(&garden)).unwrap();

        assert_eq!(body["plants"], serde_json::json!(["p1", "p2"]));
        assert_eq!(body["fertilized_schedule"], "Every 3 weeks");
        assert!(body.get("_id").is_none());
    }

    #[test]
    fn test_blog_image_key_differs_between_create_and_update() {
        let form = BlogForm {
            title: "Compost".into(),
            summary: "Start a pile".into(),
            image: Some(Upload::new("pile.jpg", vec![9])),
        };
        assert_eq!(form.create_fields().files[0].0, "image");
        assert_eq!(form.update_fields().files[0].0, "imageUrl");
        assert_eq!(form.update_fields().get("title"), Some("Compost"));

        let no_image = BlogForm {
            image: None,
            ..form
        };
        assert!(no_image.update_fields().files.is_empty());
    }

    #[test]
    fn test_blog_validation() {
        assert!(BlogForm::default().validate().is_err());
        let form = BlogForm {
            title: "t".into(),
            summary: "s".into(),
            image: None,
        };
        assert!(form.validate().is_ok());
    }
}
