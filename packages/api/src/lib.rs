//! # API crate: typed access to the Green Guide backend
//!
//! Everything the front end needs to talk to the REST backend, with no UI code.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer token handling, error mapping |
//! | [`models`] | Serde records mirroring backend JSON (plants, gardens, blog posts, reviews, auth payloads) |
//! | [`forms`] | In-progress form state, validation and multipart/JSON body assembly |
//! | [`schedule`] | Month bucketing of planting dates for the calendar |
//! | [`dates`] | Parsing and display of stored date strings |
//! | [`error`] | [`ApiError`] |

pub mod client;
pub mod dates;
pub mod error;
pub mod forms;
pub mod models;
pub mod schedule;

pub use client::ApiClient;
pub use error::ApiError;
pub use forms::{BlogForm, GardenForm, GardenUpdate, PlantForm, PlantFormStep, Upload};
pub use models::*;
pub use schedule::{PlantSchedule, PlantingEvent, ScheduleKind, MONTHS};

pub use store::GreenGuideConfig;
