//! Records mirrored from backend responses.

use serde::{Deserialize, Deserializer};

mod blog;
mod garden;
mod plant;
mod review;
mod trefle;
mod user;

pub use blog::{BlogPost, Comment};
pub use garden::{FertilizationSchedule, Garden, GardenEnvelope, PlantRef, PlantStub, StubInfo};
pub(crate) use plant::format_number;
pub use plant::{
    DetailedInfo, GeneralInfo, Height, Plant, PlantingTimes, QuickInfo, TimeSpan,
};
pub use review::{Review, ReviewEnvelope, ReviewList};
pub use trefle::{HeightRange, TreflePlant};
pub use user::{
    Author, LoginData, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserProfile,
};

/// Decode an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers absent keys; the backend also sends `null`
/// for unset fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
