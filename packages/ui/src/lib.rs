//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::make_session_store;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod auth;
pub use auth::{
    sign_in, sign_out, use_api, use_auth, use_session_api, AuthProvider, AuthState, LogoutButton,
};

pub mod dialogs;

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

mod plant_form;
pub use plant_form::{read_all_uploads, read_first_upload, PlantFormWizard};

mod calendar;
pub use calendar::{MonthHeader, MonthStrip, ScheduleLegend, ScheduleModal};
