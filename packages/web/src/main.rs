use api::ApiClient;
use dioxus::prelude::*;
use store::GreenGuideConfig;

use ui::AuthProvider;
use views::{
    About, AdminDashboard, Blog, Calendar, EditBlog, GardenDetail, Gardens, Home, Login,
    NotFound, PlantDetail, Plants, Register, SiteLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/admin")]
    AdminDashboard {},
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/plant")]
        Plants {},
        #[route("/plants/:id")]
        PlantDetail { id: String },
        #[route("/gardens")]
        Gardens {},
        #[route("/garden/:id")]
        GardenDetail { id: String },
        #[route("/blog")]
        Blog {},
        #[route("/blog/:id/edit")]
        EditBlog { id: String },
        #[route("/calendar")]
        Calendar {},
        #[route("/about")]
        About {},
        #[route("/signin")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled backend settings; see `greenguide.toml`.
const CONFIG_TOML: &str = include_str!("../greenguide.toml");

fn load_config() -> GreenGuideConfig {
    let config = GreenGuideConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}", GreenGuideConfig::filename());
        GreenGuideConfig::default()
    });
    config.with_base_url_override(option_env!("GREEN_GUIDE_API_URL"))
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        let config = load_config();
        tracing::info!(backend = %config.api.base_url, "starting Green Guide");
        ApiClient::new(&config).map_err(|e| e.to_string())
    });

    let body = match client {
        Ok(client) => rsx! {
            AuthProvider { client,
                Router::<Route> {}
            }
        },
        Err(message) => rsx! {
            div { class: "page",
                div { class: "error-banner", "Invalid backend configuration: {message}" }
            }
        },
    };

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        {body}
    }
}
