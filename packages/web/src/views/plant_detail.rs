use api::dates::format_long;
use api::schedule::PlantingEvent;
use api::Plant;
use dioxus::prelude::*;
use ui::components::ErrorBanner;
use ui::{use_api, use_session_api, MonthHeader, MonthStrip};

use crate::Route;

#[component]
pub fn PlantDetail(id: String) -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let plant = use_resource(use_reactive!(|(id,)| {
        let api = session_api();
        async move { api.get_plant(&id).await.map_err(|e| e.to_string()) }
    }));

    let content = match &*plant.read_unchecked() {
        None => rsx! { p { class: "muted", "Loading plant..." } },
        Some(Err(message)) => rsx! { ErrorBanner { message: message.clone() } },
        Some(Ok(plant)) => rsx! { PlantView { plant: plant.clone(), image_url: api.asset_url(&plant.general_info.img) } },
    };

    rsx! {
        div { class: "page",
            Link { to: Route::Plants {}, "← Back to plants" }
            {content}
        }
    }
}

#[component]
fn PlantView(plant: Plant, image_url: String) -> Element {
    let general = &plant.general_info;
    let quick = &plant.quick_info;
    let details = &plant.detailed_info;
    let schedule = api::PlantSchedule::for_plant(&plant);

    rsx! {
        div { class: "detail-hero",
            if !image_url.is_empty() {
                img { src: "{image_url}", alt: "{general.plant_name}" }
            }
            div {
                h1 { class: "page-title", "{general.plant_name}" }
                if !general.taxonomic_name.is_empty() {
                    p { class: "muted", em { "{general.taxonomic_name}" } }
                }
                if !general.category.is_empty() {
                    p { strong { "Category: " } "{general.category}" }
                }
                p { "{general.description}" }
            }
        }

        section { class: "detail-section",
            h2 { "Quick Info" }
            dl {
                dt { "Spacing" } dd { "{quick.slide_bar_option}" }
                dt { "Planting Depth" } dd { "{quick.planting_depth}" }
                dt { "Water per Week" } dd { "{quick.water_per_week}" }
                dt { "Sun" } dd { "{quick.sun_requirement}" }
                dt { "Growing Season" } dd { "{quick.growing_season}" }
                dt { "Frost Tolerance" } dd { "{quick.frost_tolerance}" }
                dt { "Germination" } dd { "{quick.germination_time}" }
                dt { "Max Height" } dd { "{quick.max_height}" }
                dt { "Maturity" } dd { "{quick.maturity_time}" }
                dt { "Soil pH" } dd { "{quick.soil_ph}" }
                dt { "Transplanting" } dd { "{quick.transplanting_notes}" }
                dt { "Last Spring Frost" } dd { "{format_long(&quick.spring_frost)}" }
                dt { "First Fall Frost" } dd { "{format_long(&quick.fall_frost)}" }
            }
        }

        section { class: "detail-section",
            h2 { "Planting Times" }
            dl {
                for event in PlantingEvent::ALL {
                    dt { key: "{event.slug()}", "{event.label()}" }
                    dd { "{format_long(event.date(&plant.planting_times))}" }
                }
            }
            if !schedule.is_empty() {
                MonthHeader {}
                MonthStrip { schedule }
            }
        }

        section { class: "detail-section",
            h2 { "Detailed Info" }
            DetailBlock { title: "Growing From Seed", text: details.growing_from_seed.clone() }
            DetailBlock { title: "Planting Considerations", text: details.planting_considerations.clone() }
            DetailBlock { title: "Feeding", text: details.feeding.clone() }
            DetailBlock { title: "Harvesting", text: details.harvesting.clone() }
            DetailBlock { title: "Storage", text: details.storage.clone() }
            DetailBlock { title: "Pruning", text: details.pruning.clone() }
            DetailBlock { title: "Herbal Uses", text: details.herbal.clone() }
        }
    }
}

#[component]
fn DetailBlock(title: String, text: String) -> Element {
    if text.trim().is_empty() {
        return rsx! {};
    }
    rsx! {
        h3 { "{title}" }
        p { "{text}" }
    }
}
