use api::{Plant, PlantForm, TreflePlant};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::dialogs::{alert, report_error};
use ui::icons::{FaPlus, FaXmark};
use ui::{use_api, use_session_api, Icon, PlantFormWizard};

use crate::Route;

/// Plant catalog with the "Add Plant" wizard and a browse section from the
/// external catalog.
#[component]
pub fn Plants() -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let mut plants = use_signal(Vec::<Plant>::new);
    let mut explore = use_signal(Vec::<TreflePlant>::new);
    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let _plants = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_plants().await {
                Ok(list) => plants.set(list),
                Err(e) => report_error("Failed to load plants", &e),
            }
        }
    });

    let _explore = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_trefle().await {
                Ok(list) => explore.set(list),
                Err(e) => report_error("Failed to load external plants", &e),
            }
        }
    });

    let create_api = api.clone();
    let on_submit = move |form: PlantForm| {
        let api = create_api.clone();
        spawn(async move {
            submitting.set(true);
            match api.create_plant(&form).await {
                Ok(plant) => {
                    tracing::info!(id = %plant.id, "plant created");
                    plants.write().push(plant);
                    show_form.set(false);
                }
                Err(e) => {
                    report_error("Failed to create plant", &e);
                    alert(&format!("Failed to add plant: {e}"));
                }
            }
            submitting.set(false);
        });
    };

    let toggle_variant = if show_form() {
        ButtonVariant::Outline
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        div { class: "page",
            div { class: "toolbar",
                h1 { class: "page-title", "Plants" }
                Button {
                    variant: toggle_variant,
                    onclick: move |_| show_form.toggle(),
                    if show_form() {
                        Icon { width: 12, height: 12, icon: FaXmark }
                        "Close"
                    } else {
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Add Plant"
                    }
                }
            }

            if show_form() {
                section { class: "section card",
                    PlantFormWizard {
                        on_submit,
                        submitting: submitting(),
                    }
                }
            }

            div { class: "card-grid",
                for plant in plants() {
                    div { key: "{plant.id}", class: "card",
                        if !plant.general_info.img.is_empty() {
                            img { src: api.asset_url(&plant.general_info.img), alt: "{plant.name()}" }
                        }
                        h3 {
                            Link { to: Route::PlantDetail { id: plant.id.clone() }, "{plant.name()}" }
                        }
                        p { class: "muted", "{plant.general_info.description}" }
                    }
                }
            }

            section { class: "section",
                h2 { "Explore More Plants" }
                div { class: "card-grid",
                    for entry in explore() {
                        div { key: "{entry.id}", class: "card",
                            if let Some(url) = entry.image_url.clone() {
                                img { src: "{url}", alt: "{entry.display_name()}" }
                            }
                            h3 { "{entry.display_name()}" }
                            p { class: "muted", em { "{entry.scientific_name}" } }
                            if let Some(family) = entry.family.clone() {
                                p { class: "muted", "Family: {family}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
