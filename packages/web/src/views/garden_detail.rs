//! Single garden: read-only view plus an inline edit mode.

use api::dates::format_long;
use api::{FertilizationSchedule, Garden, GardenUpdate, Plant, PlantRef};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Label, Select, TextField, Textarea};
use ui::dialogs::{alert, report_error};
use ui::icons::FaPenToSquare;
use ui::{use_api, use_session_api, Icon};

use super::gardens::PlantPicker;
use crate::Route;

/// Give bare plant ids a display name from the catalog when one is known.
fn with_names(plants: Vec<PlantRef>, catalog: &[Plant]) -> Vec<PlantRef> {
    plants
        .into_iter()
        .map(|plant| match plant {
            PlantRef::Id(id) => match catalog.iter().find(|p| p.id == id) {
                Some(found) => PlantRef::populated(id, found.name()),
                None => PlantRef::Id(id),
            },
            populated => populated,
        })
        .collect()
}

#[component]
pub fn GardenDetail(id: String) -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let mut garden = use_signal(|| Option::<Garden>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut catalog = use_signal(Vec::<Plant>::new);
    let mut draft = use_signal(Garden::default);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let _garden = use_resource(use_reactive!(|(id,)| {
        let api = session_api();
        async move {
            match api.get_garden(&id).await {
                Ok(found) => {
                    garden.set(Some(found));
                    load_error.set(None);
                }
                Err(e) => {
                    report_error("Failed to load garden", &e);
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    }));

    let _catalog = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_plants().await {
                Ok(list) => catalog.set(list),
                Err(e) => report_error("Failed to load plants", &e),
            }
        }
    });

    let start_edit = move |_: MouseEvent| {
        if let Some(current) = garden() {
            draft.set(current);
            editing.set(true);
        }
    };

    let save_api = api.clone();
    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let edited = draft();
        let update = GardenUpdate::from(&edited);
        let api = save_api.clone();
        spawn(async move {
            saving.set(true);
            match api.update_garden(&edited.id, &update).await {
                Ok(mut saved) => {
                    saved.plants = with_names(saved.plants, &catalog.read());
                    garden.set(Some(saved));
                    editing.set(false);
                }
                Err(e) => {
                    report_error("Failed to update garden", &e);
                    alert(&format!("Failed to update garden: {e}"));
                }
            }
            saving.set(false);
        });
    };

    let content = match (garden(), load_error()) {
        (_, Some(message)) => rsx! { ErrorBanner { message } },
        (None, None) => rsx! { p { class: "muted", "Loading garden..." } },
        (Some(current), None) if !editing() => {
            let images: Vec<String> = current
                .growth_images
                .iter()
                .map(|path| api.asset_url(path))
                .collect();
            rsx! {
                div { class: "toolbar",
                    h1 { class: "page-title", "{current.name}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: start_edit,
                        Icon { width: 12, height: 12, icon: FaPenToSquare }
                        "Edit"
                    }
                }
                section { class: "detail-section",
                    h2 { "Plants" }
                    if current.plants.is_empty() {
                        p { class: "muted", "No plants in this garden yet." }
                    }
                    ul {
                        for plant in current.plants.iter() {
                            li { key: "{plant.id()}",
                                Link {
                                    to: Route::PlantDetail { id: plant.id().to_string() },
                                    "{plant.name().unwrap_or(plant.id())}"
                                }
                            }
                        }
                    }
                }
                section { class: "detail-section",
                    dl {
                        dt { "Last Watered" } dd { "{format_long(&current.last_watered)}" }
                        dt { "Fertilization Schedule" } dd { "{current.fertilized_schedule}" }
                    }
                }
                if !current.growth_notes.trim().is_empty() {
                    section { class: "detail-section",
                        h2 { "Growth Notes" }
                        p { "{current.growth_notes}" }
                    }
                }
                if !images.is_empty() {
                    section { class: "detail-section",
                        h2 { "Growth Images" }
                        div { class: "image-strip",
                            for url in images {
                                img { key: "{url}", src: "{url}", alt: "Growth image" }
                            }
                        }
                    }
                }
            }
        }
        (Some(_), None) => {
            let d = draft();
            let schedule_options: Vec<String> = FertilizationSchedule::OPTIONS
                .iter()
                .map(|s| s.as_str().to_string())
                .collect();
            rsx! {
                form { class: "form card section", onsubmit: save,
                    h2 { "Edit Garden" }
                    TextField {
                        label: "Garden Name",
                        id: "edit-garden-name",
                        value: d.name.clone(),
                        oninput: move |v: String| draft.write().name = v,
                    }
                    div { class: "form-field",
                        Label { "Plants" }
                        PlantPicker {
                            catalog: catalog(),
                            selected: d.plant_ids(),
                            onchange: move |ids: Vec<String>| {
                                let plants = ids.into_iter().map(PlantRef::Id).collect();
                                draft.write().plants = with_names(plants, &catalog.read());
                            },
                        }
                    }
                    TextField {
                        label: "Last Watered",
                        id: "edit-garden-last-watered",
                        kind: "date",
                        value: d.last_watered.clone(),
                        oninput: move |v: String| draft.write().last_watered = v,
                    }
                    div { class: "form-field",
                        Label { html_for: "edit-garden-schedule", "Fertilization Schedule" }
                        Select {
                            id: "edit-garden-schedule",
                            value: d.fertilized_schedule.as_str().to_string(),
                            options: schedule_options,
                            onchange: move |v: String| draft.write().fertilized_schedule = FertilizationSchedule::from(v),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "edit-garden-notes", "Growth Notes" }
                        Textarea {
                            id: "edit-garden-notes",
                            value: d.growth_notes.clone(),
                            oninput: move |evt: FormEvent| draft.write().growth_notes = evt.value(),
                        }
                    }
                    div { class: "wizard-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            kind: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            Link { to: Route::Gardens {}, "← Back to gardens" }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: &str, name: &str) -> Plant {
        let mut plant = Plant::default();
        plant.id = id.into();
        plant.general_info.plant_name = name.into();
        plant
    }

    #[test]
    fn test_with_names_fills_known_ids() {
        let catalog = vec![plant("p1", "Basil"), plant("p2", "Kale")];
        let named = with_names(
            vec![PlantRef::Id("p2".into()), PlantRef::Id("gone".into())],
            &catalog,
        );
        assert_eq!(named[0], PlantRef::populated("p2", "Kale"));
        assert_eq!(named[1], PlantRef::Id("gone".into()));
    }

    #[test]
    fn test_with_names_keeps_populated_refs() {
        let named = with_names(vec![PlantRef::populated("p1", "Sweet Basil")], &[plant("p1", "Basil")]);
        assert_eq!(named[0].name(), Some("Sweet Basil"));
    }
}
