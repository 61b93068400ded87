//! Garden list with delete and the "New Garden" form.

use api::dates::format_long;
use api::{FertilizationSchedule, Garden, GardenForm, Plant};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Label, Select, TextField, Textarea};
use ui::dialogs::{alert, confirm, report_error};
use ui::icons::{FaPlus, FaTrash};
use ui::{read_all_uploads, use_api, use_auth, use_session_api, Icon};

use crate::Route;

const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[component]
pub fn Gardens() -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let auth = use_auth();
    let mut gardens = use_signal(Vec::<Garden>::new);
    let mut catalog = use_signal(Vec::<Plant>::new);
    let mut show_form = use_signal(|| false);

    let _gardens = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_gardens().await {
                Ok(list) => gardens.set(list),
                Err(e) => report_error("Failed to load gardens", &e),
            }
        }
    });

    let _catalog = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_plants().await {
                Ok(list) => catalog.set(list),
                Err(e) => report_error("Failed to load plants", &e),
            }
        }
    });

    let delete_api = api.clone();
    let delete_garden = move |id: String| {
        if !confirm("Are you sure you want to delete this garden?") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_garden(&id).await {
                Ok(()) => {
                    gardens.write().retain(|g| g.id != id);
                    alert("Garden deleted successfully!");
                }
                Err(e) => {
                    report_error("Failed to delete garden", &e);
                    alert(GENERIC_FAILURE);
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            div { class: "toolbar",
                h1 { class: "page-title", "My Gardens" }
                if auth().is_logged_in() {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_form.toggle(),
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "New Garden"
                    }
                }
            }

            if show_form() {
                NewGardenForm {
                    catalog: catalog(),
                    on_created: move |garden: Garden| {
                        gardens.write().push(garden);
                        show_form.set(false);
                    },
                    on_cancel: move |_| show_form.set(false),
                }
            }

            if gardens().is_empty() {
                p { class: "muted", "No gardens yet." }
            }

            div { class: "card-grid",
                for garden in gardens() {
                    div { key: "{garden.id}", class: "card garden-card",
                        div {
                            h3 {
                                Link { to: Route::GardenDetail { id: garden.id.clone() }, "{garden.name}" }
                            }
                            p { class: "muted", "{garden.plants.len()} plants" }
                            p { class: "muted", "Last watered: {format_long(&garden.last_watered)}" }
                            p { class: "muted", "Fertilized: {garden.fertilized_schedule}" }
                        }
                        button {
                            class: "btn btn-ghost",
                            aria_label: "Delete garden",
                            onclick: {
                                let id = garden.id.clone();
                                let delete_garden = delete_garden.clone();
                                move |_| delete_garden(id.clone())
                            },
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NewGardenForm(
    catalog: Vec<Plant>,
    on_created: EventHandler<Garden>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut form = use_signal(GardenForm::default);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form();
        if let Err(e) = draft.validate() {
            alert(&e.to_string());
            return;
        }
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_garden(&draft).await {
                Ok(garden) => {
                    tracing::info!(id = %garden.id, "garden created");
                    form.set(GardenForm::default());
                    on_created.call(garden);
                    alert("Garden added successfully!");
                }
                Err(e) => {
                    report_error("Failed to create garden", &e);
                    alert(GENERIC_FAILURE);
                }
            }
            saving.set(false);
        });
    };

    let f = form();
    let schedule_options: Vec<String> = FertilizationSchedule::OPTIONS
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    rsx! {
        form { class: "form card section", onsubmit: submit,
            h2 { "New Garden" }
            TextField {
                label: "Garden Name",
                id: "garden-name",
                value: f.name.clone(),
                oninput: move |v: String| form.write().name = v,
            }

            div { class: "form-field",
                Label { "Plants" }
                PlantPicker {
                    catalog,
                    selected: f.plants.clone(),
                    onchange: move |ids: Vec<String>| form.write().plants = ids,
                }
            }

            TextField {
                label: "Last Watered",
                id: "garden-last-watered",
                kind: "date",
                value: f.last_watered.clone(),
                oninput: move |v: String| form.write().last_watered = v,
            }

            div { class: "form-field",
                Label { html_for: "garden-schedule", "Fertilization Schedule" }
                Select {
                    id: "garden-schedule",
                    value: f.fertilized_schedule.as_str().to_string(),
                    options: schedule_options,
                    onchange: move |v: String| form.write().fertilized_schedule = FertilizationSchedule::from(v),
                }
            }

            div { class: "form-field",
                Label { html_for: "garden-notes", "Growth Notes" }
                Textarea {
                    id: "garden-notes",
                    value: f.growth_notes.clone(),
                    oninput: move |evt: FormEvent| form.write().growth_notes = evt.value(),
                }
            }

            div { class: "form-field",
                Label { html_for: "garden-images", "Growth Images" }
                input {
                    id: "garden-images",
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    onchange: move |evt: FormEvent| async move {
                        let uploads = read_all_uploads(&evt).await;
                        form.write().growth_images = uploads;
                    },
                }
            }

            div { class: "wizard-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    kind: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Add Garden" }
                }
            }
        }
    }
}

/// Checkbox list over the plant catalog, reporting the selected ids.
#[component]
pub fn PlantPicker(
    catalog: Vec<Plant>,
    selected: Vec<String>,
    onchange: EventHandler<Vec<String>>,
) -> Element {
    if catalog.is_empty() {
        return rsx! { p { class: "muted", "No plants available." } };
    }

    rsx! {
        div { class: "checkbox-list",
            for plant in catalog {
                label { key: "{plant.id}",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&plant.id),
                        onchange: {
                            let id = plant.id.clone();
                            let current = selected.clone();
                            move |_| {
                                let mut ids = current.clone();
                                if ids.contains(&id) {
                                    ids.retain(|p| p != &id);
                                } else {
                                    ids.push(id.clone());
                                }
                                onchange.call(ids);
                            }
                        },
                    }
                    "{plant.name()}"
                }
            }
        }
    }
}
