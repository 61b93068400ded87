//! Multi-step "Add Plant" form.
//!
//! The wizard walks through the four [`PlantFormStep`]s, validating each one
//! before moving on, and hands the finished [`PlantForm`] to `on_submit` on the
//! last step. Image files are read into memory when picked.

use api::forms::{
    CATEGORIES, FROST_TOLERANCES, GROWING_SEASONS, HEIGHT_UNITS, SLIDE_BAR_OPTIONS,
    SUN_REQUIREMENTS, TIME_UNITS,
};
use api::{PlantForm, PlantFormStep, Upload};
use dioxus::prelude::*;

use crate::components::{
    options, Button, ButtonVariant, ErrorBanner, Label, SelectField, TextField, Textarea,
};

/// Read the first picked file of a file input.
pub async fn read_first_upload(evt: &FormEvent) -> Option<Upload> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    Some(Upload::new(name, bytes))
}

/// Read every picked file of a `multiple` file input.
pub async fn read_all_uploads(evt: &FormEvent) -> Vec<Upload> {
    let mut uploads = Vec::new();
    if let Some(engine) = evt.files() {
        for name in engine.files() {
            if let Some(bytes) = engine.read_file(&name).await {
                uploads.push(Upload::new(name, bytes));
            }
        }
    }
    uploads
}

fn step_class(step: PlantFormStep, current: PlantFormStep) -> &'static str {
    if step == current {
        "active"
    } else if step.index() < current.index() {
        "done"
    } else {
        ""
    }
}

fn number_input(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

#[component]
pub fn PlantFormWizard(
    on_submit: EventHandler<PlantForm>,
    #[props(default)] submitting: bool,
) -> Element {
    let mut form = use_signal(PlantForm::default);
    let mut step = use_signal(|| PlantFormStep::General);
    let mut error = use_signal(|| Option::<String>::None);

    let go_next = move |_: MouseEvent| {
        let current = step();
        match form.read().validate_step(current) {
            Ok(()) => {
                error.set(None);
                if let Some(next) = current.next() {
                    step.set(next);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let go_back = move |_: MouseEvent| {
        error.set(None);
        if let Some(previous) = step().previous() {
            step.set(previous);
        }
    };

    let submit = move |_: MouseEvent| {
        let snapshot = form();
        match snapshot.validate() {
            Ok(()) => {
                error.set(None);
                on_submit.call(snapshot);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let current = step();
    let f = form();

    rsx! {
        div { class: "plant-wizard",
            ol { class: "wizard-steps",
                for s in PlantFormStep::ALL {
                    li {
                        key: "{s.index()}",
                        class: step_class(s, current),
                        "{s.title()}"
                    }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            {match current {
                PlantFormStep::General => rsx! {
                    TextField {
                        label: "Plant Name",
                        id: "plant-name",
                        value: f.general_info.plant_name.clone(),
                        required: true,
                        oninput: move |v: String| form.write().general_info.plant_name = v,
                    }
                    TextField {
                        label: "Taxonomic Name",
                        id: "plant-taxonomic-name",
                        value: f.general_info.taxonomic_name.clone(),
                        oninput: move |v: String| form.write().general_info.taxonomic_name = v,
                    }
                    div { class: "form-field",
                        Label { html_for: "plant-description", "Description" }
                        Textarea {
                            id: "plant-description",
                            value: f.general_info.description.clone(),
                            oninput: move |evt: FormEvent| form.write().general_info.description = evt.value(),
                        }
                    }
                    SelectField {
                        label: "Category",
                        id: "plant-category",
                        value: f.general_info.category.clone(),
                        options: options(&CATEGORIES),
                        placeholder: "Select a category",
                        onchange: move |v: String| form.write().general_info.category = v,
                    }
                    div { class: "form-field",
                        Label { html_for: "plant-icon", "Icon" }
                        input {
                            id: "plant-icon",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt: FormEvent| async move {
                                let upload = read_first_upload(&evt).await;
                                form.write().icon = upload;
                            },
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "plant-img", "Image" }
                        input {
                            id: "plant-img",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt: FormEvent| async move {
                                let upload = read_first_upload(&evt).await;
                                form.write().img = upload;
                            },
                        }
                    }
                },
                PlantFormStep::QuickInfo => rsx! {
                    SelectField {
                        label: "Spacing",
                        id: "plant-spacing",
                        value: f.quick_info.slide_bar_option.clone(),
                        options: options(&SLIDE_BAR_OPTIONS),
                        onchange: move |v: String| form.write().quick_info.slide_bar_option = v,
                    }
                    TextField {
                        label: "Planting Depth",
                        id: "plant-depth",
                        value: f.quick_info.planting_depth.clone(),
                        oninput: move |v: String| form.write().quick_info.planting_depth = v,
                    }
                    TextField {
                        label: "Water per Week",
                        id: "plant-water",
                        value: f.quick_info.water_per_week.clone(),
                        oninput: move |v: String| form.write().quick_info.water_per_week = v,
                    }
                    SelectField {
                        label: "Sun Requirement",
                        id: "plant-sun",
                        value: f.quick_info.sun_requirement.clone(),
                        options: options(&SUN_REQUIREMENTS),
                        placeholder: "Select sun requirement",
                        onchange: move |v: String| form.write().quick_info.sun_requirement = v,
                    }
                    SelectField {
                        label: "Growing Season",
                        id: "plant-season",
                        value: f.quick_info.growing_season.clone(),
                        options: options(&GROWING_SEASONS),
                        onchange: move |v: String| form.write().quick_info.growing_season = v,
                    }
                    SelectField {
                        label: "Frost Tolerance",
                        id: "plant-frost",
                        value: f.quick_info.frost_tolerance.clone(),
                        options: options(&FROST_TOLERANCES),
                        onchange: move |v: String| form.write().quick_info.frost_tolerance = v,
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Germination Time",
                            id: "plant-germination",
                            kind: "number",
                            value: number_input(f.quick_info.germination_time.duration),
                            oninput: move |v: String| form.write().quick_info.germination_time.duration = parse_number(&v),
                        }
                        SelectField {
                            label: "Unit",
                            id: "plant-germination-unit",
                            value: f.quick_info.germination_time.unit.clone(),
                            options: options(&TIME_UNITS),
                            onchange: move |v: String| form.write().quick_info.germination_time.unit = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Max Height",
                            id: "plant-height",
                            kind: "number",
                            value: number_input(f.quick_info.max_height.height),
                            oninput: move |v: String| form.write().quick_info.max_height.height = parse_number(&v),
                        }
                        SelectField {
                            label: "Unit",
                            id: "plant-height-unit",
                            value: f.quick_info.max_height.unit.clone(),
                            options: options(&HEIGHT_UNITS),
                            onchange: move |v: String| form.write().quick_info.max_height.unit = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Maturity Time",
                            id: "plant-maturity",
                            kind: "number",
                            value: number_input(f.quick_info.maturity_time.duration),
                            oninput: move |v: String| form.write().quick_info.maturity_time.duration = parse_number(&v),
                        }
                        SelectField {
                            label: "Unit",
                            id: "plant-maturity-unit",
                            value: f.quick_info.maturity_time.unit.clone(),
                            options: options(&TIME_UNITS),
                            onchange: move |v: String| form.write().quick_info.maturity_time.unit = v,
                        }
                    }
                    TextField {
                        label: "Soil pH",
                        id: "plant-soil-ph",
                        value: f.quick_info.soil_ph.clone(),
                        oninput: move |v: String| form.write().quick_info.soil_ph = v,
                    }
                    TextField {
                        label: "Transplanting Notes",
                        id: "plant-transplanting",
                        value: f.quick_info.transplanting_notes.clone(),
                        oninput: move |v: String| form.write().quick_info.transplanting_notes = v,
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Last Spring Frost",
                            id: "plant-spring-frost",
                            kind: "date",
                            value: f.quick_info.spring_frost.clone(),
                            oninput: move |v: String| form.write().quick_info.spring_frost = v,
                        }
                        TextField {
                            label: "First Fall Frost",
                            id: "plant-fall-frost",
                            kind: "date",
                            value: f.quick_info.fall_frost.clone(),
                            oninput: move |v: String| form.write().quick_info.fall_frost = v,
                        }
                    }
                },
                PlantFormStep::PlantingTimes => rsx! {
                    div { class: "form-grid",
                        TextField {
                            label: "Spring Start Indoors",
                            id: "plant-spring-start",
                            kind: "date",
                            value: f.planting_times.spring_start_indoors.clone(),
                            oninput: move |v: String| form.write().planting_times.spring_start_indoors = v,
                        }
                        TextField {
                            label: "Spring Transplant",
                            id: "plant-spring-transplant",
                            kind: "date",
                            value: f.planting_times.spring_transplant.clone(),
                            oninput: move |v: String| form.write().planting_times.spring_transplant = v,
                        }
                        TextField {
                            label: "Spring Sow Outdoors",
                            id: "plant-spring-sow",
                            kind: "date",
                            value: f.planting_times.spring_sow_outdoors.clone(),
                            oninput: move |v: String| form.write().planting_times.spring_sow_outdoors = v,
                        }
                        TextField {
                            label: "Fall Start Indoors",
                            id: "plant-fall-start",
                            kind: "date",
                            value: f.planting_times.fall_start_indoors.clone(),
                            oninput: move |v: String| form.write().planting_times.fall_start_indoors = v,
                        }
                        TextField {
                            label: "Fall Transplant",
                            id: "plant-fall-transplant",
                            kind: "date",
                            value: f.planting_times.fall_transplant.clone(),
                            oninput: move |v: String| form.write().planting_times.fall_transplant = v,
                        }
                        TextField {
                            label: "Fall Sow Outdoors",
                            id: "plant-fall-sow",
                            kind: "date",
                            value: f.planting_times.fall_sow_outdoors.clone(),
                            oninput: move |v: String| form.write().planting_times.fall_sow_outdoors = v,
                        }
                    }
                },
                PlantFormStep::Details => rsx! {
                    DetailArea {
                        label: "Growing From Seed",
                        id: "plant-from-seed",
                        value: f.detailed_info.growing_from_seed.clone(),
                        oninput: move |v: String| form.write().detailed_info.growing_from_seed = v,
                    }
                    DetailArea {
                        label: "Planting Considerations",
                        id: "plant-considerations",
                        value: f.detailed_info.planting_considerations.clone(),
                        oninput: move |v: String| form.write().detailed_info.planting_considerations = v,
                    }
                    DetailArea {
                        label: "Feeding",
                        id: "plant-feeding",
                        value: f.detailed_info.feeding.clone(),
                        oninput: move |v: String| form.write().detailed_info.feeding = v,
                    }
                    DetailArea {
                        label: "Harvesting",
                        id: "plant-harvesting",
                        value: f.detailed_info.harvesting.clone(),
                        oninput: move |v: String| form.write().detailed_info.harvesting = v,
                    }
                    DetailArea {
                        label: "Storage",
                        id: "plant-storage",
                        value: f.detailed_info.storage.clone(),
                        oninput: move |v: String| form.write().detailed_info.storage = v,
                    }
                    DetailArea {
                        label: "Pruning",
                        id: "plant-pruning",
                        value: f.detailed_info.pruning.clone(),
                        oninput: move |v: String| form.write().detailed_info.pruning = v,
                    }
                    DetailArea {
                        label: "Herbal Uses",
                        id: "plant-herbal",
                        value: f.detailed_info.herbal.clone(),
                        oninput: move |v: String| form.write().detailed_info.herbal = v,
                    }
                },
            }}

            div { class: "wizard-actions",
                if current.previous().is_some() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: go_back,
                        "Previous"
                    }
                }
                if current.is_last() {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: submitting,
                        onclick: submit,
                        if submitting { "Saving..." } else { "Submit" }
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: go_next,
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn DetailArea(label: String, id: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "form-field",
            Label { html_for: "{id}", "{label}" }
            Textarea {
                id: "{id}",
                value,
                rows: 3,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
