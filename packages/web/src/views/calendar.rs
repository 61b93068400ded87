//! Planting calendar: one month strip per plant, filterable by name.

use api::schedule::filter_by_name;
use api::{Plant, PlantSchedule};
use dioxus::prelude::*;
use ui::components::Input;
use ui::dialogs::report_error;
use ui::{use_session_api, MonthHeader, MonthStrip, ScheduleLegend, ScheduleModal};

#[component]
pub fn Calendar() -> Element {
    let session_api = use_session_api();
    let mut plants = use_signal(Vec::<Plant>::new);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| Option::<Plant>::None);

    let _plants = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_plants().await {
                Ok(list) => plants.set(list),
                Err(e) => report_error("Failed to load plants", &e),
            }
        }
    });

    let all = plants();
    let rows: Vec<(Plant, PlantSchedule)> = filter_by_name(&all, &search())
        .into_iter()
        .map(|plant| (plant.clone(), PlantSchedule::for_plant(plant)))
        .collect();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Planting Calendar" }
            p { class: "muted", "Click a plant to see its dates month by month." }

            div { class: "search-box",
                Input {
                    kind: "search",
                    placeholder: "Search plants...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            ScheduleLegend {}

            div { class: "calendar",
                div { class: "calendar-row",
                    span { class: "calendar-name" }
                    MonthHeader {}
                }
                for (plant, schedule) in rows {
                    div {
                        key: "{plant.id}",
                        class: "calendar-row",
                        onclick: {
                            let plant = plant.clone();
                            move |_| selected.set(Some(plant.clone()))
                        },
                        span { class: "calendar-name", "{plant.name()}" }
                        MonthStrip { schedule }
                    }
                }
            }

            if all.is_empty() {
                p { class: "muted", "No plants to show yet." }
            }

            if let Some(plant) = selected() {
                ScheduleModal {
                    plant,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
