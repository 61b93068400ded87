//! Planting calendar rendering: month strips, legend and the per-plant modal.

use api::dates::format_long;
use api::schedule::events_in_month;
use api::{Plant, PlantSchedule, ScheduleKind, MONTHS};
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Twelve month cells, each striped with the activities scheduled in it.
#[component]
pub fn MonthStrip(schedule: PlantSchedule, #[props(default)] show_labels: bool) -> Element {
    rsx! {
        div { class: "month-strip",
            for (month, label) in MONTHS.iter().enumerate() {
                div {
                    key: "{month}",
                    class: "month-cell",
                    title: "{label}",
                    if show_labels {
                        span { class: "month-label", "{label}" }
                    }
                    for kind in schedule.kinds_in_month(month as u8) {
                        span {
                            key: "{kind.slug()}",
                            class: "mark mark-{kind.slug()}",
                        }
                    }
                }
            }
        }
    }
}

/// Month header row aligned with [`MonthStrip`].
#[component]
pub fn MonthHeader() -> Element {
    rsx! {
        div { class: "month-strip month-header",
            for label in MONTHS {
                div { key: "{label}", class: "month-cell", "{label}" }
            }
        }
    }
}

#[component]
pub fn ScheduleLegend() -> Element {
    rsx! {
        ul { class: "schedule-legend",
            for kind in ScheduleKind::ALL {
                li { key: "{kind.slug()}",
                    span { class: "swatch mark-{kind.slug()}" }
                    "{kind.label()}"
                }
            }
        }
    }
}

/// Month-by-month breakdown of one plant's planting dates.
#[component]
pub fn ScheduleModal(plant: Plant, on_close: EventHandler<()>) -> Element {
    let times = plant.planting_times.clone();
    let schedule = PlantSchedule::for_plant(&plant);
    let maturity = plant.quick_info.maturity_time.to_string();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { "{plant.name()}" }
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                }

                if !plant.general_info.taxonomic_name.is_empty() {
                    p { class: "muted", em { "{plant.general_info.taxonomic_name}" } }
                }

                div { class: "month-grid",
                    for (month, label) in MONTHS.iter().enumerate() {
                        div { key: "{month}", class: "month-grid-cell",
                            h4 { "{label}" }
                            for event in events_in_month(&times, month as u8) {
                                div { key: "{event.slug()}", class: "event event-{event.slug()}",
                                    strong { "{event.label()}" }
                                    span { class: "muted", "{format_long(event.date(&times))}" }
                                }
                            }
                            if schedule.begin_harvest.contains(&(month as u8)) {
                                div { class: "event mark-begin-harvest",
                                    strong { "Begin Harvest" }
                                    span { class: "muted", "{maturity} after planting" }
                                }
                            }
                        }
                    }
                }

                ScheduleLegend {}
            }
        }
    }
}
