//! Admin dashboard: plant table and the "Add Plant" wizard.
//!
//! Rendered outside the site layout. Only admins see the navigation link; the
//! page itself shows a notice to everybody else, and the backend remains the
//! place where writes are authorized.

use api::{Plant, PlantForm};
use dioxus::prelude::*;
use ui::dialogs::{alert, report_error};
use ui::icons::FaLeaf;
use ui::{use_api, use_auth, use_session_api, Icon, LogoutButton, PlantFormWizard};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    PlantList,
    AddPlant,
}

impl AdminTab {
    const ALL: [AdminTab; 2] = [AdminTab::PlantList, AdminTab::AddPlant];

    fn title(self) -> &'static str {
        match self {
            AdminTab::PlantList => "List of Plants",
            AdminTab::AddPlant => "Add Plant",
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();

    let body = if auth().is_admin() {
        rsx! { AdminPanel {} }
    } else {
        rsx! {
            div { class: "page",
                p { class: "muted", "The admin dashboard is only available to administrators." }
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    };

    rsx! {
        header { class: "admin-header",
            div { class: "brand",
                Icon { width: 18, height: 18, icon: FaLeaf }
                " Green Guide Admin"
            }
            div { class: "auth-links",
                Link { to: Route::Home {}, "← Back to site" }
                if auth().is_logged_in() {
                    LogoutButton { class: "btn btn-outline" }
                }
            }
        }
        {body}
    }
}

#[component]
fn AdminPanel() -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let mut plants = use_signal(Vec::<Plant>::new);
    let mut tab = use_signal(|| AdminTab::PlantList);
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

    let on_submit = move |form: PlantForm| {
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            match api.create_plant(&form).await {
                Ok(plant) => {
                    tracing::info!(id = %plant.id, "plant created from admin");
                    plants.write().push(plant);
                    alert("Plant added successfully!");
                    tab.set(AdminTab::PlantList);
                }
                Err(e) => {
                    report_error("Failed to create plant", &e);
                    alert(&format!("Failed to add plant: {e}"));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Dashboard" }

            div { class: "tabs", role: "tablist",
                for t in AdminTab::ALL {
                    button {
                        key: "{t.title()}",
                        class: if tab() == t { "tab active" } else { "tab" },
                        role: "tab",
                        onclick: move |_| tab.set(t),
                        "{t.title()}"
                    }
                }
            }

            {match tab() {
                AdminTab::PlantList => rsx! {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Sun" }
                                th { "" }
                            }
                        }
                        tbody {
                            for plant in plants() {
                                tr { key: "{plant.id}",
                                    td { "{plant.name()}" }
                                    td { "{plant.general_info.category}" }
                                    td { "{plant.quick_info.sun_requirement}" }
                                    td {
                                        Link { to: Route::PlantDetail { id: plant.id.clone() }, "View" }
                                    }
                                }
                            }
                        }
                    }
                    if plants().is_empty() {
                        p { class: "muted", "No plants yet." }
                    }
                },
                AdminTab::AddPlant => rsx! {
                    section { class: "card",
                        PlantFormWizard { on_submit, submitting: submitting() }
                    }
                },
            }}
        }
    }
}
