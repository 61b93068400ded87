use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page about",
            h1 { class: "page-title", "About Green Guide" }
            p {
                "Green Guide helps home gardeners decide what to plant and when. "
                "Every plant in the catalog carries its spacing, sun, water and frost "
                "needs together with spring and fall planting dates."
            }
            p {
                "Track your own gardens with watering dates, feeding schedules and "
                "growth photos, read and share tips on the blog, and use the planting "
                "calendar to see what to start indoors, transplant, sow or harvest each month."
            }
            div { class: "toolbar",
                Link { class: "btn btn-primary", to: Route::Plants {}, "Browse Plants" }
                Link { class: "btn btn-outline", to: Route::Calendar {}, "Open Calendar" }
            }
        }
    }
}
