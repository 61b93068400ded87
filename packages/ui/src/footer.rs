use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-brand",
                h3 { "Green Guide" }
                p { "Grow with confidence, one season at a time." }
            }
            nav { class: "footer-links",
                Link { to: "/about", "About" }
                Link { to: "/blog", "Blog" }
                Link { to: "/calendar", "Calendar" }
            }
            p { class: "copyright", "© 2024 Green Guide. All rights reserved." }
        }
    }
}
