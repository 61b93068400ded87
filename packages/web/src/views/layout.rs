use dioxus::prelude::*;
use ui::{Footer, Header};

use crate::Route;

/// Header and footer around every public page.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Header {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
