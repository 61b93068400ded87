use dioxus::prelude::*;

use crate::icons::{
    FaBars, FaBlog, FaCalendarDays, FaCircleInfo, FaHouse, FaLeaf, FaRightToBracket, FaSeedling,
    FaUserPlus, FaUserShield,
};
use crate::{use_auth, Icon, LogoutButton};

/// Site navigation bar.
///
/// Sign-in links are swapped for a logout button once a token is stored, and
/// the admin link only appears for the `admin` role.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);

    let logged_in = auth().is_logged_in();
    let is_admin = auth().is_admin();
    let nav_class = if menu_open() { "site-nav open" } else { "site-nav" };

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: "/",
                Icon { width: 22, height: 22, icon: FaSeedling }
                span { "Green Guide" }
            }

            button {
                class: "menu-toggle",
                aria_label: "Toggle navigation",
                onclick: move |_| menu_open.toggle(),
                Icon { width: 18, height: 18, icon: FaBars }
            }

            nav { class: "{nav_class}", onclick: move |_| menu_open.set(false),
                Link { class: "nav-link", to: "/",
                    Icon { width: 14, height: 14, icon: FaHouse }
                    "Home"
                }
                Link { class: "nav-link", to: "/gardens",
                    Icon { width: 14, height: 14, icon: FaSeedling }
                    "Gardens"
                }
                Link { class: "nav-link", to: "/plant",
                    Icon { width: 14, height: 14, icon: FaLeaf }
                    "Plants"
                }
                Link { class: "nav-link", to: "/calendar",
                    Icon { width: 14, height: 14, icon: FaCalendarDays }
                    "Calendar"
                }
                Link { class: "nav-link", to: "/blog",
                    Icon { width: 14, height: 14, icon: FaBlog }
                    "Blog"
                }
                Link { class: "nav-link", to: "/about",
                    Icon { width: 14, height: 14, icon: FaCircleInfo }
                    "About"
                }
                if is_admin {
                    Link { class: "nav-link", to: "/admin",
                        Icon { width: 14, height: 14, icon: FaUserShield }
                        "Admin"
                    }
                }
            }

            div { class: "auth-links",
                if logged_in {
                    LogoutButton { class: "btn btn-outline" }
                } else {
                    Link { class: "btn btn-ghost", to: "/signin",
                        Icon { width: 14, height: 14, icon: FaRightToBracket }
                        "Sign In"
                    }
                    Link { class: "btn btn-primary", to: "/register",
                        Icon { width: 14, height: 14, icon: FaUserPlus }
                        "Register"
                    }
                }
            }
        }
    }
}
