//! Registration page with name/email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, TextField};
use ui::dialogs::report_error;
use ui::use_api;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api.register(name().trim(), email().trim(), &password()).await {
                Ok(message) => {
                    tracing::info!(%message, "account registered");
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    report_error("Registration failed", &e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-card card",
            h1 { class: "page-title", "Create Account" }

            form { class: "form", onsubmit: handle_register,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                TextField {
                    label: "Name",
                    id: "register-name",
                    value: name(),
                    required: true,
                    oninput: move |v: String| name.set(v),
                }
                TextField {
                    label: "Email",
                    id: "register-email",
                    kind: "email",
                    value: email(),
                    required: true,
                    oninput: move |v: String| email.set(v),
                }
                TextField {
                    label: "Password",
                    id: "register-password",
                    kind: "password",
                    value: password(),
                    required: true,
                    oninput: move |v: String| password.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    kind: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p { class: "muted",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
