//! Sign-in page with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, TextField};
use ui::dialogs::report_error;
use ui::{sign_in, use_api, use_auth};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api.login(email().trim(), &password()).await {
                Ok(data) => {
                    sign_in(auth, data.token, data.role);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    report_error("Login failed", &e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-card card",
            h1 { class: "page-title", "Sign In" }

            form { class: "form", onsubmit: handle_login,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                TextField {
                    label: "Email",
                    id: "login-email",
                    kind: "email",
                    value: email(),
                    placeholder: "you@example.com",
                    required: true,
                    oninput: move |v: String| email.set(v),
                }
                TextField {
                    label: "Password",
                    id: "login-password",
                    kind: "password",
                    value: password(),
                    required: true,
                    oninput: move |v: String| password.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    kind: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p { class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
