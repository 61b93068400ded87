//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::Session;

use crate::session::make_session_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn token(&self) -> Option<String> {
        self.session.bearer().map(str::to_string)
    }

    /// `base` carrying this session's bearer token, or none when signed out.
    pub fn client_for(&self, base: &ApiClient) -> ApiClient {
        base.clone().with_token(self.token())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Backend client carrying the current session's bearer token.
pub fn use_api() -> ApiClient {
    let client = use_context::<ApiClient>();
    let auth = use_auth();
    let client = auth.read().client_for(&client);
    client
}

/// Backend client that tracks sign-in and sign-out.
///
/// Reading the memo inside `use_resource` re-runs the resource whenever the
/// session token changes.
pub fn use_session_api() -> Memo<ApiClient> {
    let client = use_context::<ApiClient>();
    let auth = use_auth();
    use_memo(move || auth.read().client_for(&client))
}

/// Persist a fresh login and publish it to the app.
pub fn sign_in(mut auth: Signal<AuthState>, token: String, role: Option<String>) {
    let session = Session::new(token, role.filter(|r| !r.is_empty()));
    session.save(&make_session_store());
    tracing::info!(admin = session.is_admin(), "signed in");
    auth.set(AuthState { session });
}

/// Forget the stored session.
pub fn sign_out(mut auth: Signal<AuthState>) {
    Session::clear(&make_session_store());
    tracing::info!("signed out");
    auth.set(AuthState::default());
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(client: ApiClient, children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        session: Session::load(&make_session_store()),
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        sign_out(auth_state);
        nav.push("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::GreenGuideConfig;

    #[test]
    fn test_client_follows_session_token() {
        let base = ApiClient::new(&GreenGuideConfig::default()).unwrap();

        let signed_out = AuthState::default();
        assert_eq!(signed_out.client_for(&base).token(), None);

        let signed_in = AuthState {
            session: Session::new("tok-1", None),
        };
        let client = signed_in.client_for(&base);
        assert_eq!(client.token(), Some("tok-1"));
        assert_eq!(client.base_url(), base.base_url());
        assert_ne!(client, signed_out.client_for(&base));
    }
}
