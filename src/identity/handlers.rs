//! Sign-in page and credential handlers for Google Identity Services.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{
    TypedHeader,
    extract::{Form, PrivateCookieJar, cookie::Key},
    headers::Host,
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    alert::Alert,
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, HeadElement, base, link},
    identity::{
        IdentityConfig,
        cookie::{invalidate_credential_cookie, is_signed_in, set_credential_cookie},
    },
    navigation::NavBar,
};

const GOOGLE_IDENTITY_SCRIPT: &str = "https://accounts.google.com/gsi/client";

/// The state needed for signing in and out.
#[derive(Debug, Clone)]
pub struct IdentityState {
    pub cookie_key: Key,
    pub identity: IdentityConfig,
}

impl FromRef<AppState> for IdentityState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            identity: state.identity.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<IdentityState> for Key {
    fn from_ref(state: &IdentityState) -> Self {
        state.cookie_key.clone()
    }
}

/// Display the Google sign-in widget, or an inline error if sign-in is unavailable.
pub async fn get_sign_in_page(
    State(state): State<IdentityState>,
    host: Option<TypedHeader<Host>>,
    jar: PrivateCookieJar,
) -> Response {
    let hostname = host.as_ref().map(|TypedHeader(host)| host.hostname());
    let client_id = state.identity.resolve_client_id(hostname);

    if client_id.is_none() {
        tracing::warn!("No identity client id for host {hostname:?}, sign-in is unavailable");
    }

    sign_in_view(client_id, is_signed_in(&jar)).into_response()
}

/// The form Google Identity Services posts back after a successful sign-in.
#[derive(Debug, Deserialize)]
pub struct CredentialForm {
    /// The signed ID token. Treated as an opaque string.
    pub credential: String,
}

/// Keep the credential handed back by the sign-in widget and redirect to the board.
pub async fn post_credential(jar: PrivateCookieJar, Form(form): Form<CredentialForm>) -> Response {
    let credential = form.credential.trim();

    if credential.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Alert::ErrorSimple {
                message: "Sign-in failed, no credential was received.".to_owned(),
            }
            .into_html(),
        )
            .into_response();
    }

    tracing::info!("Received identity credential ({} bytes)", credential.len());

    (
        StatusCode::SEE_OTHER,
        HxRedirect(endpoints::BOARD_VIEW.to_owned()),
        set_credential_cookie(jar, credential.to_owned()),
    )
        .into_response()
}

/// Forget the credential and return to the sign-in page.
pub async fn get_sign_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_credential_cookie(jar);

    (jar, Redirect::to(endpoints::SIGN_IN_VIEW)).into_response()
}

fn sign_in_view(client_id: Option<&str>, signed_in: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::SIGN_IN_VIEW).into_html();
    let head_elements = match client_id {
        Some(_) if !signed_in => vec![HeadElement::ScriptLinkWithFallback {
            src: GOOGLE_IDENTITY_SCRIPT.to_owned(),
            onerror: "showIdentityError()".to_owned(),
        }],
        _ => vec![],
    };

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-4" { "Sign in" }

            @if signed_in {
                p class="mb-4" { "You are signed in." }

                a href=(endpoints::SIGN_OUT) class=(BUTTON_SECONDARY_STYLE) { "Sign out" }
            } @else {
                @match client_id {
                    Some(client_id) => {
                        p class="mb-4"
                        {
                            "Signing in is optional. Your board works the same either way."
                        }

                        div
                            id="g_id_onload"
                            data-client_id=(client_id)
                            data-callback="handleCredentialResponse"
                            data-credential-endpoint=(endpoints::CREDENTIAL_API)
                            hx-target-error="#alert-container"
                            data-auto_prompt="false"
                        {}

                        div
                            class="g_id_signin"
                            data-type="standard"
                            data-theme="outline"
                            data-text="signin_with"
                        {}

                        p
                            id="identity-error"
                            class="hidden mt-4 text-red-500"
                            role="alert"
                        {
                            "Google sign-in could not be loaded. Sign-in is unavailable for now, "
                            "try reloading the page later."
                        }
                    }
                    None => {
                        p
                            id="identity-error"
                            class="mt-4 text-red-500"
                            role="alert"
                        {
                            "Sign-in is not configured for this address. "
                            "You can keep using the " (link(endpoints::BOARD_VIEW, "board")) " without signing in."
                        }
                    }
                }
            }
        }
    };

    base("Sign in", &head_elements, &content)
}
