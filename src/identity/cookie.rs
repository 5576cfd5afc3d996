//! Keeps the identity credential in a private cookie.
//!
//! The credential is opaque to this app. It is stored so pages can tell
//! whether the user has signed in, and is never decoded or validated here.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

pub(crate) const COOKIE_CREDENTIAL: &str = "identity_credential";
/// Google ID tokens expire after an hour, so the cookie does too.
pub(crate) const CREDENTIAL_COOKIE_DURATION: Duration = Duration::hours(1);

/// Add the credential cookie to `jar`, replacing any previous credential.
pub(crate) fn set_credential_cookie(jar: PrivateCookieJar, credential: String) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_CREDENTIAL, credential))
            .expires(OffsetDateTime::now_utc() + CREDENTIAL_COOKIE_DURATION)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(true),
    )
}

/// Set the credential cookie to an invalid value with a max age of zero so the client deletes it.
pub(crate) fn invalidate_credential_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_CREDENTIAL, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(true),
    )
}

/// Whether `jar` holds a credential.
pub(crate) fn is_signed_in(jar: &PrivateCookieJar) -> bool {
    jar.get(COOKIE_CREDENTIAL)
        .is_some_and(|cookie| !cookie.value().is_empty() && cookie.value() != "deleted")
}
