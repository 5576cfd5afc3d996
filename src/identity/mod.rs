//! Optional sign-in with Google Identity Services.
//!
//! Signing in never gates the board. The credential is only kept so pages can
//! show who is signed in, verifying it is left to a collaborating backend.

mod client_id;
mod cookie;
mod handlers;

pub use client_id::{DEV_CLIENT_ID, DEV_HOSTNAMES, IdentityConfig, parse_host_mapping};
pub use handlers::{IdentityState, get_sign_in_page, get_sign_out, post_credential};
