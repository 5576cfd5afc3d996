//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::{Error, board::Board, identity::IdentityConfig, store::Store};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The categories, their transactions and the pin set.
    pub board: Arc<Mutex<Board>>,

    /// Where board changes are persisted.
    pub store: Store,

    /// How to pick the client id for the sign-in widget.
    pub identity: IdentityConfig,
}

impl AppState {
    /// Create a new [AppState], loading the board from `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the board cannot be loaded from the store.
    pub fn new(
        store: Store,
        cookie_secret: &str,
        local_timezone: &str,
        identity: IdentityConfig,
    ) -> Result<Self, Error> {
        let board = store.load_board()?;

        Ok(Self {
            cookie_key: create_cookie_key(cookie_secret),
            local_timezone: local_timezone.to_owned(),
            board: Arc::new(Mutex::new(board)),
            store,
            identity,
        })
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// The state needed by handlers that read or change the board.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub board: Arc<Mutex<Board>>,
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BoardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            board: state.board.clone(),
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

#[cfg(test)]
impl BoardState {
    /// A memory-only state in UTC holding `board`.
    pub(crate) fn for_board(board: Board) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            store: Store::memory_only(),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
