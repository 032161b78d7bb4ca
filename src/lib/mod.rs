//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Session persistence
//!
//! The login flow stores two `localStorage` entries: `user`, a JSON object with
//! the account id and role label, and `token`, the bearer token attached to
//! staff API calls. Route guards only ever read `user`; the token is loaded on
//! demand by the views that call protected endpoints and is kept wrapped in a
//! `SecretString` so it never ends up in logs.
//!
//! Errors from the backend are surfaced as the literal message found in the
//! response body, falling back to a per-view message when the body is empty or
//! the request never reached the server.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod logging;
pub mod query;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use errors::AppError;
