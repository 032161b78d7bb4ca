//! Authentication feature: the persisted session, role-based route gating and
//! the login, verification and password reset flows. Gating here is a UX
//! concern only; the backend authorizes every request on its own. Nothing in
//! this module may log the bearer token.
//!
//! Login stores the session record and token in `localStorage`, publishes the
//! session through [`state::AuthContext`] and sends the user to their role's
//! portal. Guards compare the stored role with the route's role and redirect
//! with a toast when they differ.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod forms;
pub mod guard;
#[cfg(target_arch = "wasm32")]
mod guards;
pub mod logout;
pub mod roles;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireRole, RouterNavigator, TimeoutScheduler};
